use crate::config::AppConfig;
use crate::interfaces::web::server::create_server;

pub struct RunServerUseCase {
    // Dependencies for the server would be injected here
}

impl Default for RunServerUseCase {
    fn default() -> Self {
        Self {}
    }
}

impl RunServerUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn execute(&self, config: AppConfig) -> anyhow::Result<()> {
        // Delegate to the web server module
        create_server(config).await
    }
}
