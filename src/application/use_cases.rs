pub mod check_setup;
pub mod run_server;

pub use check_setup::CheckSetupUseCase;
pub use run_server::RunServerUseCase;
