use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "drive-photocast",
    version,
    about = "Pushes Google Drive photo changes to browsers in realtime",
    long_about = "Polls a Google Drive folder for image files, pushes added/removed \
notifications to connected WebSocket clients, and proxies image bytes through the server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the web server and the Drive polling loop
    Run {
        /// Port to bind the web server to (overrides the PORT environment variable)
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind the web server to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Verify configuration and Drive API access, then exit
    #[command(name = "check")]
    Check,
}
