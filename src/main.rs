use dotenv::dotenv;
use tracing::{info, warn};

use primepillar_backend::app::app::App;
use primepillar_backend::util::logger::Logger;

#[tokio::main]
async fn main() {
    // Console + rolling file logging; guards must stay alive for the process
    let _logger = Logger::new().expect("Failed to initialize logging");

    info!("Starting PrimePillar backend");

    // Load environment variables from .env file
    match dotenv() {
        Ok(_) => info!("Successfully loaded .env file"),
        Err(e) => warn!("Failed to load .env file: {} (using system env vars)", e),
    }

    let app = App::new();
    app.start().await;
}
