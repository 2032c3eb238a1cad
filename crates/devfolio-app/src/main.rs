mod config;
mod screens;
mod service;

use anyhow::Result;
use config::Config;
use service::AppService;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Create and run the client
    let app = AppService::new(config);
    app.run().await
}
