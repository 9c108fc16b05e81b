//! Main entry point for the almanac backend.

use almanac_backend::{config::Config, errors::StartupError, init_tracing, start_server};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    init_tracing();

    let config = Config::load()?;
    start_server(config).await
}
