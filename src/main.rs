//! Message store server binary.
//!
//! Loads `.env`, reads settings from the environment (see [`message_store::config`]),
//! installs the tracing subscriber, and serves until ctrl-c.

use message_store::{
    bootstrap,
    config::{self, Settings},
    telemetry,
};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_error = config::load_dotenv();
    let settings = Settings::from_env()?;
    telemetry::init(&settings.log_filter)?;
    if let Some(err) = dotenv_error {
        warn!(error = %err, "failed to load .env file");
    }
    bootstrap::run(&settings).await?;
    Ok(())
}
