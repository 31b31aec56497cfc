use dotenvy::dotenv;

mod config;
mod console;
mod setup;

use config::app_config::AppConfig;
use setup::{console::Console, dependency_injection::DependencyContainer};

/// Product list console entry point
///
/// Loads configuration, wires the product list against the products API and
/// hands the terminal to the console loop.
/// - config/: Environment configuration (API endpoint, list tunables)
/// - setup/: Dependency injection and the console loop
/// - console/: Command parsing, product form, rendering
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter, on stderr to keep stdout for the console
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Run console
    Console::run(container).await?;

    Ok(())
}
