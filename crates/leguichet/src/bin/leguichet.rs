//! leguichet binary entry point

use anyhow::Result;

use leguichet::{LeGuichetServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();
    init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "LeGuichet - Shor factoring service"
    );

    let server = LeGuichetServer::new(config)?;
    server.start().await?;

    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_logging(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
