//! Pokedex - An interactive catalog browser
//!
//! Browses PokeAPI location areas, catches Pokemon into a local collection,
//! and keeps recent API responses in a TTL cache swept in the background.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::config::{Args, Config};
use pokedex::{repl, PokeApiClient, ReplContext, ResponseCache};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber for logging (stderr)
/// 3. Load configuration from environment variables, then apply flags
/// 4. Create the response cache, which starts its sweep task
/// 5. Run the REPL on stdin/stdout until `exit` or EOF
/// 6. Stop the sweep task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with REPL output
    // Defaults to "warn" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().with_args(&args);
    config.validate()?;
    info!(
        "Configuration loaded: cache_ttl={:?}, api_base_url={}, http_timeout={:?}",
        config.cache_ttl, config.api_base_url, config.http_timeout
    );

    let cache = Arc::new(ResponseCache::new(config.cache_ttl));
    let client =
        PokeApiClient::new(cache.clone(), &config).context("failed to build HTTP client")?;
    let mut ctx = ReplContext::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    repl::run(&mut ctx, stdin, &mut stdout).await?;

    // The client holds the other reference to the cache
    drop(ctx);
    match Arc::try_unwrap(cache) {
        Ok(cache) => cache.shutdown().await,
        Err(_) => info!("Cache still shared at exit; sweep task ends with the runtime"),
    }

    info!("Pokedex closed");
    Ok(())
}
