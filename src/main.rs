//! Pokecache - interactive cache-first fetcher
//!
//! Reads commands from stdin and fetches URLs through a TTL cache, so
//! repeated requests within the cache interval never reach the network.

use std::io::Write;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokecache::cli::{spawn_line_reader, Command, HELP};
use pokecache::{CachedFetcher, Config, FetchOutcome, HttpFetcher, TtlCache};

/// Entry point.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache (which starts its reaper) and the HTTP fetcher
/// 4. Warm the cache with the start URL
/// 5. Run the prompt until `exit`, EOF or Ctrl+C
/// 6. Close the cache
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokecache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_interval={}ms, request_timeout={}s",
        config.cache_interval_ms, config.request_timeout_secs
    );

    let cache = TtlCache::new(config.cache_interval()).context("failed to create cache")?;
    let http = HttpFetcher::new(config.request_timeout()).context("failed to build HTTP client")?;
    let fetcher = CachedFetcher::new(cache, http);

    if let Err(err) = fetcher.fetch(&config.start_url).await {
        error!("Could not warm cache with {}: {}", config.start_url, err);
    }

    tokio::select! {
        result = run_prompt(&fetcher) => result?,
        _ = signal::ctrl_c() => info!("Received Ctrl+C, shutting down..."),
    }

    fetcher.close().await;
    Ok(())
}

/// Reads and executes commands until `exit` or end of input.
async fn run_prompt(fetcher: &CachedFetcher<HttpFetcher>) -> anyhow::Result<()> {
    let mut lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))?;

    loop {
        print!("Pokecache > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.recv().await else {
            return Ok(());
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("Error: {}", err);
                continue;
            }
        };

        match command {
            Command::Fetch(url) => match fetcher.fetch(&url).await {
                Ok((body, outcome)) => {
                    let source = match outcome {
                        FetchOutcome::Hit => "cache",
                        FetchOutcome::Miss => "network",
                    };
                    println!("{} bytes from {}", body.len(), source);
                }
                Err(err) => println!("Error: {}", err),
            },
            Command::Stats => {
                let stats = fetcher.cache().stats().await;
                println!("{}", serde_json::to_string_pretty(&stats)?);
            }
            Command::Help => println!("{}", HELP),
            Command::Exit => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}
