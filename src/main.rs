use anyhow::Result;
use handbook_dictionary::{config::Config, generator};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt().with_env_filter(log_filter()?).init();

    if let Err(e) = run() {
        error!("Error generating translation dictionary: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

/// `RUST_LOG` directives, with this crate's progress output always at info.
fn log_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::from_default_env().add_directive("handbook_dictionary=info".parse()?))
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    info!(
        "Generating translation dictionary from {}",
        config.handbooks_dir.display()
    );

    let generation = generator::generate(&config)?;

    info!(
        "Done: {} entries written to {}",
        generation.dictionary.len(),
        config.output_dir.display()
    );
    Ok(())
}
