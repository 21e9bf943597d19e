//! Use the arithmetic helpers.

use tracing::info;
use tracing_subscriber::EnvFilter;
use xform::{BASE_VALUE, add};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let result = add(1, BASE_VALUE);
    info!("Result is: {result}");

    Ok(())
}
