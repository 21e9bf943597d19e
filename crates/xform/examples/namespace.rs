//! Pass a transform into the namespaced utility.
//!
//! `RUST_LOG=xform=trace cargo run -p xform --example namespace`

use tracing::info;
use tracing_subscriber::EnvFilter;
use xform::utils;

fn encrypt(string: &str) -> String { string.to_uppercase() }

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let encrypted_password = utils::apply_transform(encrypt, "my-password-1234");
    info!(%encrypted_password, "typed transform");

    let by_name: utils::Builtin = "encrypt".parse()?;
    let injected = utils::Injected::from(by_name);
    let output = utils::apply_injected(&injected, Some("my-password-1234"))?;
    info!(transform = %by_name, %output, "injected transform");

    Ok(())
}
