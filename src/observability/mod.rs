//! Logging setup and crash reporting.
//!
//! Diagnostics go to stderr through `tracing`, so stdout stays clean for
//! reports, tokens and JSON. The default level is `warn`; each `-v` raises it
//! one step and `RUST_LOG` overrides both.

pub mod panic_hook;

pub use panic_hook::install_panic_hook;

use tracing_subscriber::EnvFilter;

/// Directive applied for a given `-v` count.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "readiness=warn",
        1 => "readiness=info",
        2 => "readiness=debug",
        _ => "readiness=trace",
    }
}

pub fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) if !value.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::new("warn").add_directive(verbosity_directive(verbosity).parse()?),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;
    Ok(())
}
