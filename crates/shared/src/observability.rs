//! `tracing` setup shared by the binary and tests.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter`. Calling it again is a no-op.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
    {
        Ok(()) => Ok(()),
        Err(e) if tracing::dispatcher::has_been_set() => {
            tracing::debug!("tracing already initialised: {e}");
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("tracing setup failed: {e}")),
    }
}
