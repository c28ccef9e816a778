use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` and defaults to `info`. With `json` set,
/// events are written as one JSON object per line.
pub fn init_tracing(json: bool) -> eyre::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if json {
        builder
            .json()
            .try_init()
            .map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
    } else {
        builder
            .try_init()
            .map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
    }
}
