use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
///
/// `verbose` forces `debug`. Otherwise `RUST_LOG` wins over `level`, and an
/// unparsable level falls back to `warn`. A second install is ignored.
pub fn init(level: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
