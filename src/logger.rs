use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Checked in order; the first one set wins.
const LOG_ENV_VARS: [&str; 2] = ["VOLLEY_LOG", "RUST_LOG"];

pub(crate) fn init_logging(verbose: bool, no_color: bool) {
    let directives = LOG_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(directives.as_deref(), verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

/// Explicit directives win over `--verbose`; invalid ones fall back to `info`.
fn log_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    match directives {
        Some(value) => EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("info"),
    }
}
