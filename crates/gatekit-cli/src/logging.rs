//! Logger setup. Library events are emitted through `tracing` and forwarded to `env_logger`.

/// Installs `env_logger` on stderr, defaulting to `warn` so stdout stays clean.
pub fn init() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    let _ = env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}
