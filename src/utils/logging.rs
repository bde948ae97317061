/// Initialize the global logger.
///
/// `RUST_LOG` takes precedence; otherwise `debug` turns on debug output
/// and the default is warnings only. Safe to call more than once.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
