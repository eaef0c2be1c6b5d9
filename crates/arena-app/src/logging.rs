use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable that raises the default filter to `debug`.
pub const VERBOSE_VAR: &str = "ARENA_VERBOSE";

/// Initializes the global logger.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` selects debug output and the
/// default is info.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set.
    let _ = builder.try_init();
}

/// Whether `ARENA_VERBOSE` asks for debug output.
pub fn verbose_from_env() -> bool {
    std::env::var_os(VERBOSE_VAR).is_some_and(|v| !v.is_empty() && v != "0")
}
