//! Logger setup for the headless `polyarena` binary
//!
//! The library only emits `log` records. The binary calls [`init`] once,
//! before settings are loaded and the scene is spawned.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter used when `RUST_LOG` is unset.
///
/// Per-actor state is logged at debug by this crate only, so dependencies
/// stay at warn either way.
fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    format!("warn,{}={level}", env!("CARGO_CRATE_NAME"))
}

/// Install the global logger. `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    // Frame numbers are the clock in run summaries
    builder.format_timestamp(None);

    if builder.try_init().is_err() {
        log::debug!("logger already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_scopes_to_crate() {
        assert_eq!(default_filter(false), "warn,polyarena=INFO");
        assert_eq!(default_filter(true), "warn,polyarena=DEBUG");
    }
}
