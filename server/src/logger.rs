//! Global tracing subscriber for the server binary.
//!
//! The configured `LOG_LEVEL` is a filter: a bare level (`"info"`) or
//! comma-separated directives (`"info,greeter_core=debug"`). A valid
//! `RUST_LOG` replaces it entirely.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;

/// Installs the fmt subscriber on stderr. Call once, after config is loaded.
pub fn init(log_level: &str) -> Result<(), ServerError> {
    let configured = log_filter(log_level)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or(configured);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| ServerError::Logger(format!("failed to set subscriber: {e}")))
}

/// Validates `directives` and builds the matching [`EnvFilter`].
///
/// Each directive is either a bare level or `target=level`. A bare word that
/// is not a level is refused: `EnvFilter` would read it as a target name and
/// silently enable everything under it.
pub fn log_filter(directives: &str) -> Result<EnvFilter, ServerError> {
    let directives = directives.trim();
    if directives.is_empty() {
        return Err(ServerError::Logger("log level must not be empty".into()));
    }

    for directive in directives.split(',').map(str::trim) {
        if directive.contains('=') {
            continue;
        }
        directive.parse::<LevelFilter>().map_err(|_| {
            ServerError::Logger(format!("unrecognised log level: '{directive}'"))
        })?;
    }

    EnvFilter::try_new(directives)
        .map_err(|e| ServerError::Logger(format!("invalid log filter '{directives}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_levels_are_accepted() {
        for level in ["error", "warn", "info", "debug", "trace", "off", " info "] {
            assert!(log_filter(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn target_directives_are_accepted() {
        for directives in [
            "greeter_core=debug",
            "info,greeter_core=debug",
            "warn, greeter_server=trace ,greeter_core=info",
        ] {
            assert!(log_filter(directives).is_ok(), "{directives}");
        }
    }

    #[test]
    fn unknown_bare_words_are_refused() {
        for directives in ["verbose", "info,loud", ""] {
            assert!(
                matches!(log_filter(directives), Err(ServerError::Logger(_))),
                "{directives:?}"
            );
        }
    }

    #[test]
    fn bad_level_inside_directive_is_refused() {
        assert!(log_filter("greeter_core=loud").is_err());
    }

    #[test]
    fn init_refuses_invalid_level_before_installing() {
        assert!(matches!(init("loud"), Err(ServerError::Logger(_))));
    }

    #[test]
    fn init_accepts_directives() {
        // A subscriber may already be installed by another test in this binary.
        match init("info,greeter_core=debug") {
            Ok(()) => {}
            Err(ServerError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
