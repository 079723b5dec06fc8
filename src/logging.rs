//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! `RUST_LOG` directives are honored; `--verbose` guarantees at least info.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter from the `--verbose` flag and a `RUST_LOG` value.
///
/// Without `RUST_LOG` the default level is warn, or info when verbose.
/// With `RUST_LOG` its directives decide, except that verbose never ends up
/// quieter than info.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default());

    if verbose && filter.max_level_hint().is_some_and(|hint| hint < LevelFilter::INFO) {
        filter.add_directive(LevelFilter::INFO.into())
    } else {
        filter
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing(verbose: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(log_filter(false, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(true, None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_rust_log_is_honored() {
        assert_eq!(
            log_filter(false, Some("info")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
        assert_eq!(
            log_filter(true, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(false, Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_verbose_raises_quiet_rust_log() {
        assert_eq!(
            log_filter(true, Some("warn")).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_empty_rust_log_uses_default() {
        assert_eq!(log_filter(false, Some("")).max_level_hint(), Some(LevelFilter::WARN));
    }
}
