// Tue Jan 13 2026 - Alex

use crate::config::HookConfig;
use log::LevelFilter;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs an `env_logger` at `level`. `RUST_LOG` still refines it.
    /// Later calls are no-ops, so tests and hosts may both call this.
    pub fn init_logger(level: LevelFilter) {
        let _ = env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .format_timestamp_millis()
            .try_init();
    }

    pub fn init_from_config(config: &HookConfig) {
        Self::init_logger(Self::level_from_str(&config.log_level));
    }

    pub fn level_from_str(s: &str) -> LevelFilter {
        match s.to_lowercase().as_str() {
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(LoggingUtils::level_from_str("WARNING"), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_str("trace"), LevelFilter::Trace);
        assert_eq!(LoggingUtils::level_from_str("bogus"), LevelFilter::Info);
    }

    #[test]
    fn test_init_is_idempotent() {
        LoggingUtils::init_logger(LevelFilter::Debug);
        LoggingUtils::init_from_config(&HookConfig::default());
        log::debug!("logger installed");
    }
}
