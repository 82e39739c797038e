use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g.
/// `"info,chordline_geom=debug,wgpu_core=warn"`. When it is `None`, `RUST_LOG`
/// is consulted, then `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Uses `filter` unless it is blank.
    pub fn with_filter(mut self, filter: Option<&str>) -> Self {
        self.env_filter = filter
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_owned);
        self
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder
                    .filter_level(config.default_level)
                    // wgpu is chatty at info.
                    .filter_module("wgpu_core", log::LevelFilter::Warn)
                    .filter_module("wgpu_hal", log::LevelFilter::Warn)
                    .filter_module("naga", log::LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style);

        if builder.try_init().is_err() {
            // Another logger was installed first (e.g. by a test harness).
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filter_is_ignored() {
        let cfg = LoggingConfig::default().with_filter(Some("   "));
        assert_eq!(cfg.env_filter, None);
    }

    #[test]
    fn filter_is_trimmed() {
        let cfg = LoggingConfig::default().with_filter(Some(" debug "));
        assert_eq!(cfg.env_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn repeated_init_does_not_panic() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default().with_filter(Some("trace")));
    }
}
