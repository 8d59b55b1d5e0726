use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "appworld_engine::scene=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl LoggingConfig {
    /// Config with an explicit filter, overriding `RUST_LOG`.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        builder.write_style(config.write_style);

        // try_init: a test harness or host may have installed a logger already.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_filter_overrides_env() {
        let config = LoggingConfig::with_filter("appworld_engine=trace");
        assert_eq!(config.env_filter.as_deref(), Some("appworld_engine=trace"));
    }

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig::with_filter("warn"));
        init_logging(LoggingConfig::default());
        log::warn!("still logging after second init");
    }
}
