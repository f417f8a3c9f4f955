//! Logger initialisation.

use crate::config::BridgeConfig;

/// Installs env_logger as the global logger.
///
/// `RUST_LOG` wins over `config.log_filter`. A second call, or a call after
/// the host process installed its own logger, leaves the existing one in
/// place and returns false.
pub fn init(config: &BridgeConfig) -> bool {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .format_timestamp_millis()
    .try_init()
    .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let config = BridgeConfig::default();
        init(&config);
        assert!(!init(&config));
    }
}
