use crate::conf::error::ConfigError;
use crate::conf::types::MonitorConfig;
use regex_lite::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(path, &raw)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default(path: &Path) -> Result<MonitorConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::ReadFile { source, .. }) if source.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(MonitorConfig::default())
        }
        other => other,
    }
}

pub fn parse_config(path: &Path, raw: &str) -> Result<MonitorConfig, ConfigError> {
    hcl::from_str(raw).map_err(|e| ConfigError::parse(path, e))
}

pub fn validate_config(cfg: &MonitorConfig) -> Result<(), ConfigError> {
    Regex::new(&cfg.transport.pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: cfg.transport.pattern.clone(),
        source: e,
    })?;

    if cfg.transport.baud_rate == 0 {
        return Err(ConfigError::ZeroBaudRate);
    }

    Ok(())
}
