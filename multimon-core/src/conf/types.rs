use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TRANSPORT_DIR: &str = "/dev";
pub const DEFAULT_TRANSPORT_PATTERN: &str = r"^ttyUSB\d+$";
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportConfig {
    /// Directory listed during discovery.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Regex a file name must match to be treated as a device.
    /// The device id is taken from the trailing digits of the name.
    #[serde(default = "default_pattern")]
    pub pattern: String,

    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            pattern: default_pattern(),
            baud_rate: default_baud_rate(),
        }
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TRANSPORT_DIR)
}

fn default_pattern() -> String {
    DEFAULT_TRANSPORT_PATTERN.to_string()
}

fn default_baud_rate() -> u32 {
    DEFAULT_BAUD_RATE
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Trace every line through the logger as `<status>> <level> (<source>) <message>`.
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}
