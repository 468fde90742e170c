use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Log tag used by the firmware's peer status machine.
pub const STATUS_SOURCE: &str = "snail.c";

/// Log tag used by the firmware's NAN radio layer.
pub const NDI_SOURCE: &str = "nanr.c";

/// Severity letter of a log line.
///
/// `None` marks a line that did not match the structured record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    #[serde(rename = "N")]
    None,
    #[serde(rename = "I")]
    Info,
    #[serde(rename = "D")]
    Debug,
    #[serde(rename = "W")]
    Warn,
    #[serde(rename = "E")]
    Error,
}

impl Level {
    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "I" => Some(Level::Info),
            "D" => Some(Level::Debug),
            "W" => Some(Level::Warn),
            "E" => Some(Level::Error),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Level::None => 'N',
            Level::Info => 'I',
            Level::Debug => 'D',
            Level::Warn => 'W',
            Level::Error => 'E',
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A line that matched `LEVEL (TICKS) SOURCE: MESSAGE<ESC>`.
///
/// Borrows from the raw line; nothing is copied until an event is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    pub level: Level,
    pub ticks: &'a str,
    pub source: &'a str,
    pub message: &'a str,
}

/// Target state and flag of `Status change: <prev> => <next>, v: <flag>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange<'a> {
    pub next: &'a str,
    pub flag: &'a str,
}

impl StatusChange<'_> {
    /// The firmware reports a committed transition with `v: 0`.
    pub fn is_committed(&self) -> bool {
        self.flag == "0"
    }
}
