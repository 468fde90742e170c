//! ESP-IDF style log records.
//!
//! Parsing happens in two stages: [`parse_record`] recognises the
//! `LEVEL (TICKS) SOURCE: MESSAGE<ESC>` envelope, then the per-source
//! sub-patterns ([`parse_status_change`], [`parse_own_ndi`]) are tried against
//! the message only when the source calls for it.

mod parse;
mod types;

#[cfg(test)]
mod tests;

pub use parse::{parse_own_ndi, parse_record, parse_status_change};
pub use types::{Level, LogRecord, NDI_SOURCE, STATUS_SOURCE, StatusChange};
