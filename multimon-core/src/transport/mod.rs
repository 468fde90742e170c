//! Line-producing transports: discovery, opening and line framing.

mod discover;
mod error;
mod lines;
mod serial;


pub use discover::{TransportEntry, device_id_from_name, discover};
pub use error::{DiscoveryError, TransportError};
pub use lines::LineReader;
pub use serial::open_serial;
