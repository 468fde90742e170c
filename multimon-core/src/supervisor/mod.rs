//! Binds one [`DeviceSession`](crate::session::DeviceSession) per transport
//! and owns their lifecycle.

mod registry;
mod route;
mod run;

#[cfg(test)]
mod tests;

pub use registry::TransportRegistry;
pub use route::route_lines;
pub use run::{Shutdown, bind_all, run, supervise};
