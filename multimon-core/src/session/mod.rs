mod device_session;
mod event;


pub use device_session::{
    DeviceSession, INITIAL_CLOCK, INITIAL_STATUS, UNKNOWN_HARDWARE_ID, UNMATCHED_SOURCE,
};
pub use event::{DeviceEvent, node_label};
