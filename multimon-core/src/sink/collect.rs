use crate::session::DeviceEvent;
use crate::sink::EventSink;
use std::io;
use std::sync::Mutex;

/// Keeps every event in memory, in arrival order.
#[derive(Default)]
pub struct CollectingSink {
    events: Mutex<Vec<DeviceEvent>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DeviceEvent> {
        self.lock().clone()
    }

    pub fn events_for(&self, device_id: u32) -> Vec<DeviceEvent> {
        self.lock()
            .iter()
            .filter(|e| e.device_id == device_id)
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<DeviceEvent>> {
        // A poisoned lock still holds every event pushed before the panic.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventSink for CollectingSink {
    fn emit(&self, event: &DeviceEvent) -> io::Result<()> {
        self.lock().push(event.clone());
        Ok(())
    }
}
