//! Capacity-change observers
//!
//! A lot calls every registered [`Notifiable`] once when it becomes full and
//! once when it stops being full. Calls happen after the park or unpark has
//! been applied, so an observer can only see the new state.

use crate::domain::LotId;
use std::cell::RefCell;
use std::fmt;
use tracing::info;

/// Receiver of full/available transitions
pub trait Notifiable {
    fn notify_full(&self, lot: LotId);
    fn notify_available(&self, lot: LotId);
}

/// A single capacity transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityEvent {
    Full(LotId),
    Available(LotId),
}

impl fmt::Display for CapacityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityEvent::Full(lot) => write!(f, "{} is full", lot),
            CapacityEvent::Available(lot) => write!(f, "{} has space available", lot),
        }
    }
}

/// Writes transitions to the log under a display name
#[derive(Debug)]
pub struct LoggingNotifier {
    name: String,
}

impl LoggingNotifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Notifiable for LoggingNotifier {
    fn notify_full(&self, lot: LotId) {
        info!(observer = %self.name, %lot, "lot is full");
    }

    fn notify_available(&self, lot: LotId) {
        info!(observer = %self.name, %lot, "lot has space available");
    }
}

/// Buffers transitions until the owner drains them
#[derive(Debug, Default)]
pub struct EventRecorder {
    events: RefCell<Vec<CapacityEvent>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every event recorded so far, oldest first
    pub fn drain(&self) -> Vec<CapacityEvent> {
        self.events.take()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl Notifiable for EventRecorder {
    fn notify_full(&self, lot: LotId) {
        self.events.borrow_mut().push(CapacityEvent::Full(lot));
    }

    fn notify_available(&self, lot: LotId) {
        self.events.borrow_mut().push(CapacityEvent::Available(lot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_drains_in_order() {
        let recorder = EventRecorder::new();
        let lot = LotId::next();

        recorder.notify_full(lot);
        recorder.notify_available(lot);
        assert_eq!(recorder.len(), 2);

        let events = recorder.drain();
        assert_eq!(
            events,
            vec![CapacityEvent::Full(lot), CapacityEvent::Available(lot)]
        );
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_event_display() {
        let lot = LotId::next();
        assert_eq!(
            CapacityEvent::Full(lot).to_string(),
            format!("{} is full", lot)
        );
    }
}
