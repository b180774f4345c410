//! Shared test infrastructure for neopixel-cycler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::time::Duration;
use std::cell::RefCell;
use std::rc::Rc;

use neopixel_cycler::{LedStrip, RGB8, Sleeper};

// ============================================================================
// Mock Strip
// ============================================================================

/// One observed strip operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripEvent {
    /// A `set_pixel` call.
    Set { index: usize, color: RGB8 },
    /// A `show` call.
    Show,
}

/// Mock strip that records every operation for testing.
///
/// The event log is shared behind an `Rc` so tests can keep inspecting
/// it while the cycler owns the strip.
pub struct MockStrip {
    len: usize,
    events: Rc<RefCell<Vec<StripEvent>>>,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Handle onto the shared event log.
    pub fn log(&self) -> EventLog {
        EventLog {
            events: Rc::clone(&self.events),
        }
    }
}

impl LedStrip for MockStrip {
    type Error = core::convert::Infallible;

    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        assert!(index < self.len, "set_pixel index {} out of range", index);
        self.events
            .borrow_mut()
            .push(StripEvent::Set { index, color });
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.events.borrow_mut().push(StripEvent::Show);
        Ok(())
    }
}

/// Read-side view of a [`MockStrip`]'s recorded operations.
pub struct EventLog {
    events: Rc<RefCell<Vec<StripEvent>>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<StripEvent> {
        self.events.borrow().clone()
    }

    pub fn show_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, StripEvent::Show))
            .count()
    }

    pub fn set_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| matches!(e, StripEvent::Set { .. }))
            .count()
    }

    /// The colors staged by the last frame, i.e. the `Set` events after
    /// the second-to-last `Show`.
    pub fn last_frame(&self) -> Vec<(usize, RGB8)> {
        let events = self.events.borrow();
        let last_show = events
            .iter()
            .rposition(|e| matches!(e, StripEvent::Show))
            .expect("no show recorded");
        events[..last_show]
            .iter()
            .rev()
            .take_while(|e| matches!(e, StripEvent::Set { .. }))
            .filter_map(|e| match e {
                StripEvent::Set { index, color } => Some((*index, *color)),
                StripEvent::Show => None,
            })
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect()
    }
}

// ============================================================================
// Mock Sleeper
// ============================================================================

/// Mock sleeper that records requested delays instead of blocking.
#[derive(Default)]
pub struct MockSleeper {
    pub sleeps: Vec<Duration>,
}

impl MockSleeper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sleeper for MockSleeper {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
