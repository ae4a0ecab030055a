//! Testing utilities for Switchboard.
//!
//! - [`RecordingDelegate`]: A delegate that records every count it receives
//! - [`CallLog`]: A shared log that several named delegates append to, for
//!   checking invocation order across delegates

use std::sync::{Arc, Mutex};
use switchboard_core::{Delegate, EventData};

// ============================================================================
// Recording Delegate
// ============================================================================

/// A delegate that records every [`EventData`] value it is invoked with.
///
/// Clones share the same record, so keep one clone for assertions and
/// register the other.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingDelegate::new();
/// let registry = RegistryBuilder::new()
///     .register("Foo", recorder.clone())
///     .build();
///
/// registry.dispatch();
/// assert_eq!(recorder.observed(), vec![1]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingDelegate {
    observed: Arc<Mutex<Vec<EventData>>>,
}

impl RecordingDelegate {
    /// Create a new recording delegate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of the recorded counts.
    pub fn observed(&self) -> Vec<EventData> {
        self.observed.lock().unwrap().clone()
    }

    /// Get the number of invocations.
    pub fn count(&self) -> usize {
        self.observed.lock().unwrap().len()
    }

    /// Clear the record.
    pub fn clear(&self) {
        self.observed.lock().unwrap().clear();
    }
}

impl Delegate for RecordingDelegate {
    fn invoke(&self, data: &mut EventData) {
        self.observed.lock().unwrap().push(*data);
    }
}

// ============================================================================
// Call Log
// ============================================================================

/// An ordered record of `(handler name, count)` pairs.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let registry = RegistryBuilder::new()
///     .register("Foo", log.delegate("Foo"))
///     .register("Bar", log.delegate("Bar"))
///     .build();
///
/// registry.dispatch();
/// assert_eq!(log.calls(), vec![("Foo", 1), ("Bar", 2)]);
/// ```
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<(&'static str, EventData)>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A delegate that appends `(name, count)` to this log when invoked.
    pub fn delegate(&self, name: &'static str) -> LoggedCall {
        LoggedCall {
            name,
            calls: self.calls.clone(),
        }
    }

    /// Get a copy of the recorded calls, oldest first.
    pub fn calls(&self) -> Vec<(&'static str, EventData)> {
        self.calls.lock().unwrap().clone()
    }

    /// Get only the handler names, oldest first.
    pub fn names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(name, _)| *name).collect()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// Delegate handed out by [`CallLog::delegate`].
#[derive(Clone)]
pub struct LoggedCall {
    name: &'static str,
    calls: Arc<Mutex<Vec<(&'static str, EventData)>>>,
}

impl Delegate for LoggedCall {
    fn invoke(&self, data: &mut EventData) {
        self.calls.lock().unwrap().push((self.name, *data));
    }
}
