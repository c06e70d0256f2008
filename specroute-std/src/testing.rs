//! Testing utilities for specroute.
//!
//! This module provides sinks that make dispatcher behavior observable.
//!
//! # Features
//!
//! - [`RecordingSink`]: A sink that records every item, cleanup and close
//! - [`FailingSink`]: A sink that fails on demand and counts every call
//! - [`InjectedFailure`]: The error a [`FailingSink`] returns

use specroute_core::{BoxError, Sink};
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};
use thiserror::Error;

// ============================================================================
// Recording Sink
// ============================================================================

struct Recorded<T> {
    items: Vec<T>,
    cleanup_causes: Vec<String>,
    close_calls: usize,
}

/// A sink that records all items it receives.
///
/// Clones share the same record, so keep one clone for assertions and hand
/// the other to the dispatcher.
///
/// # Example
///
/// ```rust
/// use specroute_core::any;
/// use specroute_std::{lanes::MultiSink, testing::RecordingSink};
///
/// let recorder = RecordingSink::new();
/// let mut sink = MultiSink::builder().lane(any(), recorder.clone()).build();
///
/// sink.route(1u32).unwrap();
/// assert_eq!(recorder.items(), vec![1]);
/// ```
pub struct RecordingSink<T> {
    record: Arc<Mutex<Recorded<T>>>,
}

impl<T> RecordingSink<T> {
    /// Create a new, empty recording sink.
    pub fn new() -> Self {
        Self {
            record: Arc::new(Mutex::new(Recorded {
                items: Vec::new(),
                cleanup_causes: Vec::new(),
                close_calls: 0,
            })),
        }
    }

    /// Get a clone of the recorded items.
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.record.lock().unwrap().items.clone()
    }

    /// Get the number of recorded items.
    pub fn count(&self) -> usize {
        self.record.lock().unwrap().items.len()
    }

    /// Messages of the causes passed to `cleanup`, in call order.
    pub fn cleanup_causes(&self) -> Vec<String> {
        self.record.lock().unwrap().cleanup_causes.clone()
    }

    /// Returns `true` once `close` was called.
    pub fn is_closed(&self) -> bool {
        self.close_calls() > 0
    }

    /// Number of `close` calls.
    pub fn close_calls(&self) -> usize {
        self.record.lock().unwrap().close_calls
    }
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RecordingSink<T> {
    fn clone(&self) -> Self {
        Self {
            record: self.record.clone(),
        }
    }
}

impl<T> Sink<T> for RecordingSink<T> {
    fn accept(&mut self, item: T) -> Result<(), BoxError> {
        self.record.lock().unwrap().items.push(item);
        Ok(())
    }

    fn cleanup(&mut self, cause: &(dyn Error + 'static)) -> Result<(), BoxError> {
        self.record
            .lock()
            .unwrap()
            .cleanup_causes
            .push(cause.to_string());
        Ok(())
    }

    fn close(&mut self) -> Result<(), BoxError> {
        self.record.lock().unwrap().close_calls += 1;
        Ok(())
    }
}

// ============================================================================
// Failing Sink
// ============================================================================

/// The error returned by a [`FailingSink`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("injected {operation} failure")]
pub struct InjectedFailure {
    /// The sink operation that failed: `accept`, `cleanup` or `close`.
    pub operation: &'static str,
}

#[derive(Default)]
struct Counters {
    fail_accept: AtomicBool,
    fail_cleanup: AtomicBool,
    fail_close: AtomicBool,
    accept: AtomicUsize,
    cleanup: AtomicUsize,
    close: AtomicUsize,
}

/// A sink that can be programmed to fail, and counts every call.
///
/// # Example
///
/// ```rust
/// use specroute_core::Sink;
/// use specroute_std::testing::FailingSink;
///
/// let mut sink = FailingSink::new().fail_close();
/// assert!(Sink::<u32>::close(&mut sink).is_err());
/// assert_eq!(sink.close_calls(), 1);
/// ```
#[derive(Clone, Default)]
pub struct FailingSink {
    counters: Arc<Counters>,
}

impl FailingSink {
    /// Create a sink that succeeds at everything until told otherwise.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every `accept`.
    pub fn fail_accept(self) -> Self {
        self.counters.fail_accept.store(true, Ordering::SeqCst);
        self
    }

    /// Fail every `cleanup`.
    pub fn fail_cleanup(self) -> Self {
        self.counters.fail_cleanup.store(true, Ordering::SeqCst);
        self
    }

    /// Fail every `close`.
    pub fn fail_close(self) -> Self {
        self.counters.fail_close.store(true, Ordering::SeqCst);
        self
    }

    /// Number of `accept` calls, failed ones included.
    pub fn accept_calls(&self) -> usize {
        self.counters.accept.load(Ordering::SeqCst)
    }

    /// Number of `cleanup` calls, failed ones included.
    pub fn cleanup_calls(&self) -> usize {
        self.counters.cleanup.load(Ordering::SeqCst)
    }

    /// Number of `close` calls, failed ones included.
    pub fn close_calls(&self) -> usize {
        self.counters.close.load(Ordering::SeqCst)
    }

    fn outcome(
        count: &AtomicUsize,
        fail: &AtomicBool,
        operation: &'static str,
    ) -> Result<(), BoxError> {
        count.fetch_add(1, Ordering::SeqCst);
        if fail.load(Ordering::SeqCst) {
            Err(Box::new(InjectedFailure { operation }))
        } else {
            Ok(())
        }
    }
}

impl<T> Sink<T> for FailingSink {
    fn accept(&mut self, _item: T) -> Result<(), BoxError> {
        let c = &self.counters;
        Self::outcome(&c.accept, &c.fail_accept, "accept")
    }

    fn cleanup(&mut self, _cause: &(dyn Error + 'static)) -> Result<(), BoxError> {
        let c = &self.counters;
        Self::outcome(&c.cleanup, &c.fail_cleanup, "cleanup")
    }

    fn close(&mut self) -> Result<(), BoxError> {
        let c = &self.counters;
        Self::outcome(&c.close, &c.fail_close, "close")
    }
}
