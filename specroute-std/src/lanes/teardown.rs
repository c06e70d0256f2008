//! Outcome of fan-out teardown.

use specroute_core::BoxError;
use std::fmt;
use thiserror::Error;

/// Which teardown operation a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// [`Sink::cleanup`](specroute_core::Sink::cleanup)
    Cleanup,
    /// [`Sink::close`](specroute_core::Sink::close)
    Close,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Cleanup => f.write_str("cleanup"),
            Phase::Close => f.write_str("close"),
        }
    }
}

/// One sink that failed during teardown.
///
/// Carried as a warning inside a [`TeardownReport`], never returned as an
/// error from the teardown call itself.
#[derive(Error, Debug)]
#[error("{phase} failed for lane {lane}{}", label(.name))]
pub struct TeardownFailure {
    /// Index of the lane in registration order.
    pub lane: usize,
    /// Lane name, if the lane was registered with one.
    pub name: Option<String>,
    /// The operation that failed.
    pub phase: Phase,
    /// The error the sink returned.
    #[source]
    pub error: BoxError,
}

fn label(name: &Option<String>) -> String {
    name.as_deref()
        .map(|name| format!(" ({name})"))
        .unwrap_or_default()
}

/// Every failure collected while tearing down all lanes.
#[derive(Debug, Default)]
pub struct TeardownReport {
    failures: Vec<TeardownFailure>,
}

impl TeardownReport {
    pub(crate) fn push(&mut self, failure: TeardownFailure) {
        self.failures.push(failure);
    }

    /// Returns `true` if every sink was torn down without error.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failures, in lane order.
    pub fn failures(&self) -> &[TeardownFailure] {
        &self.failures
    }

    /// Lane indices that failed.
    pub fn failed_lanes(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.lane).collect()
    }
}

impl IntoIterator for TeardownReport {
    type Item = TeardownFailure;
    type IntoIter = std::vec::IntoIter<TeardownFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
