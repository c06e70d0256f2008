//! Ordered multi-lane dispatcher.

use super::teardown::{Phase, TeardownFailure, TeardownReport};
use crate::error::DispatchError;
use specroute_core::{BoxError, BoxMatcher, BoxSink, Matcher, Sink};
use std::error::Error;

/// The result of routing one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteResult {
    /// Index of the lane that accepted the item, `None` if it was dropped.
    pub lane: Option<usize>,
}

impl RouteResult {
    /// The item was delivered to `lane`.
    pub const fn matched(lane: usize) -> Self {
        Self { lane: Some(lane) }
    }

    /// No lane matched; the item was dropped.
    pub const fn dropped() -> Self {
        Self { lane: None }
    }

    /// Returns `true` if no lane matched.
    pub const fn is_dropped(&self) -> bool {
        self.lane.is_none()
    }
}

/// One (matcher, sink) pair.
pub struct Lane<'a, T> {
    name: Option<String>,
    matcher: BoxMatcher<'a, T>,
    sink: BoxSink<'a, T>,
}

impl<'a, T> Lane<'a, T> {
    /// Create a new lane.
    pub fn new<M, S>(matcher: M, sink: S) -> Self
    where
        M: Matcher<T> + Send + 'a,
        S: Sink<T> + Send + 'a,
    {
        Self {
            name: None,
            matcher: Box::new(matcher),
            sink: Box::new(sink),
        }
    }

    /// Create a lane from an already boxed matcher, e.g. one assembled at
    /// runtime from a parsed spec.
    pub fn from_boxed(matcher: BoxMatcher<'a, T>, sink: BoxSink<'a, T>) -> Self {
        Self {
            name: None,
            matcher,
            sink,
        }
    }

    /// Set a name used in log events and teardown reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The lane name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl<T> std::fmt::Debug for Lane<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lane").field("name", &self.name).finish_non_exhaustive()
    }
}

// ============================================================================
// MultiSinkBuilder
// ============================================================================

/// Builder for constructing a [`MultiSink`].
///
/// Lanes are tried in the order they are added here.
///
/// # Example
/// ```ignore
/// let sink = MultiSink::builder()
///     .lane(|a: &Artifact| a.extension == "pom", poms)
///     .lane(any(), everything_else)
///     .build();
/// ```
pub struct MultiSinkBuilder<'a, T> {
    lanes: Vec<Lane<'a, T>>,
}

impl<'a, T> MultiSinkBuilder<'a, T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Add a lane.
    pub fn lane<M, S>(mut self, matcher: M, sink: S) -> Self
    where
        M: Matcher<T> + Send + 'a,
        S: Sink<T> + Send + 'a,
    {
        self.add_lane(Lane::new(matcher, sink));
        self
    }

    /// Add a named lane.
    pub fn named_lane<M, S>(mut self, name: impl Into<String>, matcher: M, sink: S) -> Self
    where
        M: Matcher<T> + Send + 'a,
        S: Sink<T> + Send + 'a,
    {
        self.add_lane(Lane::new(matcher, sink).with_name(name));
        self
    }

    /// Add a prepared lane (mutable version).
    pub fn add_lane(&mut self, lane: Lane<'a, T>) {
        self.lanes.push(lane);
    }

    /// Freeze the lane list.
    pub fn build(self) -> MultiSink<'a, T> {
        MultiSink {
            lanes: self.lanes,
            closed: false,
        }
    }

    /// Get the number of lanes added so far.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Check if no lane was added.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

impl<T> Default for MultiSinkBuilder<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MultiSink
// ============================================================================

/// Routes each item to the first lane whose matcher accepts it.
///
/// - Matchers are evaluated strictly in registration order; evaluation stops
///   at the first match.
/// - An item no matcher accepts is dropped without error.
/// - A sink failure is returned to the caller unchanged and is not retried.
///
/// Teardown fans out to every sink: one sink failing to close or clean up
/// never prevents the others from being attempted. Failures are logged as
/// warnings and collected in a [`TeardownReport`].
///
/// `MultiSink` owns its sinks. It is itself a [`Sink`], so dispatchers can
/// be nested.
pub struct MultiSink<'a, T> {
    lanes: Vec<Lane<'a, T>>,
    closed: bool,
}

impl<'a, T> MultiSink<'a, T> {
    /// Start building a dispatcher.
    pub fn builder() -> MultiSinkBuilder<'a, T> {
        MultiSinkBuilder::new()
    }

    /// Delivers `item` to the first matching lane.
    pub fn route(&mut self, item: T) -> Result<RouteResult, BoxError> {
        if self.closed {
            return Err(Box::new(DispatchError::Closed));
        }

        let Some(index) = self
            .lanes
            .iter()
            .position(|lane| lane.matcher.matches(&item))
        else {
            #[cfg(feature = "tracing")]
            tracing::debug!(lanes = self.lanes.len(), "no lane accepted item, dropping");
            return Ok(RouteResult::dropped());
        };

        let lane = &mut self.lanes[index];
        #[cfg(feature = "tracing")]
        tracing::trace!(lane = index, name = ?lane.name, "routing item");
        lane.sink.accept(item)?;
        Ok(RouteResult::matched(index))
    }

    /// Best-effort cleanup of every sink after the operation failed with
    /// `cause`.
    pub fn cleanup_all(&mut self, cause: &(dyn Error + 'static)) -> TeardownReport {
        if self.closed {
            #[cfg(feature = "tracing")]
            tracing::debug!("cleanup requested on a closed dispatcher, ignoring");
            return TeardownReport::default();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(lanes = self.lanes.len(), cause = %cause, "cleaning up sinks");
        self.teardown(Phase::Cleanup, |sink| sink.cleanup(cause))
    }

    /// Closes every sink and marks the dispatcher closed.
    ///
    /// Failures are reported, never returned as an error. Calling this again
    /// is a no-op.
    pub fn close_all(&mut self) -> TeardownReport {
        if self.closed {
            #[cfg(feature = "tracing")]
            tracing::debug!("dispatcher already closed");
            return TeardownReport::default();
        }
        self.closed = true;
        self.teardown(Phase::Close, |sink| sink.close())
    }

    fn teardown<F>(&mut self, phase: Phase, mut op: F) -> TeardownReport
    where
        F: FnMut(&mut BoxSink<'a, T>) -> Result<(), BoxError>,
    {
        let mut report = TeardownReport::default();
        for (index, lane) in self.lanes.iter_mut().enumerate() {
            if let Err(error) = op(&mut lane.sink) {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    lane = index,
                    name = ?lane.name,
                    %phase,
                    error = %error,
                    "sink teardown failed"
                );
                report.push(TeardownFailure {
                    lane: index,
                    name: lane.name.clone(),
                    phase,
                    error,
                });
            }
        }
        report
    }

    /// Returns `true` once [`close_all`](Self::close_all) ran.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Get the number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Check if there are no lanes.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// The lanes, in routing order.
    pub fn lanes(&self) -> &[Lane<'a, T>] {
        &self.lanes
    }
}

impl<T> Sink<T> for MultiSink<'_, T> {
    fn accept(&mut self, item: T) -> Result<(), BoxError> {
        self.route(item).map(|_| ())
    }

    fn cleanup(&mut self, cause: &(dyn Error + 'static)) -> Result<(), BoxError> {
        self.cleanup_all(cause);
        Ok(())
    }

    fn close(&mut self) -> Result<(), BoxError> {
        self.close_all();
        Ok(())
    }
}

impl<T> std::fmt::Debug for MultiSink<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiSink")
            .field("lanes", &self.lanes)
            .field("closed", &self.closed)
            .finish()
    }
}
