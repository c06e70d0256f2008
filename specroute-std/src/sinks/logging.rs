//! Logging sink wrapper for item observation.

use specroute_core::{BoxError, Sink};
use std::{borrow::Cow, error::Error, fmt::Debug};

/// A sink wrapper that logs every item before delegating.
///
/// Uses the `tracing` crate when the `tracing` feature is enabled, and is a
/// plain pass-through otherwise.
///
/// # Example
///
/// ```rust
/// use specroute_std::sinks::{LoggingSink, NullSink};
/// use specroute_core::Sink;
///
/// let mut sink = LoggingSink::named("ignored", NullSink);
/// sink.accept("org.example:lib:1.0").unwrap();
/// ```
pub struct LoggingSink<S> {
    inner: S,
    name: Cow<'static, str>,
}

impl<S> LoggingSink<S> {
    /// Wrap `inner` with the default name.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            name: Cow::Borrowed("sink"),
        }
    }

    /// Wrap `inner`; `name` identifies the sink in log events.
    pub fn named(name: impl Into<Cow<'static, str>>, inner: S) -> Self {
        Self {
            inner,
            name: name.into(),
        }
    }

    /// The name used in log events.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unwrap the inner sink.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S> Sink<T> for LoggingSink<S>
where
    T: Debug,
    S: Sink<T>,
{
    fn accept(&mut self, item: T) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %self.name, item = ?item, "accept");
        self.inner.accept(item)
    }

    fn cleanup(&mut self, cause: &(dyn Error + 'static)) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %self.name, cause = %cause, "cleanup");
        self.inner.cleanup(cause)
    }

    fn close(&mut self) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %self.name, "close");
        self.inner.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{sinks::NullSink, testing::RecordingSink};

    #[test]
    fn test_logging_sink_delegates() {
        let recorder = RecordingSink::new();
        let mut sink = LoggingSink::new(recorder.clone());

        sink.accept(7u32).unwrap();
        Sink::<u32>::close(&mut sink).unwrap();

        assert_eq!(recorder.items(), vec![7]);
        assert!(recorder.is_closed());
    }

    #[test]
    fn test_logging_sink_named_at_runtime() {
        let tree = specroute_core::parse("split(poms)").unwrap();
        let lane = tree.root().literals().next().unwrap().to_string();

        let recorder = RecordingSink::new();
        let mut sink = LoggingSink::named(lane, recorder.clone());
        assert_eq!(sink.name(), "poms");
        assert_eq!(LoggingSink::new(NullSink).name(), "sink");

        sink.accept("a:b:pom").unwrap();
        assert_eq!(recorder.items(), vec!["a:b:pom"]);
    }
}
