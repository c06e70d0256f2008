//! # Sinks
//!
//! A [`Sink`] is the terminal endpoint that items are routed to. It accepts
//! items one at a time and takes part in teardown:
//!
//! - [`Sink::close`] when the surrounding operation finished normally
//! - [`Sink::cleanup`] when it was abandoned because of an upstream failure
//!
//! Sinks are driven through `&mut self`: a sink is owned by exactly one
//! dispatcher, which is also the only party allowed to close it.

use crate::error::BoxError;
use std::error::Error;

/// The receiving end of a routing lane.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot accept items of type `{T}`",
    label = "missing `Sink<{T}>` implementation",
    note = "Sinks must implement the `accept` method for the item type `{T}`."
)]
pub trait Sink<T> {
    /// Consumes one item.
    fn accept(&mut self, item: T) -> Result<(), BoxError>;

    /// Consumes every item in order, stopping at the first failure.
    fn accept_all<I>(&mut self, items: I) -> Result<(), BoxError>
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.accept(item)?;
        }
        Ok(())
    }

    /// Discards partial work after the operation failed with `cause`.
    fn cleanup(&mut self, cause: &(dyn Error + 'static)) -> Result<(), BoxError> {
        let _ = cause;
        Ok(())
    }

    /// Flushes and releases resources.
    fn close(&mut self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for Box<S> {
    fn accept(&mut self, item: T) -> Result<(), BoxError> {
        (**self).accept(item)
    }

    fn cleanup(&mut self, cause: &(dyn Error + 'static)) -> Result<(), BoxError> {
        (**self).cleanup(cause)
    }

    fn close(&mut self) -> Result<(), BoxError> {
        (**self).close()
    }
}

impl<T, S: Sink<T> + ?Sized> Sink<T> for &mut S {
    fn accept(&mut self, item: T) -> Result<(), BoxError> {
        (**self).accept(item)
    }

    fn cleanup(&mut self, cause: &(dyn Error + 'static)) -> Result<(), BoxError> {
        (**self).cleanup(cause)
    }

    fn close(&mut self) -> Result<(), BoxError> {
        (**self).close()
    }
}

/// A type-erased sink.
pub type BoxSink<'a, T> = Box<dyn Sink<T> + Send + 'a>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect(Vec<u32>);

    impl Sink<u32> for Collect {
        fn accept(&mut self, item: u32) -> Result<(), BoxError> {
            if item == 0 {
                return Err("zero".into());
            }
            self.0.push(item);
            Ok(())
        }
    }

    #[test]
    fn test_accept_all_stops_at_first_failure() {
        let mut sink = Collect(Vec::new());
        let err = sink.accept_all([1, 2, 0, 3]).unwrap_err();
        assert_eq!(err.to_string(), "zero");
        assert_eq!(sink.0, vec![1, 2]);
    }

    #[test]
    fn test_boxed_sink_delegates() {
        let mut sink: BoxSink<'_, u32> = Box::new(Collect(Vec::new()));
        sink.accept(7).unwrap();
        sink.close().unwrap();
        let cause = std::io::Error::other("upstream");
        sink.cleanup(&cause).unwrap();
    }
}
