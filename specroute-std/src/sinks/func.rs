//! Closure-backed sink.

use specroute_core::{BoxError, Sink};

/// A sink that hands each item to a closure.
pub struct FnSink<F> {
    f: F,
}

impl<F> FnSink<F> {
    /// Create a new closure sink.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, F> Sink<T> for FnSink<F>
where
    F: FnMut(T) -> Result<(), BoxError>,
{
    fn accept(&mut self, item: T) -> Result<(), BoxError> {
        (self.f)(item)
    }
}

/// Shorthand for [`FnSink::new`].
pub fn sink_fn<T, F>(f: F) -> FnSink<F>
where
    F: FnMut(T) -> Result<(), BoxError>,
{
    FnSink::new(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_sink() {
        let mut total = 0;
        {
            let mut sink = sink_fn(|n: u32| {
                total += n;
                Ok(())
            });
            sink.accept_all([1, 2, 3]).unwrap();
        }
        assert_eq!(total, 6);
    }

    #[test]
    fn test_fn_sink_error_passes_through() {
        let mut sink = sink_fn(|_: u32| Err("rejected".into()));
        assert_eq!(sink.accept(1).unwrap_err().to_string(), "rejected");
    }
}
