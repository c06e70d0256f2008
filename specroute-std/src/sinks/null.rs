//! Sink that discards everything.

use specroute_core::{BoxError, Sink};

/// Accepts every item and drops it.
///
/// This is the conventional `null()` sink: the default when no output is
/// wanted, and a handy catch-all lane for items that should be swallowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<T> Sink<T> for NullSink {
    fn accept(&mut self, _item: T) -> Result<(), BoxError> {
        Ok(())
    }
}
