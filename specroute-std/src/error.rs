//! Errors raised by the dispatcher itself.
//!
//! Sink failures are not wrapped: they reach the caller as the exact
//! [`BoxError`](specroute_core::BoxError) the sink returned.

use thiserror::Error;

/// Errors that originate in a [`MultiSink`](crate::lanes::MultiSink).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// The dispatcher was closed and no longer accepts items.
    #[error("dispatcher has been closed")]
    Closed,
}
