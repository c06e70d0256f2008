//! Standard sink implementations.

pub mod func;
pub mod logging;
pub mod null;

pub use func::{FnSink, sink_fn};
pub use logging::LoggingSink;
pub use null::NullSink;
