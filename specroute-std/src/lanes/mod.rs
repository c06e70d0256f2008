//! Ordered multi-lane routing.
//!
//! A [`MultiSink`] holds an ordered list of (matcher, sink) lanes. Each item
//! goes to the first lane whose matcher accepts it, or nowhere. The lane
//! list is a `Vec`: registration order is the priority order.

pub mod multi;
pub mod teardown;

pub use multi::{Lane, MultiSink, MultiSinkBuilder, RouteResult};
pub use teardown::{Phase, TeardownFailure, TeardownReport};
