//! # specroute-std
//!
//! Standard implementations for the specroute workspace.
//!
//! This crate provides:
//! - **Multi-lane routing**: [`MultiSink`], [`MultiSinkBuilder`]
//! - **Teardown reporting**: [`TeardownReport`], [`TeardownFailure`]
//! - **Standard sinks**: Null, closure, logging
//! - **Testing utilities**: recording and failing sinks
//!
//! Log events go through `tracing` when the `tracing` feature is enabled
//! (the default).
//!
//! [`MultiSink`]: lanes::MultiSink
//! [`MultiSinkBuilder`]: lanes::MultiSinkBuilder
//! [`TeardownReport`]: lanes::TeardownReport
//! [`TeardownFailure`]: lanes::TeardownFailure

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use specroute_core;

// Modules
mod error;
pub mod lanes;
pub mod sinks;
pub mod testing;

pub use error::DispatchError;
