//! # specroute-core
//!
//! Core types for the specroute workspace: the spec mini-language and the
//! contracts that routing lanes are made of.
//!
//! This crate has minimal dependencies and is meant to be imported by tree
//! interpreters and sink implementations that don't need the dispatcher in
//! `specroute-std`.
//!
//! # Spec Language
//!
//! A spec is a function-call style expression such as
//! `any(groupId(org.example), not(scope(test)))`. Parsing it yields a
//! [`SpecTree`] whose root is always an [`Op`]:
//!
//! - [`parse`] / [`Parser`] - single-pass parser with an explicit stack
//! - [`SpecTree`], [`Node`], [`Op`], [`Literal`] - arena tree and its views
//! - [`Visitor`], [`Visit`] - depth-first traversal with early exit
//! - [`Dump`], [`Render`] - diagnostic and canonical renderings
//!
//! # Routing Contracts
//!
//! - [`Matcher`] - predicate selecting a lane for an item
//! - [`Sink`] - endpoint that accepts items and takes part in teardown
//!
//! # Error Types
//!
//! - [`SpecError`] - parse failures and tree invariant violations
//! - [`BoxError`] - opaque sink errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod matcher;
mod node;
mod parser;
mod sink;
mod visitor;

// Re-exports
pub use error::{BoxError, SpecError, SyntaxErrorKind};
pub use matcher::{And, Any, BoxMatcher, Matcher, Not, Nothing, Or, any, none};
pub use node::{Children, Literal, Node, NodeId, Op, SpecTree};
pub use parser::{Parser, ParserConfig, Whitespace, parse};
pub use sink::{BoxSink, Sink};
pub use visitor::{Dump, Render, Visit, Visitor};
