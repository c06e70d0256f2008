//! # specroute - Spec Strings and Ordered Sink Lanes
//!
//! `specroute` parses small function-call style configuration strings and
//! routes items through an ordered set of sink lanes.
//!
//! ## Quick Start
//!
//! ```rust
//! use specroute::prelude::*;
//! use specroute::testing::RecordingSink;
//!
//! // 1. Parse a spec; the root is always a call.
//! let tree = parse("split(jar, pom)").unwrap();
//! assert_eq!(tree.root().name(), "split");
//!
//! // 2. Interpret it: one lane per literal argument, in order.
//! let mut builder = MultiSink::builder();
//! let mut recorders = Vec::new();
//! for ext in tree.root().literals() {
//!     let ext = ext.to_string();
//!     let recorder = RecordingSink::new();
//!     recorders.push(recorder.clone());
//!     builder = builder.lane(move |file: &&str| file.ends_with(ext.as_str()), recorder);
//! }
//! let mut sink = builder.build();
//!
//! // 3. Route items; the first matching lane wins, unmatched items are dropped.
//! sink.accept_all(["a.jar", "a.pom", "a.txt"]).unwrap();
//! assert_eq!(recorders[0].items(), vec!["a.jar"]);
//! assert_eq!(recorders[1].items(), vec!["a.pom"]);
//!
//! // 4. Tear down; failures are reported, never thrown.
//! assert!(sink.close_all().is_clean());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;

pub use error::Error;

pub use specroute_core::{
    // Matchers
    And,
    Any,
    // Errors
    BoxError,
    BoxMatcher,
    // Sinks
    BoxSink,
    // Tree
    Children,
    // Traversal
    Dump,
    Literal,
    Matcher,
    Node,
    NodeId,
    Not,
    Nothing,
    Op,
    Or,
    // Parsing
    Parser,
    ParserConfig,
    Render,
    Sink,
    SpecError,
    SpecTree,
    SyntaxErrorKind,
    Visit,
    Visitor,
    Whitespace,
    any,
    none,
    parse,
};

// Routing
pub use specroute_std::{
    DispatchError,
    lanes::{Lane, MultiSink, MultiSinkBuilder, Phase, RouteResult, TeardownFailure, TeardownReport},
};

/// Standard sink implementations.
pub mod sinks {
    #![allow(clippy::wildcard_imports)]
    pub use specroute_std::sinks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use specroute_std::testing::*;
}

/// Prelude module - common imports for specroute.
///
/// # Usage
///
/// ```rust,ignore
/// use specroute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        Error,
        // Routing
        Matcher,
        MultiSink,
        Node,
        Op,
        Sink,
        SpecTree,
        Visit,
        Visitor,
        any,
        // Parsing
        parse,
    };
}
