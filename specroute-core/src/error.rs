//! Error types for specroute.
//!
//! - [`SpecError`] - Failure to turn a spec string into a tree
//! - [`SyntaxErrorKind`] - What exactly was wrong with the input
//! - [`BoxError`] - Opaque error raised by sinks

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced while parsing a spec string.
///
/// Every malformed input maps to [`SpecError::Syntax`]. The caller should
/// reject the whole configuration; there is no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The input does not follow the spec grammar.
    #[error("syntax error at offset {offset}: {kind}")]
    Syntax {
        /// Byte offset of the offending character, or the input length when
        /// the input ended too early.
        offset: usize,
        /// The kind of syntax error.
        kind: SyntaxErrorKind,
    },

    /// The tree builder tried to do something the node model forbids.
    ///
    /// Malformed input never produces this; it indicates a parser defect.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}

impl SpecError {
    pub(crate) fn syntax(offset: usize, kind: SyntaxErrorKind) -> Self {
        SpecError::Syntax { offset, kind }
    }

    /// Returns the syntax error kind, if this is a syntax error.
    pub fn syntax_kind(&self) -> Option<&SyntaxErrorKind> {
        match self {
            SpecError::Syntax { kind, .. } => Some(kind),
            SpecError::InvariantViolation(_) => None,
        }
    }
}

/// The individual ways a spec string can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// The input was empty or contained only whitespace.
    #[error("empty spec")]
    Empty,

    /// A closing parenthesis without a matching open call.
    #[error("misplaced closing parenthesis")]
    UnbalancedClose,

    /// A leading, duplicate, trailing or top-level comma.
    #[error("misplaced comma")]
    MisplacedComma,

    /// A character outside the token alphabet and the delimiters.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    /// An opening parenthesis with no name in front of it.
    #[error("call without a name")]
    EmptyName,

    /// Two arguments not separated by a comma.
    #[error("missing comma between arguments")]
    MissingComma,

    /// Whitespace inside a token.
    #[error("whitespace inside a token")]
    SplitToken,

    /// Input continues after the root call was closed.
    #[error("unexpected input after the root call")]
    TrailingInput,

    /// The input ended while calls were still open.
    #[error("unterminated call")]
    Unterminated,

    /// The input is a literal, but a spec must start with a call.
    #[error("spec must be a call, found a bare literal")]
    BareLiteral,

    /// Nesting exceeded the configured limit.
    #[error("nesting deeper than {limit} levels")]
    TooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}
