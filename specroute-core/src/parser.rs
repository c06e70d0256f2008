//! # Spec Parser
//!
//! Turns a function-call style spec string into a [`SpecTree`].
//!
//! ```text
//! spec    := op
//! op      := name "(" arglist? ")"
//! arglist := arg ("," arg)*
//! arg     := literal | op
//! name    := 1+ token chars
//! literal := 1+ token chars
//! ```
//!
//! Token chars are alphabetic characters plus `*`, `:`, `.` and `-`.
//! Whitespace between tokens is ignored.
//!
//! The parser is a single pass over the input. Open calls live on an
//! explicit stack rather than the native call stack, so nesting depth is
//! limited only by memory (or by [`ParserConfig::max_depth`]).
//!
//! # Example
//!
//! ```rust
//! use specroute_core::parse;
//!
//! let tree = parse("any(g:a, not(x))").unwrap();
//! assert_eq!(tree.root().name(), "any");
//! assert_eq!(tree.to_string(), "any(g:a,not(x))");
//! ```

use crate::{
    error::{SpecError, SyntaxErrorKind},
    node::{NodeId, SpecTree, TreeBuilder},
};
use std::str::FromStr;

/// Parses `input` with the default [`ParserConfig`].
pub fn parse(input: &str) -> Result<SpecTree, SpecError> {
    Parser::default().parse(input)
}

/// How whitespace inside a token is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// Whitespace ends a token. `a b(c)` is a syntax error.
    #[default]
    Strict,
    /// Whitespace is skipped and the token continues. `a b(c)` is `ab(c)`.
    Concatenate,
}

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Whitespace handling inside tokens.
    pub whitespace: Whitespace,
    /// Maximum call nesting depth. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl ParserConfig {
    /// Default settings: strict whitespace, unlimited depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whitespace handling.
    pub fn with_whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    /// Limit call nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// A reusable spec parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the given settings.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The settings this parser uses.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `input` into a tree rooted at a call.
    pub fn parse(&self, input: &str) -> Result<SpecTree, SpecError> {
        let mut scan = Scan::new(self.config);
        for (offset, ch) in input.char_indices() {
            scan.step(offset, ch)?;
        }
        scan.finish(input.len())
    }
}

impl FromStr for SpecTree {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn is_token_char(ch: char) -> bool {
    ch.is_alphabetic() || matches!(ch, '*' | ':' | '.' | '-')
}

/// What the scanner saw last, ignoring whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Open,
    Comma,
    /// A closed call; only `,` or `)` may follow.
    Closed,
}

struct Scan {
    config: ParserConfig,
    tree: TreeBuilder,
    path: Vec<NodeId>,
    buffer: String,
    last: Last,
    /// Whitespace was seen after the buffered token started.
    gap: bool,
    done: bool,
}

impl Scan {
    fn new(config: ParserConfig) -> Self {
        Self {
            config,
            tree: TreeBuilder::new(),
            path: Vec::new(),
            buffer: String::new(),
            last: Last::Start,
            gap: false,
            done: false,
        }
    }

    fn step(&mut self, offset: usize, ch: char) -> Result<(), SpecError> {
        if ch.is_whitespace() {
            if !self.buffer.is_empty() {
                self.gap = true;
            }
            return Ok(());
        }
        if self.done {
            let kind = if ch == ')' {
                SyntaxErrorKind::UnbalancedClose
            } else {
                SyntaxErrorKind::TrailingInput
            };
            return Err(SpecError::syntax(offset, kind));
        }
        match ch {
            '(' => self.open(offset),
            ')' => self.close(offset),
            ',' => self.comma(offset),
            ch if is_token_char(ch) => self.token(offset, ch),
            ch => Err(SpecError::syntax(
                offset,
                SyntaxErrorKind::InvalidCharacter(ch),
            )),
        }
    }

    fn token(&mut self, offset: usize, ch: char) -> Result<(), SpecError> {
        if self.last == Last::Closed && self.buffer.is_empty() {
            return Err(SpecError::syntax(offset, SyntaxErrorKind::MissingComma));
        }
        if self.gap && self.config.whitespace == Whitespace::Strict {
            return Err(SpecError::syntax(offset, SyntaxErrorKind::SplitToken));
        }
        self.buffer.push(ch);
        Ok(())
    }

    fn open(&mut self, offset: usize) -> Result<(), SpecError> {
        if self.buffer.is_empty() {
            return Err(SpecError::syntax(offset, SyntaxErrorKind::EmptyName));
        }
        if let Some(limit) = self.config.max_depth {
            if self.path.len() >= limit {
                return Err(SpecError::syntax(offset, SyntaxErrorKind::TooDeep { limit }));
            }
        }
        let name = self.take_buffer();
        let op = self.tree.push_op(name);
        if let Some(&parent) = self.path.last() {
            self.tree.attach(parent, op)?;
        }
        self.path.push(op);
        self.last = Last::Open;
        Ok(())
    }

    fn close(&mut self, offset: usize) -> Result<(), SpecError> {
        let Some(&top) = self.path.last() else {
            return Err(SpecError::syntax(offset, SyntaxErrorKind::UnbalancedClose));
        };
        if !self.buffer.is_empty() {
            self.commit_literal(top)?;
        } else if self.last == Last::Comma {
            return Err(SpecError::syntax(offset, SyntaxErrorKind::MisplacedComma));
        }
        self.path.pop();
        self.last = Last::Closed;
        self.done = self.path.is_empty();
        Ok(())
    }

    fn comma(&mut self, offset: usize) -> Result<(), SpecError> {
        let misplaced = SpecError::syntax(offset, SyntaxErrorKind::MisplacedComma);
        let Some(&top) = self.path.last() else {
            return Err(misplaced);
        };
        if !self.buffer.is_empty() {
            self.commit_literal(top)?;
        } else if self.last != Last::Closed {
            // Nothing to separate: `a(,b)` or `a(b,,c)`.
            return Err(misplaced);
        }
        self.last = Last::Comma;
        Ok(())
    }

    fn commit_literal(&mut self, parent: NodeId) -> Result<(), SpecError> {
        let value = self.take_buffer();
        let literal = self.tree.push_literal(value);
        self.tree.attach(parent, literal)
    }

    fn take_buffer(&mut self) -> String {
        self.gap = false;
        std::mem::take(&mut self.buffer)
    }

    fn finish(self, len: usize) -> Result<SpecTree, SpecError> {
        if !self.tree.has_root() {
            let kind = if self.buffer.is_empty() {
                SyntaxErrorKind::Empty
            } else {
                SyntaxErrorKind::BareLiteral
            };
            return Err(SpecError::syntax(len, kind));
        }
        if !self.path.is_empty() {
            return Err(SpecError::syntax(len, SyntaxErrorKind::Unterminated));
        }
        self.tree.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kind(input: &str) -> SyntaxErrorKind {
        match parse(input) {
            Err(SpecError::Syntax { kind, .. }) => kind,
            other => panic!("expected syntax error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_call() {
        let tree = parse("a()").unwrap();
        assert_eq!(tree.root().name(), "a");
        assert!(tree.root().is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_nested_call() {
        let tree = parse("a(b,c(d))").unwrap();
        let root = tree.root();
        assert_eq!(root.name(), "a");
        assert_eq!(root.len(), 2);

        let b = root.child(0).unwrap();
        assert!(b.is_literal());
        assert_eq!(b.value(), "b");

        let c = root.child(1).unwrap().as_op().unwrap();
        assert_eq!(c.name(), "c");
        assert_eq!(c.literals().collect::<Vec<_>>(), vec!["d"]);
    }

    #[test]
    fn test_token_alphabet() {
        let tree = parse("gav(org.example:*:jar, -x)").unwrap();
        assert_eq!(
            tree.root().literals().collect::<Vec<_>>(),
            vec!["org.example:*:jar", "-x"]
        );
        let tree = parse("größe(ähnlich)").unwrap();
        assert_eq!(tree.root().name(), "größe");
    }

    #[test]
    fn test_whitespace_between_tokens_is_ignored() {
        let tree = parse("  a ( b ,\n c ( d ) )\t").unwrap();
        assert_eq!(tree.to_string(), "a(b,c(d))");
    }

    #[test]
    fn test_empty_and_bare_literal() {
        assert_eq!(kind(""), SyntaxErrorKind::Empty);
        assert_eq!(kind("   "), SyntaxErrorKind::Empty);
        assert_eq!(kind("a"), SyntaxErrorKind::BareLiteral);
    }

    #[test]
    fn test_misplaced_commas() {
        assert_eq!(kind("a(,b)"), SyntaxErrorKind::MisplacedComma);
        assert_eq!(kind("a(b,)"), SyntaxErrorKind::MisplacedComma);
        assert_eq!(kind("a(b,,c)"), SyntaxErrorKind::MisplacedComma);
        assert_eq!(kind("a(b),"), SyntaxErrorKind::TrailingInput);
        assert_eq!(kind(",a()"), SyntaxErrorKind::MisplacedComma);
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(kind("a(b))"), SyntaxErrorKind::UnbalancedClose);
        assert_eq!(kind(")"), SyntaxErrorKind::UnbalancedClose);
        assert_eq!(kind("a(b("), SyntaxErrorKind::Unterminated);
        assert_eq!(kind("a("), SyntaxErrorKind::Unterminated);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(kind("a(b1)"), SyntaxErrorKind::InvalidCharacter('1'));
        assert_eq!(kind("a(\"b\")"), SyntaxErrorKind::InvalidCharacter('"'));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(kind("(b)"), SyntaxErrorKind::EmptyName);
        assert_eq!(kind("a(b(),())"), SyntaxErrorKind::EmptyName);
        assert_eq!(kind("a(b()c)"), SyntaxErrorKind::MissingComma);
        assert_eq!(kind("a()b()"), SyntaxErrorKind::TrailingInput);
        assert_eq!(kind("a()b"), SyntaxErrorKind::TrailingInput);
    }

    #[test]
    fn test_error_offsets() {
        assert_eq!(
            parse("a(b,,c)"),
            Err(SpecError::Syntax {
                offset: 4,
                kind: SyntaxErrorKind::MisplacedComma
            })
        );
        assert_eq!(
            parse("a(b("),
            Err(SpecError::Syntax {
                offset: 4,
                kind: SyntaxErrorKind::Unterminated
            })
        );
    }

    #[test]
    fn test_split_token_strict() {
        assert_eq!(kind("a b(c)"), SyntaxErrorKind::SplitToken);
        assert_eq!(kind("a(b c)"), SyntaxErrorKind::SplitToken);
    }

    #[test]
    fn test_split_token_concatenate() {
        let parser = Parser::new(ParserConfig::new().with_whitespace(Whitespace::Concatenate));
        let tree = parser.parse("a b(c d, e)").unwrap();
        assert_eq!(tree.to_string(), "ab(cd,e)");
    }

    #[test]
    fn test_max_depth() {
        let parser = Parser::new(ParserConfig::new().with_max_depth(2));
        assert!(parser.parse("a(b(c))").is_ok());
        assert_eq!(
            parser.parse("a(b(c(d)))").unwrap_err().syntax_kind(),
            Some(&SyntaxErrorKind::TooDeep { limit: 2 })
        );
    }

    #[test]
    fn test_from_str() {
        let tree: SpecTree = "x(y)".parse().unwrap();
        assert_eq!(tree.root().name(), "x");
        assert!("x".parse::<SpecTree>().is_err());
    }
}
