#![allow(dead_code)]

use specroute::{BoxMatcher, Matcher, Node, Op, any, none};

// ============================================================================
// Test Item Types
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub group: String,
    pub name: String,
    pub extension: String,
}

/// Builds an artifact from `group:name:extension`.
pub fn artifact(coords: &str) -> Artifact {
    let mut parts = coords.splitn(3, ':');
    let mut next = || parts.next().unwrap_or_default().to_string();
    Artifact {
        group: next(),
        name: next(),
        extension: next(),
    }
}

// ============================================================================
// Spec Interpretation
// ============================================================================

/// Turns a parsed selector into a matcher.
///
/// - `ext(jar, pom)`: extension is one of the literals
/// - `group(org.example)`: group equals the literal, `*` matches all
/// - `all(..)`, `either(..)`, `not(..)`: combinators over nested selectors
/// - `any()`: everything
pub fn selector(op: Op<'_>) -> BoxMatcher<'static, Artifact> {
    match op.name() {
        "any" => any().boxed(),
        "ext" => {
            let exts: Vec<String> = op.literals().map(str::to_string).collect();
            (move |a: &Artifact| exts.iter().any(|e| *e == a.extension)).boxed()
        }
        "group" => {
            let groups: Vec<String> = op.literals().map(str::to_string).collect();
            (move |a: &Artifact| groups.iter().any(|g| g == "*" || *g == a.group)).boxed()
        }
        "all" => {
            let parts = nested(op);
            (move |a: &Artifact| parts.iter().all(|m| m.matches(a))).boxed()
        }
        "either" => {
            let parts = nested(op);
            (move |a: &Artifact| parts.iter().any(|m| m.matches(a))).boxed()
        }
        "not" => {
            let parts = nested(op);
            (move |a: &Artifact| !parts.iter().any(|m| m.matches(a))).boxed()
        }
        _ => none().boxed(),
    }
}

fn nested(op: Op<'_>) -> Vec<BoxMatcher<'static, Artifact>> {
    op.children()
        .filter_map(|child| match child {
            Node::Op(inner) => Some(selector(inner)),
            Node::Literal(_) => None,
        })
        .collect()
}
