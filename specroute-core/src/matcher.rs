//! Item predicates used to select a routing lane.

/// Decides whether an item belongs to a lane.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot match items of type `{T}`",
    label = "missing `Matcher<{T}>` implementation",
    note = "Closures of the form `Fn(&{T}) -> bool` implement `Matcher<{T}>`."
)]
pub trait Matcher<T: ?Sized> {
    /// Returns `true` if `item` is selected.
    fn matches(&self, item: &T) -> bool;

    /// Matches when both matchers match. `other` is not consulted if `self`
    /// rejects the item.
    fn and<M>(self, other: M) -> And<Self, M>
    where
        Self: Sized,
        M: Matcher<T>,
    {
        And(self, other)
    }

    /// Matches when either matcher matches. `other` is not consulted if
    /// `self` accepts the item.
    fn or<M>(self, other: M) -> Or<Self, M>
    where
        Self: Sized,
        M: Matcher<T>,
    {
        Or(self, other)
    }

    /// Inverts the matcher.
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not(self)
    }

    /// Boxes the matcher.
    fn boxed<'a>(self) -> BoxMatcher<'a, T>
    where
        Self: Sized + Send + 'a,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, F> Matcher<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// A type-erased matcher.
pub type BoxMatcher<'a, T> = Box<dyn Matcher<T> + Send + 'a>;

/// Conjunction of two matchers. See [`Matcher::and`].
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(A, B);

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for And<A, B> {
    fn matches(&self, item: &T) -> bool {
        self.0.matches(item) && self.1.matches(item)
    }
}

/// Disjunction of two matchers. See [`Matcher::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(A, B);

impl<T: ?Sized, A: Matcher<T>, B: Matcher<T>> Matcher<T> for Or<A, B> {
    fn matches(&self, item: &T) -> bool {
        self.0.matches(item) || self.1.matches(item)
    }
}

/// Negation of a matcher. See [`Matcher::negate`].
#[derive(Debug, Clone, Copy)]
pub struct Not<A>(A);

impl<T: ?Sized, A: Matcher<T>> Matcher<T> for Not<A> {
    fn matches(&self, item: &T) -> bool {
        !self.0.matches(item)
    }
}

/// Matches every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

impl<T: ?Sized> Matcher<T> for Any {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Matches no item.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nothing;

impl<T: ?Sized> Matcher<T> for Nothing {
    fn matches(&self, _item: &T) -> bool {
        false
    }
}

/// A matcher that selects every item, typically used for a catch-all lane.
pub const fn any() -> Any {
    Any
}

/// A matcher that selects nothing.
pub const fn none() -> Nothing {
    Nothing
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn even(n: &u32) -> bool {
        n % 2 == 0
    }

    #[test]
    fn test_closure_matcher() {
        let big = |n: &u32| *n > 10;
        assert!(big.matches(&11));
        assert!(!big.matches(&10));
    }

    #[test]
    fn test_combinators() {
        let even_and_big = even.and(|n: &u32| *n > 10);
        assert!(even_and_big.matches(&12));
        assert!(!even_and_big.matches(&11));
        assert!(!even_and_big.matches(&4));

        let odd = even.negate();
        assert!(odd.matches(&3));

        let small_or_even = (|n: &u32| *n < 3).or(even);
        assert!(small_or_even.matches(&1));
        assert!(small_or_even.matches(&8));
        assert!(!small_or_even.matches(&9));
    }

    #[test]
    fn test_short_circuit() {
        let calls = Cell::new(0);
        let counted = |_: &u32| {
            calls.set(calls.get() + 1);
            true
        };
        assert!(!none().and(&counted).matches(&1));
        assert!(any().or(&counted).matches(&1));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_boxed() {
        let matchers: Vec<BoxMatcher<'_, u32>> = vec![any().boxed(), even.boxed()];
        assert_eq!(
            matchers.iter().map(|m| m.matches(&3)).collect::<Vec<_>>(),
            vec![true, false]
        );
    }
}
