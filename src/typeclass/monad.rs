//! Monad type class - sequencing dependent computations.
//!
//! [`Monad`] extends [`Applicative`] with `chain`, which feeds the
//! contained value into a function that itself returns a new container,
//! flattening as it goes. Each step can therefore depend on the result
//! of the previous one.
//!
//! # Laws
//!
//! ```text
//! left identity:  pure(a).chain(f) == f(a)
//! right identity: m.chain(pure) == m
//! associativity:  m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use currycomb::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42").chain(parse_positive).chain(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// An [`Applicative`] that can sequence dependent computations.
pub trait Monad: Applicative {
    /// Feeds the contained value into `function` and flattens the
    /// resulting nested container.
    ///
    /// Known elsewhere as `bind`, `flatMap`, or `>>=`.
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`chain`](Monad::chain), matching the std naming of
    /// `Option::and_then` / `Result::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.chain(function)
    }

    /// Sequences two computations, discarding the first result. A
    /// failing first computation still short-circuits.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.chain(move |_| next)
    }

    /// Flattens one level of nesting.
    #[inline]
    fn flatten(self) -> Self::WithType<<Self::Inner as super::higher::TypeConstructor>::Inner>
    where
        Self: Sized,
        Self::Inner: super::higher::TypeConstructor
            + Into<Self::WithType<<Self::Inner as super::higher::TypeConstructor>::Inner>>,
    {
        self.chain(Into::into)
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.and_then(function)
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Monad for Box<T> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> Box<B>,
    {
        function(*self)
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

// =============================================================================
// Vec<T> - element-wise bind, separate trait for the FnMut requirement
// =============================================================================

/// Monad-style operations for `Vec`.
///
/// Binding maps each element to a vector and concatenates the results,
/// so the function must be callable per element.
pub trait MonadVec: Sized {
    /// The element type.
    type Elem;

    /// Maps each element to a vector and concatenates the results.
    fn chain_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::Elem) -> Vec<B>;

    /// Flattens a vector of vectors by one level.
    fn join(self) -> Vec<<Self::Elem as IntoIterator>::Item>
    where
        Self::Elem: IntoIterator;
}

impl<A> MonadVec for Vec<A> {
    type Elem = A;

    #[inline]
    fn chain_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    #[inline]
    fn join(self) -> Vec<A::Item>
    where
        A: IntoIterator,
    {
        self.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_chain_sequences() {
        let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
        assert_eq!(Some(12).chain(halve), Some(6));
        assert_eq!(Some(7).chain(halve), None);
        assert_eq!(None.chain(halve), None);
    }

    #[rstest]
    fn option_then_discards_first_result() {
        assert_eq!(Some(1).then(Some("next")), Some("next"));
        assert_eq!(None::<i32>.then(Some("next")), None);
    }

    #[rstest]
    fn option_flatten() {
        let nested: Option<Option<i32>> = Some(Some(5));
        assert_eq!(nested.flatten(), Some(5));
        let absent: Option<Option<i32>> = Some(None);
        assert_eq!(absent.flatten(), None);
    }

    #[rstest]
    fn result_chain_short_circuits_on_err() {
        let checked_div = |n: i32| {
            if n == 0 {
                Err("division by zero")
            } else {
                Ok(100 / n)
            }
        };
        assert_eq!(Ok(4).chain(checked_div), Ok(25));
        assert_eq!(Ok(0).chain(checked_div), Err("division by zero"));
        assert_eq!(Err("upstream").chain(checked_div), Err("upstream"));
    }

    #[rstest]
    fn vec_chain_mut_concatenates() {
        let duplicated = vec![1, 2, 3].chain_mut(|n| vec![n, n]);
        assert_eq!(duplicated, vec![1, 1, 2, 2, 3, 3]);
    }

    #[rstest]
    fn vec_join_flattens() {
        assert_eq!(vec![vec![1, 2], vec![3]].join(), vec![1, 2, 3]);
    }

    // Law checks

    #[rstest]
    fn option_left_identity_law() {
        let function = |n: i32| if n > 0 { Some(n * 2) } else { None };
        assert_eq!(<Option<i32>>::pure(5).chain(function), function(5));
    }

    #[rstest]
    fn option_right_identity_law() {
        let value = Some(5);
        assert_eq!(value.chain(<Option<i32>>::pure), value);
    }

    #[rstest]
    fn option_associativity_law() {
        let f = |n: i32| Some(n + 1);
        let g = |n: i32| Some(n * 2);
        let left = Some(5).chain(f).chain(g);
        let right = Some(5).chain(|x| f(x).chain(g));
        assert_eq!(left, right);
    }

    #[rstest]
    fn identity_chain_applies_directly() {
        let result = Identity::new(5).chain(|n| Identity::new(n * 2));
        assert_eq!(result, Identity::new(10));
    }
}
