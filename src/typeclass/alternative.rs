//! Alternative type class - choice between computations.
//!
//! [`Alternative`] adds a "failure" element (`zero`) and a binary
//! choice (`alt`) to an [`Applicative`]: `alt` keeps the first
//! successful operand. It is the monoid structure *of the container
//! shape itself*, as opposed to [`Semigroup`](super::Semigroup), which
//! combines the contained values.
//!
//! # Laws
//!
//! ```text
//! left identity:  zero().alt(x) == x
//! right identity: x.alt(zero()) == x
//! associativity:  a.alt(b).alt(c) == a.alt(b.alt(c))
//! annihilation:   zero().ap(f) == zero()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use currycomb::typeclass::Alternative;
//!
//! let fallback = None.alt(Some(2)).alt(Some(3));
//! assert_eq!(fallback, Some(2));
//!
//! assert_eq!(<Option<()>>::guard(1 < 2), Some(()));
//! assert_eq!(<Option<()>>::guard(2 < 1), None);
//! ```

use super::applicative::Applicative;

/// An [`Applicative`] with a failure element and a choice operation.
pub trait Alternative: Applicative {
    /// The failing computation, at any element type.
    #[must_use]
    fn zero<B>() -> Self::WithType<B>;

    /// Returns the first non-failing operand.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with `()` when the condition holds, fails otherwise.
    /// The standard building block for filtering inside a chain.
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::zero()
        }
    }

    /// Converts failure into success-with-`None`, making the result
    /// total.
    #[must_use]
    fn optional(self) -> Self::WithType<Option<Self::Inner>>;

    /// Returns the first non-failing computation from an iterator, or
    /// the failure element when all fail.
    #[must_use]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>;
}

impl<A> Alternative for Option<A> {
    #[inline]
    fn zero<B>() -> Option<B> {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Option<Option<A>> {
        Some(self)
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().find(Option::is_some).flatten()
    }
}

/// Alternative-style operations for `Vec`, where failure is the empty
/// vector and choice is concatenation (every alternative is kept).
pub trait AlternativeVec: Sized {
    /// The element type.
    type Elem;

    /// The empty vector.
    #[must_use]
    fn zero<B>() -> Vec<B> {
        Vec::new()
    }

    /// Concatenates the alternatives.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Succeeds with a single `()` when the condition holds.
    #[must_use]
    fn guard(condition: bool) -> Vec<()> {
        if condition { vec![()] } else { Vec::new() }
    }

    /// Concatenates every alternative.
    #[must_use]
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>;
}

impl<T> AlternativeVec for Vec<T> {
    type Elem = T;

    #[inline]
    fn alt(mut self, mut alternative: Self) -> Self {
        self.append(&mut alternative);
        self
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives.into_iter().flatten().collect()
    }
}
