//! A disjoint union of two values.
//!
//! [`Either<L, R>`] holds exactly one of two possibilities: `Left(L)`
//! or `Right(R)`. By convention the right side carries the "useful"
//! value and the left side an error or alternate outcome, so the
//! protocol impls (map, chain, ap) are right-biased: a `Left` passes
//! through every operation unchanged.
//!
//! Unlike `Result`, `Either` makes no judgement that the left side is
//! exceptional; [`swap`](Either::swap), [`bimap`](crate::typeclass::Bifunctor::bimap)
//! and [`fold`](Either::fold) treat both sides symmetrically.
//!
//! # Examples
//!
//! ```rust
//! use currycomb::control::Either;
//! use currycomb::typeclass::Monad;
//!
//! fn checked_div(n: i32, d: i32) -> Either<String, i32> {
//!     if d == 0 {
//!         Either::Left(format!("{n} / 0"))
//!     } else {
//!         Either::Right(n / d)
//!     }
//! }
//!
//! let result = checked_div(10, 2).chain(|n| checked_div(n, 0));
//! assert_eq!(result, Either::Left("5 / 0".to_string()));
//! ```

use std::fmt;

use crate::typeclass::{
    Alternative, Applicative, Bifunctor, Foldable, Functor, FunctorMut, Monad, Monoid, Traversable,
    TypeConstructor,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is exactly one of two possibilities.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The first possibility, inert under the right-biased protocol.
    Left(L),
    /// The second possibility, carrying the value operations act on.
    Right(R),
}

/// Constructs a left value; interchangeable with `Either::Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Constructs a right value; interchangeable with `Either::Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    /// Whether this is a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether this is a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if present.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if present.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// A reference to the left value, if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// A reference to the right value, if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Maps the left value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Maps the right value, leaving a `Left` untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both sides into one result, applying the function
    /// matching the populated side.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the sides.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the left value.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Right`.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Left`.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value or computes a fallback from the left.
    #[inline]
    pub fn right_or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => fallback(value),
            Self::Right(value) => value,
        }
    }

    /// Converts from `Result`, mapping `Err` to `Left`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }

    /// Converts into `Result`, mapping `Left` to `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L: Default, R> Either<L, R> {
    /// Returns the left value or its type's default.
    #[inline]
    pub fn left_or_default(self) -> L {
        self.left().unwrap_or_default()
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value or its type's default.
    #[inline]
    pub fn right_or_default(self) -> R {
        self.right().unwrap_or_default()
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        Self::from_result(result)
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// Protocol impls - right-biased
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> FunctorMut for Either<L, R> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnMut(R) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnMut(&R) -> B,
    {
        self.fmap_ref(function)
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) => Either::Left(error),
            (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _) => Either::Left(error),
            (_, Either::Left(error), _) | (_, _, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}

// Choice needs a failure element for the all-Left case, so the left
// side must carry a monoid.
impl<L: Monoid + Clone, R> Alternative for Either<L, R> {
    #[inline]
    fn zero<B>() -> Either<L, B> {
        Either::Left(L::empty())
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Right(value) => Self::Right(value),
            Self::Left(_) => alternative,
        }
    }

    #[inline]
    fn optional(self) -> Either<L, Option<R>> {
        match self {
            Self::Right(value) => Either::Right(Some(value)),
            Self::Left(_) => Either::Right(None),
        }
    }

    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .fold(Self::zero(), Alternative::alt)
    }
}

impl<L, R> Foldable for Either<L, R> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

impl<L: Clone, R> Traversable for Either<L, R> {
    #[inline]
    fn traverse_option<B, F>(self, mut function: F) -> Option<Either<L, B>>
    where
        F: FnMut(R) -> Option<B>,
    {
        match self {
            Self::Left(error) => Some(Either::Left(error)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }

    #[inline]
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Either<L, B>, E>
    where
        F: FnMut(R) -> Result<B, E>,
    {
        match self {
            Self::Left(error) => Ok(Either::Left(error)),
            Self::Right(value) => function(value).map(Either::Right),
        }
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(value) => Either::Left(first_function(value)),
            Self::Right(value) => Either::Right(second_function(value)),
        }
    }
}
