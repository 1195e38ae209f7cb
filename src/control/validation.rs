//! Error-accumulating validation.
//!
//! [`Validation<E, A>`] looks like [`Either`](super::Either), holding
//! either `Invalid(E)` or `Valid(A)`, but combines differently: where chaining
//! an `Either` stops at the first `Left`, combining two `Invalid`
//! values merges their errors through the error type's own
//! [`Semigroup`](crate::typeclass::Semigroup). Collect field errors in
//! a `Vec` (or any other semigroup) and applicative composition reports
//! *all* of them, not just the first.
//!
//! `chain` is still available and still short-circuits; sequential
//! dependencies cannot accumulate, because later steps need the earlier
//! value to run at all. Accumulation happens in the independent
//! combinators: `map2`, `map3`, `ap`, [`and`](Validation::and), and
//! [`Semigroup::combine`].
//!
//! # Examples
//!
//! ```rust
//! use currycomb::control::Validation;
//! use currycomb::typeclass::Applicative;
//!
//! fn name(input: &str) -> Validation<Vec<String>, String> {
//!     if input.is_empty() {
//!         Validation::Invalid(vec!["name is empty".to_string()])
//!     } else {
//!         Validation::Valid(input.to_string())
//!     }
//! }
//!
//! fn age(input: i32) -> Validation<Vec<String>, i32> {
//!     if input >= 0 {
//!         Validation::Valid(input)
//!     } else {
//!         Validation::Invalid(vec!["age is negative".to_string()])
//!     }
//! }
//!
//! let both_bad = name("").map2(age(-1), |n, a| (n, a));
//! assert_eq!(
//!     both_bad,
//!     Validation::Invalid(vec![
//!         "name is empty".to_string(),
//!         "age is negative".to_string(),
//!     ])
//! );
//! ```

use std::fmt;

use super::either::Either;
use crate::typeclass::{
    Applicative, Bifunctor, Foldable, Functor, FunctorMut, Monad, Semigroup, Traversable,
    TypeConstructor,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of a validation: a value, or accumulated errors.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Validation<E, A> {
    /// Accumulated errors.
    Invalid(E),
    /// A successfully validated value.
    Valid(A),
}

/// Constructs an invalid value; interchangeable with
/// `Validation::Invalid`.
#[inline]
pub const fn invalid<E, A>(errors: E) -> Validation<E, A> {
    Validation::Invalid(errors)
}

/// Constructs a valid value; interchangeable with `Validation::Valid`.
#[inline]
pub const fn valid<E, A>(value: A) -> Validation<E, A> {
    Validation::Valid(value)
}

impl<E, A> Validation<E, A> {
    /// Whether this is a `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Whether this is an `Invalid`.
    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The validated value, if present.
    #[inline]
    pub fn valid(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// The accumulated errors, if present.
    #[inline]
    pub fn invalid(self) -> Option<E> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Valid(_) => None,
        }
    }

    /// Maps the error side, leaving a `Valid` untouched.
    #[inline]
    pub fn map_invalid<E2, F>(self, function: F) -> Validation<E2, A>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Invalid(errors) => Validation::Invalid(function(errors)),
            Self::Valid(value) => Validation::Valid(value),
        }
    }

    /// Collapses both sides into one result.
    #[inline]
    pub fn fold<T, F, G>(self, invalid_function: F, valid_function: G) -> T
    where
        F: FnOnce(E) -> T,
        G: FnOnce(A) -> T,
    {
        match self {
            Self::Invalid(errors) => invalid_function(errors),
            Self::Valid(value) => valid_function(value),
        }
    }

    /// Converts from [`Either`], mapping `Left` to `Invalid`.
    #[inline]
    pub fn from_either(either: Either<E, A>) -> Self {
        match either {
            Either::Left(errors) => Self::Invalid(errors),
            Either::Right(value) => Self::Valid(value),
        }
    }

    /// Converts into [`Either`], mapping `Invalid` to `Left`.
    #[inline]
    pub fn into_either(self) -> Either<E, A> {
        match self {
            Self::Invalid(errors) => Either::Left(errors),
            Self::Valid(value) => Either::Right(value),
        }
    }

    /// Converts from `Result`, mapping `Err` to `Invalid`.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }

    /// Converts into `Result`, mapping `Invalid` to `Err`.
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Invalid(errors) => Err(errors),
            Self::Valid(value) => Ok(value),
        }
    }
}

impl<E: Semigroup, A> Validation<E, A> {
    /// Zips two validations, accumulating errors from both sides.
    #[inline]
    pub fn and<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Self::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Self::Invalid(e1), Validation::Invalid(e2)) => Validation::Invalid(e1.combine(e2)),
            (Self::Invalid(errors), _) | (_, Validation::Invalid(errors)) => {
                Validation::Invalid(errors)
            }
        }
    }
}

impl<E, A> From<Either<E, A>> for Validation<E, A> {
    #[inline]
    fn from(either: Either<E, A>) -> Self {
        Self::from_either(either)
    }
}

impl<E: fmt::Debug, A: fmt::Debug> fmt::Debug for Validation<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => formatter.debug_tuple("Invalid").field(errors).finish(),
            Self::Valid(value) => formatter.debug_tuple("Valid").field(value).finish(),
        }
    }
}

// =============================================================================
// Protocol impls - error accumulation lives in map2/map3/ap/combine
// =============================================================================

impl<E, A> TypeConstructor for Validation<E, A> {
    type Inner = A;
    type WithType<B> = Validation<E, B>;
}

impl<E: Clone, A> Functor for Validation<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Invalid(errors) => Validation::Invalid(errors),
            Self::Valid(value) => Validation::Valid(function(value)),
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Validation<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Invalid(errors) => Validation::Invalid(errors.clone()),
            Self::Valid(value) => Validation::Valid(function(value)),
        }
    }
}

impl<E: Clone, A> FunctorMut for Validation<E, A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnMut(A) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Validation<E, B>
    where
        F: FnMut(&A) -> B,
    {
        self.fmap_ref(function)
    }
}

impl<E: Semigroup + Clone, A> Applicative for Validation<E, A> {
    #[inline]
    fn pure<B>(value: B) -> Validation<E, B> {
        Validation::Valid(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Validation<E, B>, function: F) -> Validation<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Valid(a), Validation::Valid(b)) => Validation::Valid(function(a, b)),
            (Self::Invalid(e1), Validation::Invalid(e2)) => Validation::Invalid(e1.combine(e2)),
            (Self::Invalid(errors), _) | (_, Validation::Invalid(errors)) => {
                Validation::Invalid(errors)
            }
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Validation<E, B>,
        third: Validation<E, C>,
        function: F,
    ) -> Validation<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.and(second)
            .map2(third, |(a, b), c| function(a, b, c))
    }
}

impl<E: Semigroup + Clone, A> Monad for Validation<E, A> {
    /// Sequencing cannot accumulate: a later step needs the earlier
    /// value, so an `Invalid` short-circuits exactly like `Either`.
    #[inline]
    fn chain<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Self::Invalid(errors) => Validation::Invalid(errors),
            Self::Valid(value) => function(value),
        }
    }
}

// Invalid values merge; a Valid operand yields the other side, making
// Valid the identity-like element of the combination.
impl<E: Semigroup, A> Semigroup for Validation<E, A> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Invalid(e1), Validation::Invalid(e2)) => Validation::Invalid(e1.combine(e2)),
            (Self::Invalid(errors), Validation::Valid(_)) => Validation::Invalid(errors),
            (Self::Valid(_), other) => other,
        }
    }
}

impl<E, A> Foldable for Validation<E, A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Invalid(_) => init,
            Self::Valid(value) => function(init, value),
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Invalid(_) => init,
            Self::Valid(value) => function(value, init),
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_valid())
    }
}

impl<E: Clone, A> Traversable for Validation<E, A> {
    #[inline]
    fn traverse_option<B, F>(self, mut function: F) -> Option<Validation<E, B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Self::Invalid(errors) => Some(Validation::Invalid(errors)),
            Self::Valid(value) => function(value).map(Validation::Valid),
        }
    }

    #[inline]
    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Validation<E, B>, E2>
    where
        F: FnMut(A) -> Result<B, E2>,
    {
        match self {
            Self::Invalid(errors) => Ok(Validation::Invalid(errors)),
            Self::Valid(value) => function(value).map(Validation::Valid),
        }
    }
}

impl<E, A> Bifunctor<E, A> for Validation<E, A> {
    type Target<C, D> = Validation<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Validation<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        match self {
            Self::Invalid(errors) => Validation::Invalid(first_function(errors)),
            Self::Valid(value) => Validation::Valid(second_function(value)),
        }
    }
}

// =============================================================================
// Whole-form validation over tuples
// =============================================================================

/// Combines a tuple of validations into a validation of a tuple,
/// accumulating every error.
///
/// Implemented for tuples of up to five validations sharing an error
/// semigroup.
pub trait ValidateAll<E: Semigroup> {
    /// The tuple of validated values.
    type Output;

    /// Runs the combination.
    fn validate_all(self) -> Validation<E, Self::Output>;
}

impl<E: Semigroup, A> ValidateAll<E> for (Validation<E, A>,) {
    type Output = (A,);

    fn validate_all(self) -> Validation<E, (A,)> {
        match self.0 {
            Validation::Valid(a) => Validation::Valid((a,)),
            Validation::Invalid(errors) => Validation::Invalid(errors),
        }
    }
}

impl<E: Semigroup, A, B> ValidateAll<E> for (Validation<E, A>, Validation<E, B>) {
    type Output = (A, B);

    fn validate_all(self) -> Validation<E, (A, B)> {
        self.0.and(self.1)
    }
}

impl<E: Semigroup, A, B, C> ValidateAll<E>
    for (Validation<E, A>, Validation<E, B>, Validation<E, C>)
{
    type Output = (A, B, C);

    fn validate_all(self) -> Validation<E, (A, B, C)> {
        let (a, b, c) = self;
        a.and(b).and(c).fmap_shape(|((a, b), c)| (a, b, c))
    }
}

impl<E: Semigroup, A, B, C, D> ValidateAll<E>
    for (
        Validation<E, A>,
        Validation<E, B>,
        Validation<E, C>,
        Validation<E, D>,
    )
{
    type Output = (A, B, C, D);

    fn validate_all(self) -> Validation<E, (A, B, C, D)> {
        let (a, b, c, d) = self;
        a.and(b)
            .and(c)
            .and(d)
            .fmap_shape(|(((a, b), c), d)| (a, b, c, d))
    }
}

impl<E: Semigroup, A, B, C, D, F> ValidateAll<E>
    for (
        Validation<E, A>,
        Validation<E, B>,
        Validation<E, C>,
        Validation<E, D>,
        Validation<E, F>,
    )
{
    type Output = (A, B, C, D, F);

    fn validate_all(self) -> Validation<E, (A, B, C, D, F)> {
        let (a, b, c, d, f) = self;
        a.and(b)
            .and(c)
            .and(d)
            .and(f)
            .fmap_shape(|((((a, b), c), d), f)| (a, b, c, d, f))
    }
}

impl<E, A> Validation<E, A> {
    // Reshaping map that needs no Clone bound on the error side.
    fn fmap_shape<B, F>(self, function: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Invalid(errors) => Validation::Invalid(errors),
            Self::Valid(value) => Validation::Valid(function(value)),
        }
    }
}

/// Combines a tuple of validations, accumulating every error.
///
/// # Examples
///
/// ```rust
/// use currycomb::control::{validate_all, Validation};
///
/// let combined = validate_all((
///     Validation::<Vec<&str>, i32>::Valid(1),
///     Validation::<Vec<&str>, String>::Invalid(vec!["too short"]),
///     Validation::<Vec<&str>, i32>::Invalid(vec!["not a number"]),
/// ));
/// assert_eq!(
///     combined,
///     Validation::Invalid(vec!["too short", "not a number"])
/// );
/// ```
pub fn validate_all<E, V>(validations: V) -> Validation<E, V::Output>
where
    E: Semigroup,
    V: ValidateAll<E>,
{
    validations.validate_all()
}
