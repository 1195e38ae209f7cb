//! Traversable type class - turning a structure of effects inside out.
//!
//! `traverse` applies an effectful function to every element of a
//! structure and collects the results *inside* the effect: a
//! `Vec<String>` traversed with a parser returning `Option<i32>`
//! becomes `Option<Vec<i32>>`: `Some` of all results, or `None` as
//! soon as any element fails.
//!
//! Without higher-kinded types the target effect cannot be a free
//! parameter, so the protocol is specialized to the two ubiquitous
//! effects: [`traverse_option`](Traversable::traverse_option) and
//! [`traverse_result`](Traversable::traverse_result). The target
//! type's "of"-factory is its `Some`/`Ok` constructor, resolved at
//! compile time; there is no runtime factory lookup to fail.
//!
//! # Examples
//!
//! ```rust
//! use currycomb::typeclass::Traversable;
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "2", "3"]
//!     .traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2, 3]));
//!
//! let failed: Option<Vec<i32>> = vec!["1", "x", "3"]
//!     .traverse_option(|s| s.parse().ok());
//! assert_eq!(failed, None);
//! ```

use super::foldable::Foldable;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A structure that can be traversed with an effectful function.
pub trait Traversable: Foldable {
    /// Applies a fallible function to every element; `Some` of the
    /// rebuilt structure when every application succeeds, `None`
    /// otherwise.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Option<B>;

    /// Applies a fallible function to every element; `Ok` of the
    /// rebuilt structure when every application succeeds, otherwise the
    /// first error.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns `Self<Option<A>>` into `Option<Self<A>>`.
    fn sequence_option(self) -> Option<Self::WithType<<Self::Inner as TypeConstructor>::Inner>>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Option<<Self::Inner as TypeConstructor>::Inner>>,
    {
        self.traverse_option(Into::into)
    }

    /// Turns `Self<Result<A, E>>` into `Result<Self<A>, E>`.
    fn sequence_result<E>(
        self,
    ) -> Result<Self::WithType<<Self::Inner as TypeConstructor>::Inner>, E>
    where
        Self: Sized,
        Self::Inner: TypeConstructor + Into<Result<<Self::Inner as TypeConstructor>::Inner, E>>,
    {
        self.traverse_result(Into::into)
    }

    /// Traverses for the effect alone, discarding the rebuilt
    /// structure.
    fn traverse_option_<F>(self, function: F) -> Option<()>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Option<()>,
    {
        self.traverse_option(function).map(|_| ())
    }

    /// Traverses for the effect alone, discarding the rebuilt
    /// structure.
    fn traverse_result_<E, F>(self, function: F) -> Result<(), E>
    where
        Self: Sized,
        F: FnMut(Self::Inner) -> Result<(), E>,
    {
        self.traverse_result(function).map(|_| ())
    }
}

// =============================================================================
// Vec<T> - elements are visited left to right, so the rebuilt vector
// is in order and the leftmost failure wins
// =============================================================================

impl<T> Traversable for Vec<T> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Vec<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        let mut collected = Vec::with_capacity(self.len());
        for element in self {
            collected.push(function(element)?);
        }
        Some(collected)
    }

    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        let mut collected = Vec::with_capacity(self.len());
        for element in self {
            collected.push(function(element)?);
        }
        Ok(collected)
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Traversable for Option<A> {
    #[inline]
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Some(None),
        }
    }

    #[inline]
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Ok(None),
        }
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Traversable for Box<T> {
    #[inline]
    fn traverse_option<B, F>(self, mut function: F) -> Option<Box<B>>
    where
        F: FnMut(T) -> Option<B>,
    {
        function(*self).map(Box::new)
    }

    #[inline]
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Box<B>, E>
    where
        F: FnMut(T) -> Result<B, E>,
    {
        function(*self).map(Box::new)
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Traversable for Identity<A> {
    #[inline]
    fn traverse_option<B, F>(self, mut function: F) -> Option<Identity<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        function(self.0).map(Identity)
    }

    #[inline]
    fn traverse_result<B, E, F>(self, mut function: F) -> Result<Identity<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        function(self.0).map(Identity)
    }
}
