//! Foldable type class - collapsing a structure to a summary value.
//!
//! [`Foldable`] abstracts over containers whose elements can be
//! combined into a single result, from either end. `fold_map` bridges
//! to [`Monoid`](super::Monoid): map every element into a monoid, then
//! combine.
//!
//! # Examples
//!
//! ```rust
//! use currycomb::typeclass::{Foldable, Sum};
//!
//! let total = vec![1, 2, 3].fold_left(0, |acc, n| acc + n);
//! assert_eq!(total, 6);
//!
//! let as_monoid: Sum<i32> = vec![1, 2, 3].fold_map(Sum::new);
//! assert_eq!(as_monoid, Sum::new(6));
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;
use super::monoid::Monoid;

/// A container whose elements can be folded into a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds from the left: `f(f(f(init, x1), x2), x3)`.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds from the right: `f(x1, f(x2, f(x3, init)))`.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// The number of elements.
    fn length(&self) -> usize;

    /// Whether the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Maps every element into a monoid and combines the results.
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        Self: Sized,
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
    {
        self.fold_left(M::empty(), |accumulated, element| {
            accumulated.combine(function(element))
        })
    }

    /// Collects the elements into a `Vec`, left to right.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut collected, element| {
            collected.push(element);
            collected
        })
    }

    /// Returns the first element satisfying the predicate.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(None, |found, element| match found {
            Some(_) => found,
            None if predicate(&element) => Some(element),
            None => None,
        })
    }

    /// Whether any element satisfies the predicate.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }

    /// Whether every element satisfies the predicate.
    fn for_all<P>(self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(true, |holds, element| holds && predicate(&element))
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Foldable for Option<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(value) => function(init, value),
            Err(_) => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Ok(value) => function(value, init),
            Err(_) => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_ok())
    }
}

// =============================================================================
// Vec<T>
// =============================================================================

impl<T> Foldable for Vec<T> {
    #[inline]
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulated, element| function(element, accumulated))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Foldable for Box<T> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        function(init, *self)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        function(*self, init)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Foldable for Identity<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.0)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        function(self.0, init)
    }

    #[inline]
    fn length(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn option_folds() {
        assert_eq!(Some(5).fold_left(10, |acc, n| acc + n), 15);
        assert_eq!(None::<i32>.fold_left(10, |acc, n| acc + n), 10);
        assert_eq!(Some(5).fold_right(10, |n, acc| n - acc), -5);
    }

    #[rstest]
    fn option_length_and_emptiness() {
        assert_eq!(Some(5).length(), 1);
        assert_eq!(None::<i32>.length(), 0);
        assert!(Foldable::is_empty(&None::<i32>));
        assert!(!Foldable::is_empty(&Some(5)));
    }

    #[rstest]
    fn vec_fold_left_accumulates_in_order() {
        let folded = vec!["a", "b", "c"]
            .fold_left(String::new(), |mut acc, s| {
                acc.push_str(s);
                acc
            });
        assert_eq!(folded, "abc");
    }

    #[rstest]
    fn vec_fold_right_accumulates_in_reverse() {
        let folded = vec!["a", "b", "c"].fold_right(String::new(), |s, acc| {
            let mut next = String::from(s);
            next.push_str(&acc);
            next
        });
        assert_eq!(folded, "abc");
    }

    #[rstest]
    fn fold_map_into_sum() {
        let total: Sum<i32> = vec![1, 2, 3].fold_map(Sum::new);
        assert_eq!(total, Sum::new(6));
        let empty: Sum<i32> = Vec::<i32>::new().fold_map(Sum::new);
        assert_eq!(empty, Sum::new(0));
    }

    #[rstest]
    fn to_list_preserves_order() {
        assert_eq!(vec![1, 2, 3].to_list(), vec![1, 2, 3]);
        assert_eq!(Some(1).to_list(), vec![1]);
        assert_eq!(None::<i32>.to_list(), Vec::<i32>::new());
    }

    #[rstest]
    fn find_returns_first_match() {
        assert_eq!(vec![1, 2, 3, 4].find(|n| n % 2 == 0), Some(2));
        assert_eq!(vec![1, 3].find(|n| n % 2 == 0), None);
    }

    #[rstest]
    fn exists_and_for_all() {
        assert!(vec![1, 2, 3].exists(|&n| n > 2));
        assert!(!vec![1, 2].exists(|&n| n > 2));
        assert!(vec![2, 4].for_all(|&n| n % 2 == 0));
        assert!(!vec![2, 3].for_all(|&n| n % 2 == 0));
        assert!(Vec::<i32>::new().for_all(|&n| n > 0));
    }

    #[rstest]
    fn result_folds_over_ok_only() {
        let ok: Result<i32, &str> = Ok(5);
        let err: Result<i32, &str> = Err("e");
        assert_eq!(ok.fold_left(1, |acc, n| acc + n), 6);
        assert_eq!(err.fold_left(1, |acc, n| acc + n), 1);
    }
}
