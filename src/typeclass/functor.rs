//! Functor type class - mapping over container values.
//!
//! Two traits split the mapping protocol by how often the supplied
//! function may be called:
//!
//! - [`Functor`] takes a `FnOnce` and suits containers holding at most
//!   one value (`Option`, `Result`, `Box`, ...). The closure may move
//!   captured values.
//! - [`FunctorMut`] takes a `FnMut` and is implemented by every
//!   mappable container, including multi-element ones (`Vec`,
//!   persistent collections). This is the trait the polymorphic
//!   [`map`](crate::poly::map) function dispatches through.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use currycomb::typeclass::{Functor, FunctorMut};
//!
//! let present: Option<i32> = Some(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let doubled: Vec<i32> = vec![1, 2, 3].fmap_mut(|n| n * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// Mapping for containers holding at most one value.
///
/// The function is consumed, so it may move out of its environment.
pub trait Functor: TypeConstructor {
    /// Applies a function to the contained value, preserving the
    /// container's structure.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the contained value,
    /// leaving the original container usable.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the contained value with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the contained value, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// Mapping for any container, including multi-element ones.
///
/// The function may be called once per element, so it must be `FnMut`.
/// Every [`Functor`] can implement this by delegation; `Vec` and the
/// persistent collections implement only this trait, since a `FnOnce`
/// cannot be applied to several elements.
pub trait FunctorMut: TypeConstructor {
    /// Applies a function to each contained value.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to references of each contained value.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> FunctorMut for Option<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.fmap_ref(function)
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        match self {
            Ok(value) => Ok(function(value)),
            Err(error) => Err(error.clone()),
        }
    }
}

impl<T, E: Clone> FunctorMut for Result<T, E> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnMut(&T) -> B,
    {
        self.fmap_ref(function)
    }
}

// =============================================================================
// Vec<T> - multi-element, so only FunctorMut
// =============================================================================

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(T) -> B,
    {
        Box::new(function(*self))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Box<B>
    where
        F: FnOnce(&T) -> B,
    {
        Box::new(function(self.as_ref()))
    }
}

impl<T> FunctorMut for Box<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Box<B>
    where
        F: FnMut(T) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Box<B>
    where
        F: FnMut(&T) -> B,
    {
        self.fmap_ref(function)
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity(function(&self.0))
    }
}

impl<A> FunctorMut for Identity<A> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        self.fmap(function)
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnMut(&A) -> B,
    {
        self.fmap_ref(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_some() {
        let present: Option<i32> = Some(5);
        assert_eq!(present.fmap(|n| n.to_string()), Some("5".to_string()));
    }

    #[rstest]
    fn option_fmap_none_is_inert() {
        let absent: Option<i32> = None;
        assert_eq!(absent.fmap(|n| n.to_string()), None);
    }

    #[rstest]
    fn option_fmap_can_move_captures() {
        let owned = String::from("suffix");
        let mapped = Some(String::from("prefix-")).fmap(move |mut s| {
            s.push_str(&owned);
            s
        });
        assert_eq!(mapped, Some("prefix-suffix".to_string()));
    }

    #[rstest]
    fn option_fmap_ref_keeps_original() {
        let present = Some(String::from("hello"));
        assert_eq!(present.fmap_ref(|s| s.len()), Some(5));
        assert_eq!(present, Some("hello".to_string()));
    }

    #[rstest]
    fn option_replace_and_void() {
        assert_eq!(Some(5).replace("new"), Some("new"));
        assert_eq!(Some(5).void(), Some(()));
        assert_eq!(None::<i32>.void(), None);
    }

    #[rstest]
    fn result_fmap_is_right_biased() {
        let ok: Result<i32, &str> = Ok(5);
        let err: Result<i32, &str> = Err("error");
        assert_eq!(ok.fmap(|n| n * 2), Ok(10));
        assert_eq!(err.fmap(|n| n * 2), Err("error"));
    }

    #[rstest]
    fn vec_fmap_mut_maps_every_element() {
        assert_eq!(vec![1, 2, 3].fmap_mut(|n| n + 1), vec![2, 3, 4]);
        assert_eq!(Vec::<i32>::new().fmap_mut(|n| n + 1), Vec::<i32>::new());
    }

    #[rstest]
    fn vec_fmap_ref_mut_keeps_original() {
        let strings = vec!["ab".to_string(), "cde".to_string()];
        assert_eq!(strings.fmap_ref_mut(|s| s.len()), vec![2, 3]);
        assert_eq!(strings.len(), 2);
    }

    #[rstest]
    fn box_and_identity_fmap() {
        assert_eq!(*Box::new(21).fmap(|n| n * 2), 42);
        assert_eq!(Identity::new(21).fmap(|n| n * 2), Identity::new(42));
    }

    // Law checks

    #[rstest]
    fn option_identity_law() {
        let present: Option<i32> = Some(42);
        assert_eq!(present.fmap(|x| x), present);
        assert_eq!(None::<i32>.fmap(|x| x), None);
    }

    #[rstest]
    fn option_composition_law() {
        let increment = |n: i32| n + 1;
        let double = |n: i32| n * 2;
        let left = Some(5).fmap(increment).fmap(double);
        let right = Some(5).fmap(move |x| double(increment(x)));
        assert_eq!(left, right);
        assert_eq!(left, Some(12));
    }

    #[rstest]
    fn vec_composition_law_with_fmap_mut() {
        let increment = |n: i32| n + 1;
        let double = |n: i32| n * 2;
        let left = vec![1, 2, 3].fmap_mut(increment).fmap_mut(double);
        let right = vec![1, 2, 3].fmap_mut(|x| double(increment(x)));
        assert_eq!(left, right);
    }
}
