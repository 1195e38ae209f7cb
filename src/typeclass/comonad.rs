//! Comonad type class - extracting and context-aware extension.
//!
//! A [`Comonad`] is the dual of a monad: instead of lifting values in
//! (`pure`) and sequencing with functions *into* the container
//! (`chain`), it takes values out (`extract`) and maps with functions
//! *from* the whole container (`extend`). Only containers guaranteed to
//! hold a value can implement it.
//!
//! # Laws
//!
//! ```text
//! left identity:  w.extend(|w| w.extract()) == w
//! right identity: w.extend(f).extract() == f(w)
//! associativity:  w.extend(f).extend(g) == w.extend(|w| g(w.extend(f)))
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A [`Functor`] from which a value can always be extracted.
pub trait Comonad: Functor {
    /// Takes the contained value out.
    fn extract(self) -> Self::Inner;

    /// Maps a function over the *whole* container, re-wrapping its
    /// result. The function sees all the context the container
    /// carries, not just the element.
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self) -> B;
}

impl<A> Comonad for Identity<A> {
    #[inline]
    fn extract(self) -> A {
        self.0
    }

    #[inline]
    fn extend<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(Self) -> B,
    {
        Identity(function(self))
    }
}

impl<T> Comonad for Box<T> {
    #[inline]
    fn extract(self) -> T {
        *self
    }

    #[inline]
    fn extend<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(Self) -> B,
    {
        Box::new(function(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_extract() {
        assert_eq!(Identity::new(42).extract(), 42);
    }

    #[rstest]
    fn identity_extend_sees_whole_container() {
        let extended = Identity::new(5).extend(|w| w.extract() * 2);
        assert_eq!(extended, Identity::new(10));
    }

    #[rstest]
    fn box_extract_and_extend() {
        assert_eq!(Box::new(7).extract(), 7);
        assert_eq!(*Box::new(7).extend(|b| b.extract() + 1), 8);
    }

    #[rstest]
    fn extend_left_identity_law() {
        let wrapped = Identity::new(9);
        assert_eq!(wrapped.extend(Comonad::extract), wrapped);
    }

    #[rstest]
    fn extend_right_identity_law() {
        let double_inner = |w: Identity<i32>| w.extract() * 2;
        assert_eq!(Identity::new(4).extend(double_inner).extract(), double_inner(Identity::new(4)));
    }
}
