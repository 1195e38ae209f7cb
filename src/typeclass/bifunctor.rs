//! Bifunctor type class - mapping over both sides of a two-slot type.
//!
//! Where [`Functor`](super::Functor) fixes one side of a type like
//! `Result<T, E>` and maps the other, [`Bifunctor`] maps both sides at
//! once (`bimap`) or each independently (`first`, `second`).
//!
//! # Laws
//!
//! ```text
//! identity:    x.bimap(|a| a, |b| b) == x
//! composition: x.bimap(f1, g1).bimap(f2, g2)
//!                  == x.bimap(|a| f2(f1(a)), |b| g2(g1(b)))
//! ```

/// A type with two independent slots that can each be mapped.
pub trait Bifunctor<A, B> {
    /// The same two-slot type at different slot types.
    type Target<C, D>;

    /// Maps both slots at once.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Maps only the first slot.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        Self: Sized,
        F: FnOnce(A) -> C,
    {
        self.bimap(function, |second| second)
    }

    /// Maps only the second slot.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        Self: Sized,
        G: FnOnce(B) -> D,
    {
        self.bimap(|first| first, function)
    }
}

// Result's conventional bifunctor order is (error, value), matching
// the (first, second) slots of Either.
impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(T) -> D,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }
}

impl<A, B> Bifunctor<A, B> for (A, B) {
    type Target<C, D> = (C, D);

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> (C, D)
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        (first_function(self.0), second_function(self.1))
    }
}
