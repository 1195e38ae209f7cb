//! Applicative type class - combining independent computations.
//!
//! [`Applicative`] extends [`Functor`] with `pure` (lifting a plain
//! value into the container) and `map2`/`ap` (combining two contained
//! values). Where `chain` sequences *dependent* computations,
//! applicative combination is *independent*: neither operand can see
//! the other's result, which is what lets failure-accumulating types
//! like `Validation` collect every error instead of stopping at the
//! first.
//!
//! # Laws
//!
//! ```text
//! identity:     v.ap(pure(|x| x)) == v
//! homomorphism: pure(a).ap(pure(f)) == pure(f(a))
//! interchange:  pure(y).ap(u) == u.ap(pure(|f| f(y)))
//! composition:  a.ap(g.ap(f.fmap(compose))) == a.ap(g).ap(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use currycomb::typeclass::Applicative;
//!
//! let lifted: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(lifted, Some(42));
//!
//! assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
//!
//! let functions: Option<fn(i32) -> i32> = Some(|x| x + 1);
//! assert_eq!(Some(5).ap(functions), Some(6));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A [`Functor`] that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a plain value into the container.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contained values with a binary function. Failure in
    /// either operand (in whatever sense the container defines) fails
    /// the whole combination.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self: Sized,
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a contained function to this contained value.
    ///
    /// The function container is the argument, so a value can be
    /// threaded through a pipeline of wrapped functions:
    /// `value.ap(functions)`.
    #[inline]
    fn ap<B, F>(self, functions: Self::WithType<F>) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> B,
    {
        self.map2(functions, |value, function| function(value))
    }

    /// Combines three contained values with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        Self: Sized,
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two contained values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both operands and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both operands and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }
}

// =============================================================================
// Option<A>
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E>
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Box<T>
// =============================================================================

impl<T> Applicative for Box<T> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(T, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, function: F) -> Box<D>
    where
        F: FnOnce(T, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }
}

// =============================================================================
// Identity<A>
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        function: F,
    ) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }
}

// =============================================================================
// Vec<T> - cartesian-product applicative, separate trait for the Clone
// bounds multi-element combination requires
// =============================================================================

/// Applicative-style operations for `Vec`, representing
/// non-deterministic computation: combining two vectors produces every
/// pairing (the cartesian product).
pub trait ApplicativeVec: Sized {
    /// The element type.
    type Elem;

    /// Lifts a value into a singleton vector.
    #[must_use]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines every pairing of elements with a binary function.
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::Elem: Clone,
        F: FnMut(Self::Elem, B) -> C;

    /// Pairs every combination of elements.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::Elem, B)>
    where
        Self::Elem: Clone;

    /// Applies every contained function to every element.
    fn ap<B, F>(self, functions: Vec<F>) -> Vec<B>
    where
        Self::Elem: Clone,
        F: FnMut(Self::Elem) -> B;
}

impl<A> ApplicativeVec for Vec<A> {
    type Elem = A;

    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(A, B)>
    where
        A: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    fn ap<B, F>(self, functions: Vec<F>) -> Vec<B>
    where
        A: Clone,
        F: FnMut(A) -> B,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(functions.len()));
        for mut function in functions {
            for a in &self {
                result.push(function(a.clone()));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_lifts() {
        let lifted: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(lifted, Some(42));
    }

    #[rstest]
    #[case(Some(1), Some(2), Some(3))]
    #[case(None, Some(2), None)]
    #[case(Some(1), None, None)]
    #[case(None, None, None)]
    fn option_map2(
        #[case] left: Option<i32>,
        #[case] right: Option<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(left.map2(right, |x, y| x + y), expected);
    }

    #[rstest]
    fn option_ap_applies_wrapped_function() {
        let functions: Option<fn(i32) -> i32> = Some(|x| x + 1);
        assert_eq!(Some(5).ap(functions), Some(6));
        assert_eq!(None::<i32>.ap(functions), None);

        let absent: Option<fn(i32) -> i32> = None;
        assert_eq!(Some(5).ap(absent), None);
    }

    #[rstest]
    fn option_map3_combines_three() {
        assert_eq!(
            Some(1).map3(Some(2), Some(3), |a, b, c| a + b + c),
            Some(6)
        );
        assert_eq!(
            Some(1).map3(None::<i32>, Some(3), |a, b, c| a + b + c),
            None
        );
    }

    #[rstest]
    fn option_products() {
        assert_eq!(Some(1).product(Some("x")), Some((1, "x")));
        assert_eq!(Some(1).product_left(Some(2)), Some(1));
        assert_eq!(Some(1).product_right(Some(2)), Some(2));
        assert_eq!(Some(1).product_left(None::<i32>), None);
    }

    #[rstest]
    fn result_map2_keeps_first_error() {
        let left: Result<i32, &str> = Err("first");
        let right: Result<i32, &str> = Err("second");
        assert_eq!(left.map2(right, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn vec_map2_is_cartesian() {
        let pairs = vec![1, 2].map2(vec![10, 20], |a, b| a + b);
        assert_eq!(pairs, vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn vec_ap_applies_each_function_to_each_element() {
        let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
        assert_eq!(vec![1, 2].ap(functions), vec![2, 3, 10, 20]);
    }

    // Law checks

    #[rstest]
    fn option_homomorphism_law() {
        let function = |x: i32| x * 2;
        let left = Some(5).ap(<Option<i32>>::pure(function));
        let right: Option<i32> = <Option<i32>>::pure(function(5));
        assert_eq!(left, right);
    }

    #[rstest]
    fn option_identity_law() {
        let value = Some(7);
        let identity: Option<fn(i32) -> i32> = <Option<i32>>::pure(|x| x);
        assert_eq!(value.ap(identity), value);
    }

    #[rstest]
    fn option_ap_composition_law() {
        let f: fn(i32) -> i32 = |x| x + 1;
        let g: fn(i32) -> i32 = |x| x * 2;
        let value = Some(5);

        let composed = Some(f).fmap(|f| move |g: fn(i32) -> i32| move |x: i32| f(g(x)));
        let left = value.ap(Some(g).ap(composed));
        let right = value.ap(Some(g)).ap(Some(f));
        assert_eq!(left, right);
        assert_eq!(left, Some(11));
    }

    #[rstest]
    fn identity_map2() {
        assert_eq!(
            Identity::new(2).map2(Identity::new(3), |a, b| a * b),
            Identity::new(6)
        );
    }
}
