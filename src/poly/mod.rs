//! Free polymorphic functions over the operation protocol.
//!
//! Every function here is a standalone counterpart to a protocol
//! method, dispatching through the type class traits: `map(f, x)`
//! works on any [`FunctorMut`], `concat(a, b)` on any
//! [`Semigroup`], and so on. Because host types (`Vec`, `String`,
//! `Option`, `Result`, `Box`) implement the same traits, these
//! functions accept plain sequences and strings as readily as the
//! crate's own containers; there is no separate fallback path, just
//! more impls.
//!
//! The functions put the function argument first (data last), which
//! reads naturally under partial application:
//!
//! ```rust
//! use currycomb::poly;
//!
//! let doubled = poly::map(|n: i32| n * 2, vec![1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let present = poly::map(|n: i32| n * 2, Some(21));
//! assert_eq!(present, Some(42));
//!
//! let greeting = poly::concat("Hello, ".to_string(), "World!".to_string());
//! assert_eq!(greeting, "Hello, World!");
//! ```

use crate::typeclass::{
    Alternative, Applicative, Bifunctor, Comonad, Foldable, FunctorMut, Monad, Monoid, Semigroup,
    Traversable, TypeConstructor,
};

/// Maps a function over any mappable container, or any host sequence.
pub fn map<FA, B, F>(function: F, container: FA) -> FA::WithType<B>
where
    FA: FunctorMut,
    F: FnMut(FA::Inner) -> B,
{
    container.fmap_mut(function)
}

/// Sequences a dependent computation: feeds the contained value to
/// `function` and flattens.
pub fn chain<MA, B, F>(function: F, container: MA) -> MA::WithType<B>
where
    MA: Monad,
    F: FnOnce(MA::Inner) -> MA::WithType<B>,
{
    container.chain(function)
}

/// Applies a contained function to a contained value.
pub fn apply<FA, B, F>(functions: FA::WithType<F>, container: FA) -> FA::WithType<B>
where
    FA: Applicative,
    F: FnOnce(FA::Inner) -> B,
{
    container.ap(functions)
}

/// Folds a container from the left.
pub fn reduce<FA, B, F>(function: F, init: B, container: FA) -> B
where
    FA: Foldable,
    F: FnMut(B, FA::Inner) -> B,
{
    container.fold_left(init, function)
}

/// Folds a container from the right.
pub fn reduce_right<FA, B, F>(function: F, init: B, container: FA) -> B
where
    FA: Foldable,
    F: FnMut(FA::Inner, B) -> B,
{
    container.fold_right(init, function)
}

/// Combines two semigroup values; strings and vectors concatenate.
pub fn concat<S: Semigroup>(left: S, right: S) -> S {
    left.combine(right)
}

/// The identity element of a monoid, named by type parameter.
#[must_use]
pub fn mempty<M: Monoid>() -> M {
    M::empty()
}

/// Combines every value in an iterator, starting from the identity.
pub fn mconcat<M, I>(values: I) -> M
where
    M: Monoid,
    I: IntoIterator<Item = M>,
{
    M::combine_all(values)
}

/// Maps both slots of a two-slot container.
pub fn bimap<FA, A, B, C, D, F, G>(
    first_function: F,
    second_function: G,
    container: FA,
) -> FA::Target<C, D>
where
    FA: Bifunctor<A, B>,
    F: FnOnce(A) -> C,
    G: FnOnce(B) -> D,
{
    container.bimap(first_function, second_function)
}

/// Returns the first non-failing alternative.
pub fn alt<FA: Alternative>(first: FA, second: FA) -> FA {
    first.alt(second)
}

/// The failing computation of an alternative, named by type parameter.
#[must_use]
pub fn zero<FA: Alternative, B>() -> FA::WithType<B> {
    FA::zero()
}

/// Extracts the value from a comonadic container.
pub fn extract<WA: Comonad>(container: WA) -> WA::Inner {
    container.extract()
}

/// Maps a function over the whole container, re-wrapping its result.
pub fn extend<WA, B, F>(function: F, container: WA) -> WA::WithType<B>
where
    WA: Comonad,
    F: FnOnce(WA) -> B,
{
    container.extend(function)
}

/// Traverses a structure with a fallible function, collecting inside
/// the `Option`.
pub fn traverse_option<TA, B, F>(function: F, container: TA) -> Option<TA::WithType<B>>
where
    TA: Traversable,
    F: FnMut(TA::Inner) -> Option<B>,
{
    container.traverse_option(function)
}

/// Traverses a structure with a fallible function, collecting inside
/// the `Result`.
pub fn traverse_result<TA, B, E, F>(function: F, container: TA) -> Result<TA::WithType<B>, E>
where
    TA: Traversable,
    F: FnMut(TA::Inner) -> Result<B, E>,
{
    container.traverse_result(function)
}

/// Turns a structure of options inside out.
pub fn sequence_option<TA>(
    container: TA,
) -> Option<TA::WithType<<TA::Inner as TypeConstructor>::Inner>>
where
    TA: Traversable,
    TA::Inner: TypeConstructor + Into<Option<<TA::Inner as TypeConstructor>::Inner>>,
{
    container.sequence_option()
}

/// Turns a structure of results inside out.
pub fn sequence_result<TA, E>(
    container: TA,
) -> Result<TA::WithType<<TA::Inner as TypeConstructor>::Inner>, E>
where
    TA: Traversable,
    TA::Inner: TypeConstructor + Into<Result<<TA::Inner as TypeConstructor>::Inner, E>>,
{
    container.sequence_result()
}

/// Combines two independent applicative values with a binary function.
pub fn lift_a2<FA, B, C, F>(function: F, first: FA, second: FA::WithType<B>) -> FA::WithType<C>
where
    FA: Applicative,
    F: FnOnce(FA::Inner, B) -> C,
{
    first.map2(second, function)
}

/// Combines three independent applicative values.
pub fn lift_a3<FA, B, C, D, F>(
    function: F,
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
) -> FA::WithType<D>
where
    FA: Applicative,
    F: FnOnce(FA::Inner, B, C) -> D,
{
    first.map3(second, third, function)
}

/// Combines four independent applicative values.
pub fn lift_a4<FA, B, C, D, E, F>(
    function: F,
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
    fourth: FA::WithType<D>,
) -> FA::WithType<E>
where
    FA: Applicative,
    FA::WithType<(FA::Inner, B)>: Applicative<Inner = (FA::Inner, B)>,
    FA::WithType<(FA::Inner, B)>: TypeConstructor<WithType<C> = FA::WithType<C>>,
    FA::WithType<(FA::Inner, B)>:
        TypeConstructor<WithType<((FA::Inner, B), C)> = FA::WithType<((FA::Inner, B), C)>>,
    FA::WithType<((FA::Inner, B), C)>: Applicative<Inner = ((FA::Inner, B), C)>,
    FA::WithType<((FA::Inner, B), C)>: TypeConstructor<WithType<D> = FA::WithType<D>>,
    FA::WithType<((FA::Inner, B), C)>: TypeConstructor<WithType<E> = FA::WithType<E>>,
    F: FnOnce(FA::Inner, B, C, D) -> E,
{
    first
        .product(second)
        .product(third)
        .map2(fourth, |((a, b), c), d| function(a, b, c, d))
}

/// Combines five independent applicative values.
#[allow(clippy::many_single_char_names)]
pub fn lift_a5<FA, B, C, D, E, G, F>(
    function: F,
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
    fourth: FA::WithType<D>,
    fifth: FA::WithType<E>,
) -> FA::WithType<G>
where
    FA: Applicative,
    FA::WithType<(FA::Inner, B)>: Applicative<Inner = (FA::Inner, B)>,
    FA::WithType<(FA::Inner, B)>: TypeConstructor<WithType<C> = FA::WithType<C>>,
    FA::WithType<(FA::Inner, B)>:
        TypeConstructor<WithType<((FA::Inner, B), C)> = FA::WithType<((FA::Inner, B), C)>>,
    FA::WithType<((FA::Inner, B), C)>: Applicative<Inner = ((FA::Inner, B), C)>,
    FA::WithType<((FA::Inner, B), C)>: TypeConstructor<WithType<D> = FA::WithType<D>>,
    FA::WithType<((FA::Inner, B), C)>: TypeConstructor<
        WithType<(((FA::Inner, B), C), D)> = FA::WithType<(((FA::Inner, B), C), D)>,
    >,
    FA::WithType<(((FA::Inner, B), C), D)>: Applicative<Inner = (((FA::Inner, B), C), D)>,
    FA::WithType<(((FA::Inner, B), C), D)>: TypeConstructor<WithType<E> = FA::WithType<E>>,
    FA::WithType<(((FA::Inner, B), C), D)>: TypeConstructor<WithType<G> = FA::WithType<G>>,
    F: FnOnce(FA::Inner, B, C, D, E) -> G,
{
    first
        .product(second)
        .product(third)
        .product(fourth)
        .map2(fifth, |(((a, b), c), d), e| function(a, b, c, d, e))
}

/// Composes two Kleisli arrows left to right: the result feeds `A`
/// through `first`, then binds `second`.
pub fn compose_kleisli<A, B, C, MB, F, G>(
    first: F,
    second: G,
) -> impl FnOnce(A) -> MB::WithType<C>
where
    MB: Monad<Inner = B>,
    F: FnOnce(A) -> MB,
    G: FnOnce(B) -> MB::WithType<C>,
{
    move |input| first(input).chain(second)
}

/// Composes two Kleisli arrows right to left (mathematical order).
pub fn compose_kleisli_right<A, B, C, MB, F, G>(
    second: G,
    first: F,
) -> impl FnOnce(A) -> MB::WithType<C>
where
    MB: Monad<Inner = B>,
    F: FnOnce(A) -> MB,
    G: FnOnce(B) -> MB::WithType<C>,
{
    compose_kleisli(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::{Either, Validation};
    use crate::persistent::PersistentList;
    use crate::typeclass::Identity;

    #[test]
    fn map_covers_containers_and_sequences() {
        assert_eq!(map(|n: i32| n * 2, Some(21)), Some(42));
        assert_eq!(map(|n: i32| n * 2, vec![1, 2]), vec![2, 4]);
        assert_eq!(
            map(|n: i32| n * 2, Either::<String, i32>::Right(3)),
            Either::Right(6)
        );
        assert_eq!(
            map(|n: i32| n * 2, PersistentList::singleton(5)),
            PersistentList::singleton(10)
        );
    }

    #[test]
    fn chain_dispatches_to_monads() {
        let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
        assert_eq!(chain(halve, Some(12)), Some(6));
        assert_eq!(chain(halve, Some(7)), None);
    }

    #[test]
    fn apply_uses_wrapped_function() {
        let functions: Option<fn(i32) -> i32> = Some(|n| n + 1);
        assert_eq!(apply(functions, Some(5)), Some(6));
    }

    #[test]
    fn reduce_and_reduce_right() {
        assert_eq!(reduce(|acc, n: i32| acc + n, 0, vec![1, 2, 3]), 6);
        assert_eq!(
            reduce_right(
                |s: &str, acc: String| format!("{s}{acc}"),
                String::new(),
                vec!["a", "b", "c"]
            ),
            "abc"
        );
    }

    #[test]
    fn concat_covers_host_types() {
        assert_eq!(concat("ab".to_string(), "cd".to_string()), "abcd");
        assert_eq!(concat(vec![1], vec![2]), vec![1, 2]);
        assert_eq!(mempty::<String>(), "");
        assert_eq!(
            mconcat::<String, _>(vec!["a".to_string(), "b".to_string()]),
            "ab"
        );
    }

    #[test]
    fn bimap_and_alt() {
        assert_eq!(
            bimap(|e: i32| e + 1, |s: &str| s.len(), Either::<i32, &str>::Left(1)),
            Either::Left(2)
        );
        assert_eq!(alt(None, Some(2)), Some(2));
        assert_eq!(zero::<Option<i32>, i32>(), None);
    }

    #[test]
    fn extract_and_extend_on_identity() {
        assert_eq!(extract(Identity::new(5)), 5);
        assert_eq!(extend(|w: Identity<i32>| w.0 * 2, Identity::new(5)), Identity::new(10));
    }

    #[test]
    fn traverse_and_sequence() {
        let parsed: Option<Vec<i32>> = traverse_option(|s: &str| s.parse().ok(), vec!["1", "2"]);
        assert_eq!(parsed, Some(vec![1, 2]));

        let sequenced = sequence_option(vec![Some(1), Some(2)]);
        assert_eq!(sequenced, Some(vec![1, 2]));
        assert_eq!(sequence_option(vec![Some(1), None]), None);
    }

    #[test]
    fn lift_a2_accumulates_validation_errors() {
        let left: Validation<Vec<&str>, i32> = Validation::Invalid(vec!["a"]);
        let right: Validation<Vec<&str>, i32> = Validation::Invalid(vec!["b"]);
        assert_eq!(
            lift_a2(|x, y| x + y, left, right),
            Validation::Invalid(vec!["a", "b"])
        );
    }

    #[test]
    fn lift_a3_through_a5_on_option() {
        assert_eq!(
            lift_a3(|a, b, c| a + b + c, Some(1), Some(2), Some(3)),
            Some(6)
        );
        assert_eq!(
            lift_a4(|a, b, c, d| a + b + c + d, Some(1), Some(2), Some(3), Some(4)),
            Some(10)
        );
        assert_eq!(
            lift_a5(
                |a, b, c, d, e| a + b + c + d + e,
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5)
            ),
            Some(15)
        );
        assert_eq!(
            lift_a4(|a, b: i32, c, d| a + b + c + d, Some(1), None, Some(3), Some(4)),
            None
        );
    }

    #[test]
    fn kleisli_composition() {
        let parse = |s: &str| s.parse::<i32>().ok();
        let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };

        let parse_then_halve = compose_kleisli(parse, halve);
        assert_eq!(parse_then_halve("12"), Some(6));

        let same = compose_kleisli_right(halve, parse);
        assert_eq!(same("12"), Some(6));

        let odd = compose_kleisli(parse, halve);
        assert_eq!(odd("7"), None);
    }
}
