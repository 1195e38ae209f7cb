//! Property-based tests for the currying and partial-application
//! macros.
//!
//! The central property is grouping invariance: however the arguments
//! of an n-ary function are split across applications, the final
//! result equals the direct call.

use currycomb::{compose, curry2, curry3, curry4, curry5, partial, pipe};
use proptest::prelude::*;

fn add3(a: i64, b: i64, c: i64) -> i64 {
    a + b + c
}

proptest! {
    /// curry2 agrees with the direct call.
    #[test]
    fn prop_curry2_matches_direct_call(a in -1000i64..1000, b in -1000i64..1000) {
        let add = |x: i64, y: i64| x + y;
        prop_assert_eq!(curry2!(add)(a)(b), add(a, b));
    }

    /// Every grouping of a 3-ary call yields the same result.
    #[test]
    fn prop_curry3_grouping_invariance(
        a in -1000i64..1000,
        b in -1000i64..1000,
        c in -1000i64..1000,
    ) {
        let direct = add3(a, b, c);
        prop_assert_eq!(curry3!(add3)(a)(b)(c), direct);
        prop_assert_eq!(partial!(add3, a, b, __)(c), direct);
        prop_assert_eq!(partial!(add3, a, __, __)(b, c), direct);
        prop_assert_eq!(partial!(add3, __, b, __)(a, c), direct);
        prop_assert_eq!(partial!(add3, a, __, c)(b), direct);
        prop_assert_eq!(partial!(add3, a, b, c)(), direct);
        prop_assert_eq!(partial!(add3, __, __, __)(a, b, c), direct);
    }

    /// A reused partial application does not change between calls.
    #[test]
    fn prop_partial_application_is_stable(
        a in -1000i64..1000,
        b in -1000i64..1000,
        c in -1000i64..1000,
    ) {
        let curried = curry3!(add3);
        let with_first = curried(a);
        let with_first_second = with_first(b);
        prop_assert_eq!(with_first_second(c), add3(a, b, c));
        // Calling again with the same argument gives the same answer.
        prop_assert_eq!(with_first_second(c), add3(a, b, c));
        // The intermediate stages are still usable.
        prop_assert_eq!(with_first(b)(c), add3(a, b, c));
        prop_assert_eq!(curried(a)(b)(c), add3(a, b, c));
    }

    /// Larger arities curry the same way.
    #[test]
    fn prop_curry4_and_curry5(
        a in -100i64..100,
        b in -100i64..100,
        c in -100i64..100,
        d in -100i64..100,
        e in -100i64..100,
    ) {
        let sum4 = |w: i64, x: i64, y: i64, z: i64| w + x + y + z;
        prop_assert_eq!(curry4!(sum4)(a)(b)(c)(d), sum4(a, b, c, d));

        let sum5 = |v: i64, w: i64, x: i64, y: i64, z: i64| v + w + x + y + z;
        prop_assert_eq!(curry5!(sum5)(a)(b)(c)(d)(e), sum5(a, b, c, d, e));
    }

    /// compose! is associative and pipe! agrees with it.
    #[test]
    fn prop_compose_associativity_and_pipe(x in -1000i64..1000) {
        let f = |n: i64| n + 1;
        let g = |n: i64| n * 2;
        let h = |n: i64| n - 3;

        let left = compose!(compose!(f, g), h);
        let right = compose!(f, compose!(g, h));
        prop_assert_eq!(left(x), right(x));

        prop_assert_eq!(pipe!(x, h, g, f), left(x));
    }

    /// compose! applies right to left; pipe! left to right.
    #[test]
    fn prop_compose_order(x in -1000i64..1000) {
        let f = |n: i64| n + 1;
        let g = |n: i64| n * 2;
        prop_assert_eq!(compose!(f, g)(x), f(g(x)));
        prop_assert_eq!(pipe!(x, f, g), g(f(x)));
    }
}

#[test]
fn curried_functions_work_with_owned_arguments() {
    let join = |a: String, b: String, c: String| format!("{a}-{b}-{c}");
    let curried = curry3!(join);
    let with_prefix = curried("x".to_string());
    assert_eq!(
        with_prefix("y".to_string())("z".to_string()),
        "x-y-z"
    );
    // The partial application is reusable even with owned captures.
    assert_eq!(
        with_prefix("p".to_string())("q".to_string()),
        "x-p-q"
    );
}

#[test]
fn partial_with_middle_placeholder() {
    fn clamp(low: i64, value: i64, high: i64) -> i64 {
        value.max(low).min(high)
    }

    let clamp_to_percent = partial!(clamp, 0, __, 100);
    assert_eq!(clamp_to_percent(150), 100);
    assert_eq!(clamp_to_percent(-3), 0);
    assert_eq!(clamp_to_percent(42), 42);
}
