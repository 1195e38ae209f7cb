//! Tests for MaybeT, the optional-inside-an-effect transformer.

use currycomb::effect::{IO, MaybeT};

type Lookup = MaybeT<Result<Option<i32>, String>>;

#[test]
fn pure_then_run_round_trips() {
    assert_eq!(Lookup::pure_result(5).run(), Ok(Some(5)));
}

#[test]
fn chain_into_outer_failure_short_circuits_with_the_outer_error() {
    let outcome = Lookup::pure_result(5).chain_result(|_| MaybeT::new(Err("x".to_string())));
    assert_eq!(outcome.run(), Err("x".to_string()));
}

#[test]
fn inner_absence_is_relifted_into_a_healthy_outer() {
    let outcome = Lookup::pure_result(5)
        .chain_result(|_| Lookup::nothing_result())
        .chain_result(|n| Lookup::pure_result(n + 1));
    assert_eq!(outcome.run(), Ok(None));
}

#[test]
fn continuations_after_an_outer_error_never_run() {
    let mut executed = false;
    let outcome = Lookup::new(Err("early".to_string())).chain_result(|n| {
        executed = true;
        Lookup::pure_result(n + 1)
    });
    assert_eq!(outcome.run(), Err("early".to_string()));
    assert!(!executed);
}

#[test]
fn fmap_reaches_through_both_layers() {
    assert_eq!(Lookup::pure_result(5).fmap_result(|n| n * 2).run(), Ok(Some(10)));
    assert_eq!(
        Lookup::nothing_result().fmap_result(|n| n * 2).run(),
        Ok(None)
    );
    assert_eq!(
        Lookup::new(Err("e".to_string())).fmap_result(|n| n * 2).run(),
        Err("e".to_string())
    );
}

#[test]
fn hoist_and_lift_embed_each_layer() {
    assert_eq!(Lookup::hoist_result(Some(1)).run(), Ok(Some(1)));
    assert_eq!(Lookup::hoist_result(None).run(), Ok(None));
    assert_eq!(Lookup::lift_result(Ok(1)).run(), Ok(Some(1)));
    assert_eq!(
        Lookup::lift_result(Err("e".to_string())).run(),
        Err("e".to_string())
    );
}

#[test]
fn unwrap_or_throw_turns_absence_into_the_outer_error() {
    assert_eq!(
        Lookup::nothing_result().unwrap_or_throw("missing".to_string()),
        Err("missing".to_string())
    );
    assert_eq!(
        Lookup::pure_result(3).unwrap_or_throw("missing".to_string()),
        Ok(3)
    );
}

#[test]
fn monad_laws_through_the_stack() {
    let f = |n: i32| {
        if n > 0 {
            Lookup::pure_result(n * 2)
        } else {
            Lookup::nothing_result()
        }
    };

    // left identity
    assert_eq!(Lookup::pure_result(5).chain_result(f).run(), f(5).run());
    // right identity
    assert_eq!(
        f(5).chain_result(Lookup::pure_result).run(),
        f(5).run()
    );
}

#[test]
fn io_outer_runs_nothing_until_the_effect_is_run() {
    use std::cell::Cell;
    use std::rc::Rc;

    let invocations = Rc::new(Cell::new(0));
    let tracked = Rc::clone(&invocations);

    let pipeline = MaybeT::lift_io(IO::new(move || {
        tracked.set(tracked.get() + 1);
        21
    }))
    .chain_io(|n| MaybeT::pure_io(n * 2));

    let effect = pipeline.run();
    assert_eq!(invocations.get(), 0);
    assert_eq!(effect.run(), Some(42));
    assert_eq!(effect.run(), Some(42));
    assert_eq!(invocations.get(), 2);
}
