//! The `StateT` transformer - stateful computation inside another
//! effect.
//!
//! `StateT<S, M>` wraps a transition `S -> Outer<(A, S)>`. Each step
//! threads the state exactly as [`State`](super::State) does, but the
//! transition runs inside the outer effect: a failing step loses no
//! state invariants, it simply yields the outer failure and stops the
//! chain.
//!
//! ```rust
//! use currycomb::effect::StateT;
//!
//! // Pop from a stack, failing on empty.
//! fn pop() -> StateT<Vec<i32>, Option<(i32, Vec<i32>)>> {
//!     StateT::new(|mut stack: Vec<i32>| stack.pop().map(|top| (top, stack)))
//! }
//!
//! let two_pops = pop().chain_option(|first| {
//!     pop().fmap_option(move |second| first + second)
//! });
//!
//! assert_eq!(two_pops.run(vec![1, 2, 3]), Some((5, vec![1])));
//! assert_eq!(two_pops.run(vec![9]), None);
//! ```

use std::rc::Rc;

use super::io::IO;

/// A transformer stacking state threading outside another effect.
pub struct StateT<S, M>
where
    S: 'static,
{
    transition: Rc<dyn Fn(S) -> M>,
}

impl<S, M> Clone for StateT<S, M>
where
    S: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, M> StateT<S, M>
where
    S: 'static,
    M: 'static,
{
    /// Wraps a transition producing the nested computation.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> M + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Supplies the initial state, producing the nested computation.
    pub fn run(&self, initial_state: S) -> M {
        (self.transition)(initial_state)
    }
}

// =============================================================================
// Option as the outer effect
// =============================================================================

impl<S, A> StateT<S, Option<(A, S)>>
where
    S: 'static,
    A: 'static,
{
    /// Lifts a value; the state passes through unchanged.
    pub fn pure_option(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Some((value.clone(), state)))
    }

    /// Lifts a bare optional value; the state passes through.
    pub fn lift_option(inner: Option<A>) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| inner.clone().map(|value| (value, state)))
    }

    /// Returns the current state as the result.
    #[must_use]
    pub fn get_option() -> Self
    where
        S: Clone,
        A: From<S>,
    {
        Self::new(|state: S| Some((A::from(state.clone()), state)))
    }

    /// Maps the produced value.
    pub fn fmap_option<B, F>(self, function: F) -> StateT<S, Option<(B, S)>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.transition;
        StateT::new(move |state| {
            (original)(state).map(|(value, next_state)| (function(value), next_state))
        })
    }

    /// Binds through the option, threading the state.
    pub fn chain_option<B, F>(self, function: F) -> StateT<S, Option<(B, S)>>
    where
        F: Fn(A) -> StateT<S, Option<(B, S)>> + 'static,
        B: 'static,
    {
        let original = self.transition;
        StateT::new(move |state| {
            (original)(state)
                .and_then(|(value, next_state)| function(value).run(next_state))
        })
    }
}

impl<S> StateT<S, Option<((), S)>>
where
    S: Clone + 'static,
{
    /// Replaces the state.
    pub fn put_option(new_state: S) -> Self {
        Self::new(move |_| Some(((), new_state.clone())))
    }

    /// Replaces the state with a function of the current one.
    pub fn modify_option<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| Some(((), function(state))))
    }
}

// =============================================================================
// Result as the outer effect
// =============================================================================

impl<S, A, E> StateT<S, Result<(A, S), E>>
where
    S: 'static,
    A: 'static,
    E: 'static,
{
    /// Lifts a value; the state passes through unchanged.
    pub fn pure_result(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| Ok((value.clone(), state)))
    }

    /// Lifts a bare fallible value; the state passes through.
    pub fn lift_result(inner: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
    {
        Self::new(move |state| inner.clone().map(|value| (value, state)))
    }

    /// Returns the current state as the result.
    #[must_use]
    pub fn get_result() -> Self
    where
        S: Clone,
        A: From<S>,
    {
        Self::new(|state: S| Ok((A::from(state.clone()), state)))
    }

    /// Maps the produced value.
    pub fn fmap_result<B, F>(self, function: F) -> StateT<S, Result<(B, S), E>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.transition;
        StateT::new(move |state| {
            (original)(state).map(|(value, next_state)| (function(value), next_state))
        })
    }

    /// Binds through the result, threading the state; an error stops
    /// the chain.
    pub fn chain_result<B, F>(self, function: F) -> StateT<S, Result<(B, S), E>>
    where
        F: Fn(A) -> StateT<S, Result<(B, S), E>> + 'static,
        B: 'static,
    {
        let original = self.transition;
        StateT::new(move |state| {
            (original)(state)
                .and_then(|(value, next_state)| function(value).run(next_state))
        })
    }
}

impl<S, E> StateT<S, Result<((), S), E>>
where
    S: Clone + 'static,
    E: 'static,
{
    /// Replaces the state.
    pub fn put_result(new_state: S) -> Self {
        Self::new(move |_| Ok(((), new_state.clone())))
    }

    /// Replaces the state with a function of the current one.
    pub fn modify_result<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| Ok(((), function(state))))
    }
}

// =============================================================================
// IO as the outer effect
// =============================================================================

impl<S, A> StateT<S, IO<(A, S)>>
where
    S: 'static,
    A: 'static,
{
    /// Lifts a value; the state passes through and the effect does
    /// nothing.
    pub fn pure_io(value: A) -> Self
    where
        A: Clone,
        S: Clone,
    {
        Self::new(move |state: S| {
            let value = value.clone();
            IO::new(move || (value.clone(), state.clone()))
        })
    }

    /// Lifts a bare effect; the state passes through.
    pub fn lift_io(inner: IO<A>) -> Self
    where
        S: Clone,
    {
        Self::new(move |state: S| {
            let inner = inner.clone();
            inner.fmap(move |value| (value, state.clone()))
        })
    }

    /// Returns the current state as the result.
    #[must_use]
    pub fn get_io() -> Self
    where
        S: Clone,
        A: From<S>,
    {
        Self::new(|state: S| IO::new(move || (A::from(state.clone()), state.clone())))
    }

    /// Maps the produced value; the effect stays deferred.
    pub fn fmap_io<B, F>(self, function: F) -> StateT<S, IO<(B, S)>>
    where
        F: Fn(A) -> B + Clone + 'static,
        B: 'static,
    {
        let original = self.transition;
        StateT::new(move |state| {
            (original)(state)
                .fmap({
                    let function = function.clone();
                    move |(value, next_state)| (function(value), next_state)
                })
        })
    }

    /// Binds through the effect, threading the state; nothing runs
    /// until the produced effect does.
    pub fn chain_io<B, F>(self, function: F) -> StateT<S, IO<(B, S)>>
    where
        F: Fn(A) -> StateT<S, IO<(B, S)>> + Clone + 'static,
        B: 'static,
    {
        let original = self.transition;
        StateT::new(move |state| {
            let function = function.clone();
            (original)(state)
                .chain(move |(value, next_state)| function(value).run(next_state))
        })
    }
}

impl<S> StateT<S, IO<((), S)>>
where
    S: Clone + 'static,
{
    /// Replaces the state.
    pub fn put_io(new_state: S) -> Self {
        Self::new(move |_| {
            let next = new_state.clone();
            IO::new(move || ((), next.clone()))
        })
    }

    /// Replaces the state with a function of the current one; the
    /// function runs only when the effect does.
    pub fn modify_io<F>(function: F) -> Self
    where
        F: Fn(S) -> S + Clone + 'static,
    {
        Self::new(move |state: S| {
            let function = function.clone();
            IO::new(move || ((), function(state.clone())))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop() -> StateT<Vec<i32>, Option<(i32, Vec<i32>)>> {
        StateT::new(|mut stack: Vec<i32>| stack.pop().map(|top| (top, stack)))
    }

    #[test]
    fn option_outer_threads_state() {
        let two_pops = pop().chain_option(|first| pop().fmap_option(move |second| first + second));
        assert_eq!(two_pops.run(vec![1, 2, 3]), Some((5, vec![1])));
    }

    #[test]
    fn option_outer_fails_without_state_result() {
        let two_pops = pop().chain_option(|_| pop());
        assert_eq!(two_pops.run(vec![9]), None);
    }

    #[test]
    fn option_outer_put_and_modify() {
        let sequenced = StateT::<i32, Option<((), i32)>>::put_option(5)
            .chain_option(|()| StateT::modify_option(|n: i32| n * 2));
        assert_eq!(sequenced.run(0), Some(((), 10)));
    }

    #[test]
    fn get_family_reads_current_state() {
        let read = StateT::<i32, Option<(i32, i32)>>::get_option();
        assert_eq!(read.run(7), Some((7, 7)));

        let read: StateT<i32, Result<(i32, i32), String>> = StateT::get_result();
        assert_eq!(read.run(7), Ok((7, 7)));
    }

    #[test]
    fn result_outer_reports_error() {
        let failing: StateT<i32, Result<(i32, i32), String>> =
            StateT::new(|_| Err("broken".to_string()));
        let chained = failing.chain_result(|n| StateT::pure_result(n + 1));
        assert_eq!(chained.run(0), Err("broken".to_string()));
    }

    #[test]
    fn result_outer_threads_state_on_success() {
        let step: StateT<i32, Result<(i32, i32), String>> =
            StateT::new(|counter: i32| Ok((counter, counter + 1)));
        let two_steps = step.clone().chain_result(move |first| {
            step.clone().fmap_result(move |second| (first, second))
        });
        assert_eq!(two_steps.run(10), Ok(((10, 11), 12)));
    }

    #[test]
    fn io_outer_get_put_modify() {
        let read: StateT<i32, IO<(i32, i32)>> = StateT::get_io();
        assert_eq!(read.run(7).run(), (7, 7));

        let replaced = StateT::<i32, IO<((), i32)>>::put_io(9);
        assert_eq!(replaced.run(0).run(), ((), 9));

        let doubled = StateT::<i32, IO<((), i32)>>::modify_io(|n| n * 2);
        assert_eq!(doubled.run(21).run(), ((), 42));
    }

    #[test]
    fn io_outer_stays_deferred() {
        use std::cell::Cell;
        use std::rc::Rc;

        let executed = Rc::new(Cell::new(false));
        let tracked = Rc::clone(&executed);

        let step = StateT::<i32, IO<(i32, i32)>>::new(move |state: i32| {
            let tracked = Rc::clone(&tracked);
            IO::new(move || {
                tracked.set(true);
                (state, state + 1)
            })
        })
        .chain_io(|n| StateT::pure_io(n * 10));

        let effect = step.run(4);
        assert!(!executed.get());
        assert_eq!(effect.run(), (40, 5));
        assert!(executed.get());
    }
}
