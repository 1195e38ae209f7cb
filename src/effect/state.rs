//! The State type - simulated mutable state.
//!
//! A [`State<S, A>`] wraps a transition function `S -> (A, S)`: given
//! a current state it produces a result and the next state. Chaining
//! threads the state through each step; nothing runs until an initial
//! state is supplied to [`run`](State::run), [`eval`](State::eval), or
//! [`exec`](State::exec). The state is never mutated in place, only
//! replaced.
//!
//! ```rust
//! use currycomb::effect::State;
//!
//! fn pop() -> State<Vec<i32>, Option<i32>> {
//!     State::new(|mut stack: Vec<i32>| {
//!         let top = stack.pop();
//!         (top, stack)
//!     })
//! }
//!
//! let (top, rest) = pop().run(vec![1, 2, 3]);
//! assert_eq!(top, Some(3));
//! assert_eq!(rest, vec![1, 2]);
//! ```

use std::rc::Rc;

/// A computation threading state through each step.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition function.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Supplies the initial state; returns the result and final state.
    pub fn run(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Supplies the initial state; returns only the result.
    pub fn eval(&self, initial_state: S) -> A {
        self.run(initial_state).0
    }

    /// Supplies the initial state; returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        self.run(initial_state).1
    }

    /// Produces a fixed value, passing the state through unchanged.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Maps the produced value.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.transition;
        State::new(move |state| {
            let (value, next_state) = (original)(state);
            (function(value), next_state)
        })
    }

    /// Sequences a dependent computation, threading the state through
    /// both.
    pub fn chain<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let original = self.transition;
        State::new(move |state| {
            let (value, intermediate_state) = (original)(state);
            function(value).run(intermediate_state)
        })
    }

    /// Alias for [`chain`](State::chain).
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Sequences another computation, discarding this result.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.chain(move |_| next.clone())
    }

    /// Combines two computations, threading the state left to right.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let left = self.transition;
        let right = other.transition;
        State::new(move |state| {
            let (a, intermediate_state) = (left)(state);
            let (b, final_state) = (right)(intermediate_state);
            (function(a, b), final_state)
        })
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Returns the current state as the result.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: Clone + 'static> State<S, ()> {
    /// Replaces the state.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Replaces the state with a function of the current one.
    pub fn modify<F>(function: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| ((), function(state)))
    }
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Projects a value out of the current state.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            (value, state)
        })
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn increment() -> State<i32, i32> {
        State::new(|counter: i32| (counter, counter + 1))
    }

    #[test]
    fn run_eval_exec_project() {
        let state = increment();
        assert_eq!(state.run(0), (0, 1));
        assert_eq!(state.eval(0), 0);
        assert_eq!(state.exec(0), 1);
    }

    #[test]
    fn pure_passes_state_through() {
        let state: State<i32, &str> = State::pure("value");
        assert_eq!(state.run(7), ("value", 7));
    }

    #[test]
    fn get_returns_state_as_result() {
        assert_eq!(State::<i32, i32>::get().run(5), (5, 5));
    }

    #[test]
    fn put_replaces_state() {
        assert_eq!(State::put(9).run(5), ((), 9));
    }

    #[test]
    fn modify_applies_function_to_state() {
        assert_eq!(State::modify(|n: i32| n * 2).run(21), ((), 42));
    }

    #[test]
    fn gets_projects_state() {
        let length = State::<Vec<i32>, usize>::gets(Vec::len);
        assert_eq!(length.run(vec![1, 2, 3]).0, 3);
    }

    #[test]
    fn chain_threads_state() {
        let two_increments = increment().chain(|first| increment().fmap(move |second| (first, second)));
        let ((first, second), final_state) = two_increments.run(10);
        assert_eq!((first, second), (10, 11));
        assert_eq!(final_state, 12);
    }

    #[test]
    fn map2_threads_state_left_to_right() {
        let combined = increment().map2(increment(), |a, b| (a, b));
        assert_eq!(combined.run(0), ((0, 1), 2));
    }

    #[test]
    fn state_is_reusable() {
        let state = increment();
        assert_eq!(state.run(0), (0, 1));
        assert_eq!(state.run(10), (10, 11));
    }

    #[test]
    fn get_put_laws() {
        // get then put restores the state
        let round_trip = State::<i32, i32>::get().chain(State::put);
        assert_eq!(round_trip.run(5), ((), 5));

        // put then get observes the put value
        let observed = State::put(9).then(State::<i32, i32>::get());
        assert_eq!(observed.run(5), (9, 9));

        // put s1 then put s2 is put s2
        let last_wins = State::put(1).then(State::put(2));
        assert_eq!(last_wins.run(0), ((), 2));
    }

    #[test]
    fn modify_composition_law() {
        let f = |n: i32| n + 1;
        let g = |n: i32| n * 2;
        let sequenced = State::modify(f).then(State::modify(g));
        let composed = State::modify(move |n| g(f(n)));
        assert_eq!(sequenced.exec(10), composed.exec(10));
    }

    #[test]
    fn monad_laws_hold_under_run() {
        let f = |n: i32| State::<i32, i32>::new(move |s| (n + s, s + 1));
        let g = |n: i32| State::<i32, i32>::new(move |s| (n * s, s));

        assert_eq!(State::pure(5).chain(f).run(3), f(5).run(3));
        assert_eq!(increment().chain(State::pure).run(3), increment().run(3));
        assert_eq!(
            increment().chain(f).chain(g).run(3),
            increment().chain(move |x| f(x).chain(g)).run(3)
        );
    }
}
