//! The `ReaderT` transformer - an environment-reading computation
//! whose result lives in another effect.
//!
//! `ReaderT<R, M>` wraps a function `R -> Outer<A>`. The environment
//! is threaded exactly as in [`Reader`](super::Reader); the outer
//! effect decides what "failure" means for each step. The outer effect
//! is fixed by the impl block (`Option`, `Result`, or [`IO`]), so there
//! is nothing to infer at construction time.
//!
//! ```rust
//! use currycomb::effect::ReaderT;
//!
//! #[derive(Clone)]
//! struct Env { threshold: i32 }
//!
//! let checked = ReaderT::<Env, Option<i32>>::ask_option(|env| env.threshold)
//!     .chain_option(|threshold| {
//!         ReaderT::new(move |_env: Env| if threshold > 0 { Some(threshold * 2) } else { None })
//!     });
//!
//! assert_eq!(checked.run(Env { threshold: 21 }), Some(42));
//! assert_eq!(checked.run(Env { threshold: 0 }), None);
//! ```

use std::rc::Rc;

use super::io::IO;

/// A transformer stacking an environment reader outside another
/// effect.
pub struct ReaderT<R, M>
where
    R: 'static,
{
    run_function: Rc<dyn Fn(R) -> M>,
}

impl<R, M> Clone for ReaderT<R, M>
where
    R: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, M> ReaderT<R, M>
where
    R: 'static,
    M: 'static,
{
    /// Wraps an environment-consuming function producing the nested
    /// computation.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> M + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Supplies the environment, producing the nested computation.
    pub fn run(&self, environment: R) -> M {
        (self.run_function)(environment)
    }

    /// Runs the computation under a locally modified environment.
    #[must_use]
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let original = self.run_function;
        Self::new(move |environment| (original)(modifier(environment)))
    }
}

// =============================================================================
// Option as the outer effect
// =============================================================================

impl<R, A> ReaderT<R, Option<A>>
where
    R: 'static,
    A: 'static,
{
    /// Lifts a value, ignoring the environment.
    pub fn pure_option(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Some(value.clone()))
    }

    /// Lifts a bare optional computation, ignoring the environment.
    pub fn lift_option(inner: Option<A>) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| inner.clone())
    }

    /// Projects a value out of the environment, always present.
    pub fn ask_option<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment| Some(projection(&environment)))
    }

    /// Maps the inner value.
    pub fn fmap_option<B, F>(self, function: F) -> ReaderT<R, Option<B>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderT::new(move |environment| (original)(environment).map(&function))
    }

    /// Binds through the option under a shared environment.
    pub fn chain_option<B, F>(self, function: F) -> ReaderT<R, Option<B>>
    where
        F: Fn(A) -> ReaderT<R, Option<B>> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        ReaderT::new(move |environment: R| {
            (original)(environment.clone()).and_then(|value| function(value).run(environment))
        })
    }
}

// =============================================================================
// Result as the outer effect
// =============================================================================

impl<R, A, E> ReaderT<R, Result<A, E>>
where
    R: 'static,
    A: 'static,
    E: 'static,
{
    /// Lifts a value, ignoring the environment.
    pub fn pure_result(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Lifts a bare fallible computation, ignoring the environment.
    pub fn lift_result(inner: Result<A, E>) -> Self
    where
        A: Clone,
        E: Clone,
    {
        Self::new(move |_| inner.clone())
    }

    /// Projects a value out of the environment, always succeeding.
    pub fn ask_result<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment| Ok(projection(&environment)))
    }

    /// Maps the inner value.
    pub fn fmap_result<B, F>(self, function: F) -> ReaderT<R, Result<B, E>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderT::new(move |environment| (original)(environment).map(&function))
    }

    /// Binds through the result under a shared environment.
    pub fn chain_result<B, F>(self, function: F) -> ReaderT<R, Result<B, E>>
    where
        F: Fn(A) -> ReaderT<R, Result<B, E>> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        ReaderT::new(move |environment: R| {
            (original)(environment.clone()).and_then(|value| function(value).run(environment))
        })
    }
}

// =============================================================================
// IO as the outer effect
// =============================================================================

impl<R, A> ReaderT<R, IO<A>>
where
    R: 'static,
    A: 'static,
{
    /// Lifts a value, ignoring the environment; the effect does
    /// nothing.
    pub fn pure_io(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| IO::pure(value.clone()))
    }

    /// Lifts a bare effect, ignoring the environment.
    pub fn lift_io(inner: IO<A>) -> Self {
        Self::new(move |_| inner.clone())
    }

    /// Projects a value out of the environment into an effect.
    pub fn ask_io<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
        A: Clone,
    {
        Self::new(move |environment| IO::pure(projection(&environment)))
    }

    /// Maps the inner value; the effect stays deferred.
    pub fn fmap_io<B, F>(self, function: F) -> ReaderT<R, IO<B>>
    where
        F: Fn(A) -> B + Clone + 'static,
        B: 'static,
    {
        let original = self.run_function;
        ReaderT::new(move |environment| (original)(environment).fmap(function.clone()))
    }

    /// Binds through the effect under a shared environment; nothing
    /// runs until the produced effect does.
    pub fn chain_io<B, F>(self, function: F) -> ReaderT<R, IO<B>>
    where
        F: Fn(A) -> ReaderT<R, IO<B>> + Clone + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        ReaderT::new(move |environment: R| {
            let function = function.clone();
            (original)(environment.clone())
                .chain(move |value| function(value).run(environment.clone()))
        })
    }
}

static_assertions::assert_not_impl_any!(ReaderT<i32, Option<i32>>: Send, Sync);
