//! The `ExceptT` transformer - a recoverable error inside another
//! effect.
//!
//! `ExceptT<E, M>` wraps a computation of shape `Outer<Result<A, E>>`.
//! The inner `Result` carries the *domain* error `E`, which can be
//! thrown and caught without disturbing the outer effect; the outer
//! layer keeps its own failure semantics and always wins when it
//! fails.
//!
//! ```rust
//! use currycomb::effect::ExceptT;
//!
//! type Lookup = ExceptT<String, Option<Result<i32, String>>>;
//!
//! let recovered = Lookup::catch_option(
//!     Lookup::throw_option("not found".to_string()),
//!     |error| ExceptT::pure_option(error.len() as i32),
//! );
//! assert_eq!(recovered.run(), Some(Ok(9)));
//! ```

use std::marker::PhantomData;

use super::io::IO;

/// A transformer stacking a throwable error inside an outer effect.
pub struct ExceptT<E, M>
where
    E: 'static,
{
    inner: M,
    _marker: PhantomData<E>,
}

impl<E, M> ExceptT<E, M>
where
    E: 'static,
{
    /// Wraps an already-nested computation.
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }

    /// Unwraps to the nested computation.
    pub fn run(self) -> M {
        self.inner
    }
}

impl<E, M: Clone> Clone for ExceptT<E, M>
where
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

// =============================================================================
// Option as the outer effect
// =============================================================================

impl<E, A> ExceptT<E, Option<Result<A, E>>> {
    /// Lifts a success into both layers.
    pub const fn pure_option(value: A) -> Self {
        Self::new(Some(Ok(value)))
    }

    /// Throws a domain error inside a present outer computation.
    pub const fn throw_option(error: E) -> Self {
        Self::new(Some(Err(error)))
    }

    /// Lifts a bare outer computation, marking its value successful.
    pub fn lift_option(outer: Option<A>) -> Self {
        Self::new(outer.map(Ok))
    }

    /// Maps the innermost value.
    pub fn fmap_option<B, F>(self, function: F) -> ExceptT<E, Option<Result<B, E>>>
    where
        F: FnOnce(A) -> B,
    {
        ExceptT::new(self.inner.map(|result| result.map(function)))
    }

    /// Binds through both layers: an outer `None` and an inner `Err`
    /// both short-circuit, each in its own layer.
    pub fn chain_option<B, F>(self, function: F) -> ExceptT<E, Option<Result<B, E>>>
    where
        F: FnOnce(A) -> ExceptT<E, Option<Result<B, E>>>,
    {
        match self.inner {
            Some(Ok(value)) => function(value),
            Some(Err(error)) => ExceptT::new(Some(Err(error))),
            None => ExceptT::new(None),
        }
    }

    /// Recovers from a thrown domain error; outer absence is not
    /// recoverable here.
    pub fn catch_option<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match computation.inner {
            Some(Ok(value)) => Self::new(Some(Ok(value))),
            Some(Err(error)) => handler(error),
            None => Self::new(None),
        }
    }
}

// =============================================================================
// Result as the outer effect (distinct outer and domain error types)
// =============================================================================

impl<E, A, E2> ExceptT<E, Result<Result<A, E>, E2>> {
    /// Lifts a success into both layers.
    pub const fn pure_result(value: A) -> Self {
        Self::new(Ok(Ok(value)))
    }

    /// Throws a domain error inside a healthy outer computation.
    pub const fn throw_result(error: E) -> Self {
        Self::new(Ok(Err(error)))
    }

    /// Lifts a bare outer computation, marking its value successful.
    pub fn lift_result(outer: Result<A, E2>) -> Self {
        Self::new(outer.map(Ok))
    }

    /// Maps the innermost value.
    pub fn fmap_result<B, F>(self, function: F) -> ExceptT<E, Result<Result<B, E>, E2>>
    where
        F: FnOnce(A) -> B,
    {
        ExceptT::new(self.inner.map(|result| result.map(function)))
    }

    /// Binds through both layers; the outer error always wins.
    pub fn chain_result<B, F>(self, function: F) -> ExceptT<E, Result<Result<B, E>, E2>>
    where
        F: FnOnce(A) -> ExceptT<E, Result<Result<B, E>, E2>>,
    {
        match self.inner {
            Ok(Ok(value)) => function(value),
            Ok(Err(error)) => ExceptT::new(Ok(Err(error))),
            Err(outer_error) => ExceptT::new(Err(outer_error)),
        }
    }

    /// Recovers from a thrown domain error; an outer failure passes
    /// through the handler untouched.
    pub fn catch_result<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match computation.inner {
            Ok(Ok(value)) => Self::new(Ok(Ok(value))),
            Ok(Err(error)) => handler(error),
            Err(outer_error) => Self::new(Err(outer_error)),
        }
    }
}

// =============================================================================
// IO as the outer effect
// =============================================================================

impl<E: Clone + 'static, A: 'static> ExceptT<E, IO<Result<A, E>>> {
    /// Lifts a success into both layers.
    pub fn pure_io(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(IO::pure(Ok(value)))
    }

    /// Throws a domain error inside an effect that does nothing else.
    pub fn throw_io(error: E) -> Self {
        Self::new(IO::new(move || Err(error.clone())))
    }

    /// Lifts a bare effect, marking its value successful.
    pub fn lift_io(outer: IO<A>) -> Self {
        Self::new(outer.fmap(Ok))
    }

    /// Maps the innermost value; the effect stays deferred.
    pub fn fmap_io<B, F>(self, function: F) -> ExceptT<E, IO<Result<B, E>>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        ExceptT::new(self.inner.fmap(move |result| result.map(&function)))
    }

    /// Binds through both layers without running anything.
    pub fn chain_io<B, F>(self, function: F) -> ExceptT<E, IO<Result<B, E>>>
    where
        F: Fn(A) -> ExceptT<E, IO<Result<B, E>>> + 'static,
        B: 'static,
    {
        ExceptT::new(self.inner.chain(move |result| match result {
            Ok(value) => function(value).run(),
            Err(error) => IO::new(move || Err(error.clone())),
        }))
    }

    /// Recovers from a thrown domain error once the effect runs.
    pub fn catch_io<F>(computation: Self, handler: F) -> Self
    where
        A: Clone,
        F: Fn(E) -> Self + 'static,
    {
        Self::new(computation.inner.chain(move |result| match result {
            Ok(value) => IO::pure(Ok(value)),
            Err(error) => handler(error).run(),
        }))
    }
}
