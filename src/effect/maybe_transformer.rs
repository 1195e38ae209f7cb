//! The `MaybeT` transformer - an optional value inside another effect.
//!
//! `MaybeT<M>` wraps a computation of shape `Outer<Option<A>>`. Its
//! operations bind through the outer layer first, then fold the inner
//! `Option`: an inner `None` short-circuits by re-lifting `None` into
//! the outer type, while an outer failure propagates untouched.
//!
//! The outer effect is fixed by the impl block (`Result` or [`IO`]),
//! so which monad the option is nested in is always known statically.
//!
//! ```rust
//! use currycomb::effect::MaybeT;
//!
//! fn lookup(key: &str) -> MaybeT<Result<Option<i32>, String>> {
//!     match key {
//!         "a" => MaybeT::pure_result(1),
//!         "missing" => MaybeT::nothing_result(),
//!         _ => MaybeT::new(Err(format!("storage error on {key}"))),
//!     }
//! }
//!
//! // An outer failure wins over the inner option.
//! let outcome = lookup("a").chain_result(|_| lookup("boom"));
//! assert_eq!(outcome.run(), Err("storage error on boom".to_string()));
//!
//! // An inner None short-circuits inside a healthy outer computation.
//! let missing = lookup("a").chain_result(|_| lookup("missing"));
//! assert_eq!(missing.run(), Ok(None));
//! ```

use super::io::IO;

/// A transformer stacking an optional value inside an outer effect.
pub struct MaybeT<M> {
    inner: M,
}

impl<M> MaybeT<M> {
    /// Wraps an already-nested computation.
    pub const fn new(inner: M) -> Self {
        Self { inner }
    }

    /// Unwraps to the nested computation.
    pub fn run(self) -> M {
        self.inner
    }
}

impl<M: Clone> Clone for MaybeT<M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

// =============================================================================
// Result as the outer effect
// =============================================================================

impl<A, E> MaybeT<Result<Option<A>, E>> {
    /// Lifts a present value into both layers.
    pub const fn pure_result(value: A) -> Self {
        Self::new(Ok(Some(value)))
    }

    /// The absent value inside a healthy outer computation.
    pub const fn nothing_result() -> Self {
        Self::new(Ok(None))
    }

    /// Lifts a bare outer computation, marking its value present.
    pub fn lift_result(outer: Result<A, E>) -> Self {
        Self::new(outer.map(Some))
    }

    /// Lifts a bare option into a healthy outer computation.
    pub const fn hoist_result(option: Option<A>) -> Self {
        Self::new(Ok(option))
    }

    /// Maps the innermost value through both layers.
    pub fn fmap_result<B, F>(self, function: F) -> MaybeT<Result<Option<B>, E>>
    where
        F: FnOnce(A) -> B,
    {
        MaybeT::new(self.inner.map(|option| option.map(function)))
    }

    /// Binds through both layers: outer errors propagate, an inner
    /// `None` is re-lifted, a present value continues into `function`.
    pub fn chain_result<B, F>(self, function: F) -> MaybeT<Result<Option<B>, E>>
    where
        F: FnOnce(A) -> MaybeT<Result<Option<B>, E>>,
    {
        match self.inner {
            Ok(Some(value)) => function(value),
            Ok(None) => MaybeT::new(Ok(None)),
            Err(error) => MaybeT::new(Err(error)),
        }
    }

    /// Replaces an inner `None` with the given error, collapsing to a
    /// plain outer computation.
    pub fn unwrap_or_throw(self, error: E) -> Result<A, E> {
        match self.inner {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Err(error),
            Err(outer_error) => Err(outer_error),
        }
    }
}

// =============================================================================
// IO as the outer effect
// =============================================================================

impl<A: 'static> MaybeT<IO<Option<A>>> {
    /// Lifts a present value into both layers.
    pub fn pure_io(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(IO::pure(Some(value)))
    }

    /// The absent value inside an effect that does nothing else.
    #[must_use]
    pub fn nothing_io() -> Self {
        Self::new(IO::new(|| None))
    }

    /// Lifts a bare effect, marking its value present.
    pub fn lift_io(outer: IO<A>) -> Self {
        Self::new(outer.fmap(Some))
    }

    /// Lifts a bare option into an effect that does nothing else.
    pub fn hoist_io(option: Option<A>) -> Self
    where
        A: Clone,
    {
        Self::new(IO::new(move || option.clone()))
    }

    /// Maps the innermost value; the effect stays deferred.
    pub fn fmap_io<B, F>(self, function: F) -> MaybeT<IO<Option<B>>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        MaybeT::new(self.inner.fmap(move |option| option.map(&function)))
    }

    /// Binds through both layers without running anything: the
    /// composed effect, once run, short-circuits on an inner `None`.
    pub fn chain_io<B, F>(self, function: F) -> MaybeT<IO<Option<B>>>
    where
        F: Fn(A) -> MaybeT<IO<Option<B>>> + 'static,
        B: 'static,
    {
        MaybeT::new(self.inner.chain(move |option| match option {
            Some(value) => function(value).run(),
            None => IO::new(|| None),
        }))
    }
}
