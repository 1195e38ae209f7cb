//! The `WriterT` transformer - log accumulation inside another effect.
//!
//! `WriterT<W, M>` wraps a computation of shape `Outer<(A, W)>`: a
//! result paired with monoidal output, nested in an outer effect. The
//! output of chained steps combines through `W`'s
//! [`Semigroup`](crate::typeclass::Semigroup); a failing outer step
//! discards nothing that was already combined; the failure itself is
//! the result.
//!
//! ```rust
//! use currycomb::effect::WriterT;
//!
//! type Logged = WriterT<Vec<String>, Option<(i32, Vec<String>)>>;
//!
//! let computation = WriterT::<Vec<String>, Option<((), Vec<String>)>>::tell_option(vec!["start".to_string()])
//!     .chain_option(|()| Logged::new(Some((21, vec!["doubling".to_string()]))))
//!     .fmap_option(|n| n * 2);
//!
//! assert_eq!(
//!     computation.run(),
//!     Some((42, vec!["start".to_string(), "doubling".to_string()]))
//! );
//! ```

use crate::typeclass::Monoid;

use super::io::IO;

/// A transformer stacking log accumulation inside an outer effect.
pub struct WriterT<W, M>
where
    W: Monoid + 'static,
{
    inner: M,
    _marker: std::marker::PhantomData<W>,
}

impl<W, M> WriterT<W, M>
where
    W: Monoid + 'static,
{
    /// Wraps an already-nested computation.
    pub const fn new(inner: M) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }

    /// Unwraps to the nested computation.
    pub fn run(self) -> M {
        self.inner
    }
}

impl<W, M: Clone> Clone for WriterT<W, M>
where
    W: Monoid + 'static,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: std::marker::PhantomData,
        }
    }
}

// =============================================================================
// Option as the outer effect
// =============================================================================

impl<W, A> WriterT<W, Option<(A, W)>>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// Lifts a value with no output.
    pub fn pure_option(value: A) -> Self {
        Self::new(Some((value, W::empty())))
    }

    /// Lifts a bare optional value with no output.
    pub fn lift_option(inner: Option<A>) -> Self {
        Self::new(inner.map(|value| (value, W::empty())))
    }

    /// Maps the produced value, leaving the output alone.
    pub fn fmap_option<B, F>(self, function: F) -> WriterT<W, Option<(B, W)>>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        WriterT::new(self.inner.map(|(value, output)| (function(value), output)))
    }

    /// Binds through the option, combining outputs in order.
    pub fn chain_option<B, F>(self, function: F) -> WriterT<W, Option<(B, W)>>
    where
        F: FnOnce(A) -> WriterT<W, Option<(B, W)>>,
        B: 'static,
    {
        WriterT::new(self.inner.and_then(|(value, output)| {
            function(value)
                .inner
                .map(|(next_value, next_output)| (next_value, output.combine(next_output)))
        }))
    }

    /// Exposes the accumulated output alongside the result.
    pub fn listen_option(self) -> WriterT<W, Option<((A, W), W)>>
    where
        W: Clone,
    {
        WriterT::new(
            self.inner
                .map(|(value, output)| ((value, output.clone()), output)),
        )
    }
}

impl<W> WriterT<W, Option<((), W)>>
where
    W: Monoid + 'static,
{
    /// A computation that only writes output.
    pub fn tell_option(output: W) -> Self {
        Self::new(Some(((), output)))
    }
}

// =============================================================================
// Result as the outer effect
// =============================================================================

impl<W, A, E> WriterT<W, Result<(A, W), E>>
where
    W: Monoid + 'static,
    A: 'static,
    E: 'static,
{
    /// Lifts a value with no output.
    pub fn pure_result(value: A) -> Self {
        Self::new(Ok((value, W::empty())))
    }

    /// Lifts a bare fallible value with no output.
    pub fn lift_result(inner: Result<A, E>) -> Self {
        Self::new(inner.map(|value| (value, W::empty())))
    }

    /// Maps the produced value, leaving the output alone.
    pub fn fmap_result<B, F>(self, function: F) -> WriterT<W, Result<(B, W), E>>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        WriterT::new(self.inner.map(|(value, output)| (function(value), output)))
    }

    /// Binds through the result, combining outputs in order; an error
    /// stops the chain.
    pub fn chain_result<B, F>(self, function: F) -> WriterT<W, Result<(B, W), E>>
    where
        F: FnOnce(A) -> WriterT<W, Result<(B, W), E>>,
        B: 'static,
    {
        WriterT::new(self.inner.and_then(|(value, output)| {
            function(value)
                .inner
                .map(|(next_value, next_output)| (next_value, output.combine(next_output)))
        }))
    }

    /// Exposes the accumulated output alongside the result.
    pub fn listen_result(self) -> WriterT<W, Result<((A, W), W), E>>
    where
        W: Clone,
    {
        WriterT::new(
            self.inner
                .map(|(value, output)| ((value, output.clone()), output)),
        )
    }
}

impl<W, E> WriterT<W, Result<((), W), E>>
where
    W: Monoid + 'static,
    E: 'static,
{
    /// A computation that only writes output.
    pub fn tell_result(output: W) -> Self {
        Self::new(Ok(((), output)))
    }
}

// =============================================================================
// IO as the outer effect
// =============================================================================

impl<W, A> WriterT<W, IO<(A, W)>>
where
    W: Monoid + Clone + 'static,
    A: 'static,
{
    /// Lifts a value with no output; the effect does nothing.
    pub fn pure_io(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(IO::new(move || (value.clone(), W::empty())))
    }

    /// Lifts a bare effect with no output.
    pub fn lift_io(inner: IO<A>) -> Self {
        Self::new(inner.fmap(|value| (value, W::empty())))
    }

    /// Maps the produced value; the effect stays deferred.
    pub fn fmap_io<B, F>(self, function: F) -> WriterT<W, IO<(B, W)>>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        WriterT::new(
            self.inner
                .fmap(move |(value, output)| (function(value), output)),
        )
    }

    /// Binds through the effect, combining outputs in order, without
    /// running anything.
    pub fn chain_io<B, F>(self, function: F) -> WriterT<W, IO<(B, W)>>
    where
        F: Fn(A) -> WriterT<W, IO<(B, W)>> + 'static,
        B: 'static,
    {
        WriterT::new(self.inner.chain(move |(value, output)| {
            function(value)
                .inner
                .fmap(move |(next_value, next_output)| {
                    (next_value, output.clone().combine(next_output))
                })
        }))
    }

    /// Exposes the accumulated output alongside the result.
    pub fn listen_io(self) -> WriterT<W, IO<((A, W), W)>> {
        WriterT::new(
            self.inner
                .fmap(|(value, output)| ((value, output.clone()), output)),
        )
    }
}

impl<W> WriterT<W, IO<((), W)>>
where
    W: Monoid + Clone + 'static,
{
    /// A computation that only writes output.
    pub fn tell_io(output: W) -> Self {
        Self::new(IO::new(move || ((), output.clone())))
    }
}
