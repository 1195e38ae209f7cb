//! A free-monad skeleton for building deferred computations.
//!
//! [`Free<A>`] describes a computation as data: either it is finished
//! ([`Free::done`]) or there is another step to take ([`Free::step`]).
//! Chaining attaches continuations by Kleisli composition without
//! running anything; the whole structure stays inert until [`run`](Free::run)
//! walks it with an iterative loop, so arbitrarily deep step
//! recursion cannot overflow the stack.
//!
//! # Examples
//!
//! ```rust
//! use currycomb::control::Free;
//!
//! fn countdown(n: u64) -> Free<u64> {
//!     if n == 0 {
//!         Free::done(0)
//!     } else {
//!         Free::step(move || countdown(n - 1))
//!     }
//! }
//!
//! // 100_000 nested steps, run without stack growth.
//! assert_eq!(countdown(100_000).run(), 0);
//! ```

use super::either::Either;

trait StepContinuation<A> {
    fn advance(self: Box<Self>) -> Free<A>;
}

/// An attached continuation, opaque to pattern matching.
#[doc(hidden)]
pub struct ContinuationBox<A>(Box<dyn StepContinuation<A>>);

impl<A> ContinuationBox<A> {
    fn new<T: StepContinuation<A> + 'static>(continuation: T) -> Self {
        Self(Box::new(continuation))
    }

    fn advance(self) -> Free<A> {
        self.0.advance()
    }
}

/// A deferred computation: finished, or one step from another
/// computation.
pub enum Free<A> {
    /// The computation is complete.
    Done(A),
    /// One deferred step producing the rest of the computation.
    Step(Box<dyn FnOnce() -> Free<A> + 'static>),
    #[doc(hidden)]
    Chained(ContinuationBox<A>),
}

impl<A> Free<A> {
    /// A finished computation.
    #[inline]
    pub fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// A computation with one deferred step. The thunk is not invoked
    /// until the computation is run.
    #[inline]
    pub fn step<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Free<A> + 'static,
    {
        Self::Step(Box::new(thunk))
    }

    /// Alias for [`done`](Free::done); the unit of the monad.
    #[inline]
    pub fn pure(value: A) -> Self {
        Self::done(value)
    }
}

impl<A: 'static> Free<A> {
    /// Runs the computation to completion with an iterative loop.
    pub fn run(self) -> A {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return value,
                Self::Step(thunk) => current = thunk(),
                Self::Chained(continuation) => current = continuation.advance(),
            }
        }
    }

    /// Advances until the next suspension, returning either the
    /// remaining step or the final value.
    pub fn resume(self) -> Either<Box<dyn FnOnce() -> Free<A> + 'static>, A> {
        let mut current = self;

        loop {
            match current {
                Self::Done(value) => return Either::Right(value),
                Self::Step(thunk) => return Either::Left(thunk),
                Self::Chained(continuation) => current = continuation.advance(),
            }
        }
    }

    /// Maps the final result, without running anything.
    pub fn map<B, F>(self, function: F) -> Free<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        self.chain(move |value| Free::done(function(value)))
    }

    /// Attaches a dependent continuation by Kleisli composition. The
    /// continuation is recorded, not invoked; nothing executes until
    /// [`run`](Free::run).
    pub fn chain<B, F>(self, function: F) -> Free<B>
    where
        F: FnOnce(A) -> Free<B> + 'static,
        B: 'static,
    {
        Free::Chained(ContinuationBox::new(ChainContinuation {
            computation: self,
            function,
        }))
    }

    /// Alias for [`chain`](Free::chain).
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Free<B>
    where
        F: FnOnce(A) -> Free<B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Sequences another computation, discarding this result.
    #[inline]
    pub fn then<B: 'static>(self, next: Free<B>) -> Free<B> {
        self.chain(move |_| next)
    }
}

struct ChainContinuation<A, B, F>
where
    F: FnOnce(A) -> Free<B>,
{
    computation: Free<A>,
    function: F,
}

impl<A: 'static, B: 'static, F> StepContinuation<B> for ChainContinuation<A, B, F>
where
    F: FnOnce(A) -> Free<B> + 'static,
{
    fn advance(self: Box<Self>) -> Free<B> {
        match self.computation {
            Free::Done(value) => (self.function)(value),
            Free::Step(thunk) => {
                let function = self.function;
                Free::step(move || thunk().chain(function))
            }
            Free::Chained(inner) => {
                // Reassociate: (m >>= f) >>= g steps as m >>= (\x -> f x >>= g)
                let function = self.function;
                inner.advance().chain(function)
            }
        }
    }
}

impl<A: std::fmt::Debug> std::fmt::Debug for Free<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Step(_) => formatter.debug_tuple("Step").field(&"<thunk>").finish(),
            Self::Chained(_) => formatter
                .debug_tuple("Chained")
                .field(&"<continuation>")
                .finish(),
        }
    }
}
