//! The Writer type - computations accumulating a log.
//!
//! A [`Writer<W, A>`] pairs a result with accumulated output `W`,
//! where `W` is any [`Monoid`]: chained steps combine their outputs
//! through `W`'s own `combine`, so the log grows monoidally and
//! `pure` contributes nothing (`W::empty()`).
//!
//! ```rust
//! use currycomb::effect::Writer;
//!
//! fn halve(n: i32) -> Writer<Vec<String>, i32> {
//!     Writer::new(n / 2, vec![format!("halved {n}")])
//! }
//!
//! let computation = Writer::pure(40).chain(halve).chain(halve);
//! let (result, log) = computation.run();
//! assert_eq!(result, 10);
//! assert_eq!(log, vec!["halved 40".to_string(), "halved 20".to_string()]);
//! ```

use crate::typeclass::Monoid;

/// A computation result paired with monoidally accumulated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    result: A,
    output: W,
}

impl<W, A> Writer<W, A>
where
    W: Monoid + 'static,
    A: 'static,
{
    /// Pairs a result with output.
    pub fn new(result: A, output: W) -> Self {
        Self { result, output }
    }

    /// Returns the result and accumulated output.
    pub fn run(&self) -> (A, W)
    where
        A: Clone,
        W: Clone,
    {
        (self.result.clone(), self.output.clone())
    }

    /// Returns only the result.
    pub fn eval(&self) -> A
    where
        A: Clone,
    {
        self.result.clone()
    }

    /// Returns only the accumulated output.
    pub fn exec(&self) -> W
    where
        W: Clone,
    {
        self.output.clone()
    }

    /// A computation with a result and no output.
    pub fn pure(value: A) -> Self {
        Self {
            result: value,
            output: W::empty(),
        }
    }

    /// Maps the result; the output is untouched.
    pub fn fmap<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
        B: 'static,
    {
        Writer {
            result: function(self.result),
            output: self.output,
        }
    }

    /// Sequences a dependent computation, combining both outputs.
    pub fn chain<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        B: 'static,
    {
        let next = function(self.result);
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }

    /// Alias for [`chain`](Writer::chain).
    pub fn and_then<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        B: 'static,
    {
        self.chain(function)
    }

    /// Sequences another computation, discarding this result but
    /// keeping both outputs.
    #[must_use]
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B>
    where
        B: 'static,
    {
        Writer {
            result: next.result,
            output: self.output.combine(next.output),
        }
    }

    /// Combines two computations' results and outputs.
    pub fn map2<B, C, F>(self, other: Writer<W, B>, function: F) -> Writer<W, C>
    where
        F: FnOnce(A, B) -> C,
        B: 'static,
        C: 'static,
    {
        Writer {
            result: function(self.result, other.result),
            output: self.output.combine(other.output),
        }
    }

    /// Exposes the accumulated output alongside the result.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        Writer {
            output: self.output.clone(),
            result: (self.result, self.output),
        }
    }

    /// Rewrites the accumulated output.
    pub fn censor<F>(self, function: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Self {
            result: self.result,
            output: function(self.output),
        }
    }

    /// Extracts the result, dropping the output.
    pub fn extract(self) -> A {
        self.result
    }

    /// Maps a function over the whole computation, keeping the output.
    pub fn extend<B, F>(self, function: F) -> Writer<W, B>
    where
        W: Clone,
        F: FnOnce(Self) -> B,
        B: 'static,
    {
        let output = self.output.clone();
        Writer {
            result: function(self),
            output,
        }
    }
}

impl<W> Writer<W, ()>
where
    W: Monoid + 'static,
{
    /// A computation that only writes output.
    pub fn tell(output: W) -> Self {
        Self { result: (), output }
    }
}

impl<W, A, F> Writer<W, (A, F)>
where
    W: Monoid + 'static,
    A: 'static,
    F: FnOnce(W) -> W + 'static,
{
    /// Applies the function carried in the result to the output.
    pub fn pass(self) -> Writer<W, A> {
        let (result, rewrite) = self.result;
        Writer {
            result,
            output: rewrite(self.output),
        }
    }
}
