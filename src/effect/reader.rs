//! The Reader type - computations reading from a shared environment.
//!
//! A [`Reader<R, A>`] wraps a function from an environment `R` to a
//! result `A`. Composition threads the same environment through every
//! step implicitly; it is supplied once, at [`run`](Reader::run).
//!
//! ```rust
//! use currycomb::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config { base_url: String, retries: u32 }
//!
//! let describe = Reader::<Config, _>::asks(|config: &Config| config.base_url.clone())
//!     .chain(|url| Reader::asks(move |config: &Config| {
//!         format!("{url} (retries: {})", config.retries)
//!     }));
//!
//! let config = Config { base_url: "http://localhost".to_string(), retries: 3 };
//! assert_eq!(describe.run(config), "http://localhost (retries: 3)");
//! ```

use std::rc::Rc;

/// A computation that produces an `A` once given an environment `R`.
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Wraps an environment-consuming function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Supplies the environment and produces the result.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Ignores the environment and produces a fixed value.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Maps the produced value.
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original = self.run_function;
        Reader::new(move |environment| function((original)(environment)))
    }

    /// Sequences a dependent computation under the same environment.
    pub fn chain<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original = self.run_function;
        Reader::new(move |environment: R| {
            let value = (original)(environment.clone());
            function(value).run(environment)
        })
    }

    /// Alias for [`chain`](Reader::chain).
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.chain(function)
    }

    /// Sequences another computation, discarding this result.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.chain(move |_| next.clone())
    }

    /// Combines two computations under the same environment.
    pub fn map2<B, C, F>(self, other: Reader<R, B>, function: F) -> Reader<R, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
        R: Clone,
    {
        let left = self.run_function;
        let right = other.run_function;
        Reader::new(move |environment: R| {
            let a = (left)(environment.clone());
            let b = (right)(environment);
            function(a, b)
        })
    }

    /// Runs the computation under a locally modified environment.
    pub fn local<F>(self, modifier: F) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let original = self.run_function;
        Self::new(move |environment| (original)(modifier(environment)))
    }

    /// Projects a value out of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(&R) -> A + 'static,
    {
        Self::new(move |environment| projection(&environment))
    }
}

impl<R: Clone + 'static> Reader<R, R> {
    /// Returns the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

static_assertions::assert_not_impl_any!(Reader<i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Config {
        verbose: bool,
        level: u32,
    }

    fn sample() -> Config {
        Config {
            verbose: true,
            level: 3,
        }
    }

    #[test]
    fn run_supplies_environment() {
        let reader = Reader::new(|n: i32| n * 2);
        assert_eq!(reader.run(21), 42);
    }

    #[test]
    fn pure_ignores_environment() {
        let reader: Reader<i32, &str> = Reader::pure("fixed");
        assert_eq!(reader.run(1), "fixed");
        assert_eq!(reader.run(99), "fixed");
    }

    #[test]
    fn ask_returns_environment() {
        assert_eq!(Reader::<i32, i32>::ask().run(7), 7);
    }

    #[test]
    fn asks_projects_environment() {
        let level = Reader::<Config, u32>::asks(|config| config.level);
        assert_eq!(level.run(sample()), 3);
    }

    #[test]
    fn fmap_transforms_result() {
        let reader = Reader::<i32, i32>::ask().fmap(|n| n + 1);
        assert_eq!(reader.run(41), 42);
    }

    #[test]
    fn chain_threads_environment_through_both_steps() {
        let reader = Reader::<Config, bool>::asks(|config| config.verbose)
            .chain(|verbose| {
                Reader::asks(move |config: &Config| {
                    if verbose { config.level * 10 } else { config.level }
                })
            });
        assert_eq!(reader.run(sample()), 30);
    }

    #[test]
    fn map2_shares_environment() {
        let combined = Reader::<i32, i32>::ask().map2(
            Reader::new(|n: i32| n * 10),
            |a, b| a + b,
        );
        assert_eq!(combined.run(2), 22);
    }

    #[test]
    fn local_modifies_environment_for_inner_computation() {
        let doubled_env = Reader::<i32, i32>::ask().local(|n| n * 2);
        assert_eq!(doubled_env.run(21), 42);
    }

    #[test]
    fn reader_is_reusable() {
        let reader = Reader::<i32, i32>::ask().fmap(|n| n + 1);
        assert_eq!(reader.run(1), 2);
        assert_eq!(reader.run(2), 3);
    }

    #[test]
    fn monad_laws_hold_under_run() {
        let f = |n: i32| Reader::<i32, i32>::new(move |env| env + n);
        let g = |n: i32| Reader::<i32, i32>::new(move |env| env * n);

        assert_eq!(Reader::pure(5).chain(f).run(3), f(5).run(3));
        assert_eq!(
            Reader::<i32, i32>::ask().chain(Reader::pure).run(3),
            Reader::<i32, i32>::ask().run(3)
        );
        assert_eq!(
            Reader::<i32, i32>::ask().chain(f).chain(g).run(3),
            Reader::<i32, i32>::ask()
                .chain(move |x| f(x).chain(g))
                .run(3)
        );
    }
}
