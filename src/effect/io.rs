//! The IO type - deferred, re-runnable side effects.
//!
//! An [`IO<A>`] wraps a producer of `A` without invoking it. Mapping
//! and chaining build new producers closing over the old ones; nothing
//! executes until [`run`](IO::run), which calls the whole composed
//! pipeline synchronously, left to right, exactly once. Running is
//! repeatable: the producer is not memoized, so every `run` performs
//! the effects again.
//!
//! ```rust
//! use currycomb::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let invocations = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&invocations);
//!
//! let io = IO::new(move || {
//!     counter.set(counter.get() + 1);
//!     1
//! });
//!
//! assert_eq!(invocations.get(), 0); // nothing ran yet
//! assert_eq!(io.run(), 1);
//! assert_eq!(io.run(), 1);
//! assert_eq!(invocations.get(), 2); // once per run, no memoization
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

/// A deferred computation producing an `A`, with possible side
/// effects, executed only on [`run`](IO::run).
pub struct IO<A> {
    producer: Rc<dyn Fn() -> A>,
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<A: 'static> IO<A> {
    /// Wraps a producer without invoking it.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            producer: Rc::new(action),
        }
    }

    /// An effect-free computation yielding a fixed value.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Invokes the composed producer. Every call performs the effects
    /// again.
    pub fn run(&self) -> A {
        (self.producer)()
    }

    /// Maps the produced value; the effect itself is unchanged and
    /// still deferred.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let producer = self.producer;
        IO::new(move || function((producer)()))
    }

    /// Sequences a dependent effect: runs this producer, feeds the
    /// value to `function`, runs the produced effect.
    pub fn chain<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        let producer = self.producer;
        IO::new(move || function((producer)()).run())
    }

    /// Alias for [`chain`](IO::chain).
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.chain(function)
    }

    /// Sequences another effect, discarding this result.
    #[must_use]
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: 'static,
    {
        self.chain(move |_| next.clone())
    }

    /// Combines two effects with a binary function; both run, left
    /// first.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let left = self.producer;
        let right = other.producer;
        IO::new(move || function((left)(), (right)()))
    }

    /// Pairs two effects, running left first.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Converts a panic during `io`'s run into a value through
    /// `handler`. The recovery surface for turning boundary failures
    /// into domain values.
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: Fn(String) -> A + 'static,
    {
        IO::new(move || {
            match catch_unwind(AssertUnwindSafe(|| io.run())) {
                Ok(value) => value,
                Err(panic_info) => {
                    let message = panic_info.downcast_ref::<&str>().map_or_else(
                        || {
                            panic_info
                                .downcast_ref::<String>()
                                .cloned()
                                .unwrap_or_else(|| "unknown panic".to_string())
                        },
                        |s| (*s).to_string(),
                    );
                    handler(message)
                }
            }
        })
    }
}

impl IO<()> {
    /// Prints a line to stdout when run.
    pub fn print_line<S: std::fmt::Display + 'static>(message: S) -> Self {
        IO::new(move || {
            println!("{message}");
        })
    }
}

impl IO<std::io::Result<String>> {
    /// Reads a line from stdin when run.
    #[must_use]
    pub fn read_line() -> Self {
        IO::new(|| {
            let mut buffer = String::new();
            std::io::stdin().read_line(&mut buffer)?;
            Ok(buffer)
        })
    }
}

// Rc-backed producers pin IO to one thread.
static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn pure_yields_value() {
        assert_eq!(IO::pure(42).run(), 42);
    }

    #[test]
    fn new_defers_until_run() {
        let executed = Rc::new(Cell::new(false));
        let tracked = Rc::clone(&executed);
        let io = IO::new(move || {
            tracked.set(true);
            1
        });
        assert!(!executed.get());
        assert_eq!(io.run(), 1);
        assert!(executed.get());
    }

    #[test]
    fn run_repeats_effects() {
        let count = Rc::new(Cell::new(0));
        let tracked = Rc::clone(&count);
        let io = IO::new(move || {
            tracked.set(tracked.get() + 1);
            tracked.get()
        });
        assert_eq!(io.run(), 1);
        assert_eq!(io.run(), 2);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn fmap_stays_deferred() {
        let executed = Rc::new(Cell::new(false));
        let tracked = Rc::clone(&executed);
        let io = IO::new(move || {
            tracked.set(true);
            21
        })
        .fmap(|n| n * 2);
        assert!(!executed.get());
        assert_eq!(io.run(), 42);
    }

    #[test]
    fn chain_sequences_left_to_right() {
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));
        let first_log = Rc::clone(&order);
        let second_log = Rc::clone(&order);

        let io = IO::new(move || {
            first_log.borrow_mut().push("first");
            10
        })
        .chain(move |n| {
            let log = Rc::clone(&second_log);
            IO::new(move || {
                log.borrow_mut().push("second");
                n * 2
            })
        });

        assert_eq!(io.run(), 20);
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn then_discards_first_result() {
        assert_eq!(IO::pure(1).then(IO::pure("next")).run(), "next");
    }

    #[test]
    fn map2_and_product() {
        assert_eq!(IO::pure(10).map2(IO::pure(20), |a, b| a + b).run(), 30);
        assert_eq!(IO::pure(1).product(IO::pure("x")).run(), (1, "x"));
    }

    #[test]
    fn catch_recovers_from_panic() {
        let panicking: IO<i32> = IO::new(|| panic!("boom"));
        let recovered = IO::catch(panicking, |message| {
            assert!(message.contains("boom"));
            -1
        });
        assert_eq!(recovered.run(), -1);
    }

    #[test]
    fn monad_laws_hold_under_run() {
        let f = |n: i32| IO::pure(n + 1);
        let g = |n: i32| IO::pure(n * 2);

        assert_eq!(IO::pure(5).chain(f).run(), f(5).run());
        assert_eq!(IO::pure(5).chain(IO::pure).run(), IO::pure(5).run());
        assert_eq!(
            IO::pure(5).chain(f).chain(g).run(),
            IO::pure(5).chain(move |x| f(x).chain(g)).run()
        );
    }
}
