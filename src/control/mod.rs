//! Control containers for functional programming.
//!
//! - [`Either`]: a disjoint union of two values, right-biased for the
//!   operation protocol
//! - [`Validation`]: like `Either`, but independent combination
//!   accumulates every error instead of stopping at the first
//! - [`Free`]: a deferred computation built from `done`/`step`, run
//!   stack-safely
//!
//! # Examples
//!
//! ## Accumulating validation
//!
//! ```rust
//! use currycomb::control::Validation;
//! use currycomb::typeclass::Semigroup;
//!
//! let left: Validation<Vec<&str>, i32> = Validation::Invalid(vec!["a"]);
//! let right: Validation<Vec<&str>, i32> = Validation::Invalid(vec!["b"]);
//! assert_eq!(left.combine(right), Validation::Invalid(vec!["a", "b"]));
//! ```
//!
//! ## Stack-safe recursion
//!
//! ```rust
//! use currycomb::control::Free;
//!
//! fn sum_to(n: u64, accumulated: u64) -> Free<u64> {
//!     if n == 0 {
//!         Free::done(accumulated)
//!     } else {
//!         Free::step(move || sum_to(n - 1, accumulated + n))
//!     }
//! }
//!
//! assert_eq!(sum_to(100, 0).run(), 5050);
//! ```

mod either;
mod free;
mod validation;

pub use either::{Either, left, right};
pub use free::Free;
pub use validation::{ValidateAll, Validation, invalid, valid, validate_all};
