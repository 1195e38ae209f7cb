//! Currying, partial application, and function composition.
//!
//! This module is the crate's calling-convention layer: it turns
//! ordinary multi-argument functions into values that can be applied
//! one argument at a time, or with any subset of arguments fixed.
//!
//! - [`curry2!`](crate::curry2) .. [`curry5!`](crate::curry5): nested
//!   single-argument closures
//! - [`partial!`](crate::partial): fix any subset of arguments with
//!   `__` placeholders
//! - [`compose!`](crate::compose): right-to-left composition
//! - [`pipe!`](crate::pipe): left-to-right value threading
//! - [`identity`], [`constant`], [`flip`]: function utilities
//!
//! ## Grouping invariance
//!
//! However arguments are split across applications, the result is the
//! same once all of them have arrived:
//!
//! ```
//! use currycomb::{curry3, partial};
//!
//! fn add3(a: i32, b: i32, c: i32) -> i32 { a + b + c }
//!
//! assert_eq!(curry3!(add3)(1)(2)(3), 6);
//! assert_eq!(partial!(add3, 1, 2, __)(3), 6);
//! assert_eq!(partial!(add3, 1, __, __)(2, 3), 6);
//! assert_eq!(add3(1, 2, 3), 6);
//! ```
//!
//! A partially-applied value is inert until called: building
//! `curry3!(add3)(1)` commits to nothing and can be reused any number
//! of times.

mod compose_macro;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use utils::{Placeholder, __, constant, flip, identity};

// The macros are exported at the crate root via #[macro_export].
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::curry5;
pub use crate::partial;
pub use crate::pipe;
