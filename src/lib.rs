//! # currycomb
//!
//! A functional programming toolkit for Rust built around two ideas:
//! curried functions and algebraic containers sharing a common
//! operation protocol.
//!
//! ## Overview
//!
//! - **Currying**: `curry2!`..`curry5!`, `partial!`, `compose!`, `pipe!`
//!   macros for partial application and composition
//! - **Type Classes**: Functor, Applicative, Monad, Alternative,
//!   Foldable, Traversable, Semigroup, Monoid, Bifunctor, Comonad
//! - **Containers**: `Either`, `Validation`, `Free`, and protocol
//!   impls for `Option`, `Result`, `Vec`, `Box`
//! - **Effects**: `IO`, `Reader`, `Writer`, `State`, and the
//!   transformers `MaybeT`, `ExceptT`, `ReaderT`, `StateT`, `WriterT`
//! - **Persistent Data**: immutable `PersistentList` and
//!   `PersistentSet` with structural sharing
//! - **Polymorphic Functions**: free functions (`map`, `chain`,
//!   `apply`, `reduce`, `concat`, ...) dispatching through the type
//!   class protocol, usable on containers and host types alike
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits (Functor, Monad, etc.)
//! - `curry`: currying and composition macros
//! - `control`: control containers (`Either`, `Validation`, `Free`)
//! - `effect`: effect types and monad transformers
//! - `persistent`: persistent data structures
//! - `serde`: serde support for the container types
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use currycomb::prelude::*;
//! use currycomb::curry3;
//!
//! let add3 = curry3!(|a: i32, b: i32, c: i32| a + b + c);
//! assert_eq!(add3(1)(2)(3), 6);
//!
//! let halve = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//! assert_eq!(Some(12).chain(halve), Some(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use currycomb::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "typeclass")]
    pub use crate::poly;

    #[cfg(feature = "curry")]
    pub use crate::curry::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "typeclass")]
pub mod poly;

#[cfg(feature = "curry")]
pub mod curry;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "persistent")]
pub mod persistent;
