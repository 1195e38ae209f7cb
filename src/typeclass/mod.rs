//! Type class traits for functional programming abstractions.
//!
//! This module defines the operation protocol every container in the
//! crate speaks:
//!
//! - [`Functor`] / [`FunctorMut`]: mapping over contained values
//! - [`Applicative`]: lifting values and combining independent
//!   computations (`pure`, `map2`, `ap`)
//! - [`Monad`]: sequencing dependent computations (`chain`)
//! - [`Alternative`]: failure and choice (`zero`, `alt`, `guard`)
//! - [`Foldable`]: collapsing to summary values
//! - [`Traversable`]: traversing with effects (`traverse_option`,
//!   `traverse_result`, `sequence_option`, `sequence_result`)
//! - [`Semigroup`] / [`Monoid`]: associative combination, with and
//!   without an identity element
//! - [`Bifunctor`]: mapping both slots of a two-slot type
//! - [`Comonad`]: extraction and context-aware extension
//!
//! ## Higher-kinded types
//!
//! Rust cannot abstract over type constructors directly, so the traits
//! build on [`TypeConstructor`], which emulates higher-kinded types
//! through a generic associated type.
//!
//! ## The trait boundary as operation allow-list
//!
//! A container exposes exactly the operations of the traits it
//! implements; there is no runtime dispatch or per-instance
//! configuration. Invoking an operation a type does not support fails
//! to compile rather than yielding "no result".
//!
//! # Examples
//!
//! ```rust
//! use currycomb::typeclass::{Applicative, Monad, Semigroup};
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//!
//! let chained = Some(3).chain(|n| if n > 0 { Some(n * 10) } else { None });
//! assert_eq!(chained, Some(30));
//!
//! assert_eq!(vec![1].combine(vec![2, 3]), vec![1, 2, 3]);
//! ```

mod alternative;
mod applicative;
mod bifunctor;
mod comonad;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;
mod traversable;
mod wrappers;

pub use alternative::{Alternative, AlternativeVec};
pub use applicative::{Applicative, ApplicativeVec};
pub use bifunctor::Bifunctor;
pub use comonad::Comonad;
pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{Product, Sum};
