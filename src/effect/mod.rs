//! Effect types and monad transformers.
//!
//! The base effects wrap producers and defer everything until an
//! explicit run:
//!
//! - [`IO`]: deferred, re-runnable side effects
//! - [`Reader`]: computations reading a shared environment
//! - [`Writer`]: computations accumulating monoidal output
//! - [`State`]: computations threading simulated mutable state
//!
//! The transformers nest one effect's shape inside another, re-deriving
//! map/chain by explicit two-level unwrapping. The outer effect is
//! fixed per impl block (`Option`, `Result`, or [`IO`]), so the nested
//! type is always fully known:
//!
//! - [`MaybeT`]: `Outer<Option<A>>`
//! - [`ExceptT`]: `Outer<Result<A, E>>`
//! - [`ReaderT`]: `R -> Outer<A>`
//! - [`StateT`]: `S -> Outer<(A, S)>`
//! - [`WriterT`]: `Outer<(A, W)>`
//!
//! [`MonadError`] rounds this out with uniform `throw_error` /
//! `catch_error` over the failure-carrying containers.
//!
//! # Examples
//!
//! ```rust
//! use currycomb::effect::IO;
//!
//! let io = IO::pure(10).fmap(|x| x * 2).chain(|x| IO::pure(x + 1));
//! assert_eq!(io.run(), 21);
//! ```

mod except_transformer;
mod io;
mod maybe_transformer;
mod monad_error;
mod reader;
mod reader_transformer;
mod state;
mod state_transformer;
mod writer;
mod writer_transformer;

pub use except_transformer::ExceptT;
pub use io::IO;
pub use maybe_transformer::MaybeT;
pub use monad_error::MonadError;
pub use reader::Reader;
pub use reader_transformer::ReaderT;
pub use state::State;
pub use state_transformer::StateT;
pub use writer::Writer;
pub use writer_transformer::WriterT;
