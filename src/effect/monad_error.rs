//! MTL-style error handling - throwing and catching inside a monad.
//!
//! [`MonadError`] abstracts "this monad can represent failure of type
//! `E` and recover from it". It is the boundary where fatal host
//! failures are converted into the domain errors the containers are
//! built to carry.

use crate::control::{Either, Validation};
use crate::typeclass::Semigroup;

/// A monad that can throw an error of type `E` and recover from it.
pub trait MonadError<E>: Sized {
    /// The failing computation carrying `error`.
    fn throw_error(error: E) -> Self;

    /// Recovers from failure: a failing `computation` is replaced by
    /// the handler's result, a succeeding one passes through.
    fn catch_error<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self;
}

impl<A> MonadError<()> for Option<A> {
    #[inline]
    fn throw_error((): ()) -> Self {
        None
    }

    #[inline]
    fn catch_error<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(()) -> Self,
    {
        match computation {
            Some(value) => Some(value),
            None => handler(()),
        }
    }
}

impl<T, E> MonadError<E> for Result<T, E> {
    #[inline]
    fn throw_error(error: E) -> Self {
        Err(error)
    }

    #[inline]
    fn catch_error<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match computation {
            Ok(value) => Ok(value),
            Err(error) => handler(error),
        }
    }
}

impl<L, R> MonadError<L> for Either<L, R> {
    #[inline]
    fn throw_error(error: L) -> Self {
        Self::Left(error)
    }

    #[inline]
    fn catch_error<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(L) -> Self,
    {
        match computation {
            Self::Right(value) => Self::Right(value),
            Self::Left(error) => handler(error),
        }
    }
}

impl<E: Semigroup, A> MonadError<E> for Validation<E, A> {
    #[inline]
    fn throw_error(error: E) -> Self {
        Self::Invalid(error)
    }

    #[inline]
    fn catch_error<F>(computation: Self, handler: F) -> Self
    where
        F: FnOnce(E) -> Self,
    {
        match computation {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => handler(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_throw_and_catch() {
        let thrown: Option<i32> = MonadError::throw_error(());
        assert_eq!(thrown, None);
        assert_eq!(Option::catch_error(thrown, |()| Some(5)), Some(5));
        assert_eq!(Option::catch_error(Some(1), |()| Some(5)), Some(1));
    }

    #[test]
    fn result_throw_and_catch() {
        let thrown: Result<i32, String> = MonadError::throw_error("e".to_string());
        assert_eq!(thrown, Err("e".to_string()));
        let recovered = Result::catch_error(thrown, |error| Ok(error.len() as i32));
        assert_eq!(recovered, Ok(1));
    }

    #[test]
    fn either_throw_and_catch() {
        let thrown: Either<String, i32> = MonadError::throw_error("e".to_string());
        assert_eq!(thrown, Either::Left("e".to_string()));
        let recovered = Either::catch_error(thrown, |_| Either::Right(0));
        assert_eq!(recovered, Either::Right(0));
    }

    #[test]
    fn validation_throw_and_catch() {
        let thrown: Validation<Vec<String>, i32> =
            MonadError::throw_error(vec!["bad".to_string()]);
        assert_eq!(thrown, Validation::Invalid(vec!["bad".to_string()]));
        let recovered = Validation::catch_error(thrown, |errors| {
            Validation::Valid(errors.len() as i32)
        });
        assert_eq!(recovered, Validation::Valid(1));
    }
}
