//! Higher-kinded type emulation through Generic Associated Types.
//!
//! Rust has no native notion of a type constructor as a first-class
//! entity: there is no way to write a trait abstracting over `Option<_>`
//! and `Vec<_>` directly. The [`TypeConstructor`] trait works around
//! this with a GAT that rebuilds "the same shape at a different element
//! type", which is all the protocol traits (Functor, Applicative,
//! Monad, ...) need.

/// A trait representing a type constructor applied to an element type.
///
/// For an implementor such as `Option<A>`, `Inner` is `A` and
/// `WithType<B>` is `Option<B>`. Protocol traits use `WithType` to
/// express "the same container, holding something else".
///
/// # Laws
///
/// `WithType<Inner>` must be the implementing type itself, so that
/// rebuilding at the current element type is the identity at the type
/// level.
pub trait TypeConstructor {
    /// The element type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// The bound keeps the result usable as a constructor in turn, so
    /// transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
