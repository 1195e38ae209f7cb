//! The curry macro family.
//!
//! `curry2!` through `curry5!` convert a multi-argument function into
//! nested single-argument closures. The arity is chosen by picking the
//! macro, so it is fixed at expansion time; a function whose arity has
//! no matching macro simply cannot be wrapped, which surfaces as a
//! compile error rather than a misbehaving wrapper.
//!
//! Every level of the returned closure chain implements `Fn`, so a
//! partial application is an ordinary reusable value: it can be stored,
//! cloned into several call sites, or passed to `compose!`/`pipe!`.
//! Holding a level without calling it commits to nothing.
//!
//! The function itself is shared through `Rc`; fixed arguments are
//! cloned at the final call, so argument types must implement `Clone`
//! (except the last, which is consumed directly).

/// Converts a 2-argument function into curried form.
///
/// # Examples
///
/// ```
/// use currycomb::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried = curry2!(add);
/// assert_eq!(curried(5)(3), 8);
///
/// // Partial applications are reusable values.
/// let add_five = curried(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into curried form.
///
/// # Examples
///
/// ```
/// use currycomb::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried = curry3!(volume);
/// let with_width = curried(2.0);
/// let with_width_height = with_width(3.0);
/// assert!((with_width_height(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = Clone::clone(&first);
                move |third| function(Clone::clone(&first), Clone::clone(&second), third)
            }
        }
    }};
}

/// Converts a 4-argument function into curried form.
///
/// ```
/// use currycomb::curry4;
///
/// let curried = curry4!(|a: i32, b: i32, c: i32, d: i32| a + b + c + d);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = Clone::clone(&first);
                    let second = Clone::clone(&second);
                    move |fourth| {
                        function(
                            Clone::clone(&first),
                            Clone::clone(&second),
                            Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}

/// Converts a 5-argument function into curried form.
///
/// ```
/// use currycomb::curry5;
///
/// let curried = curry5!(|a: i32, b: i32, c: i32, d: i32, e: i32| a + b + c + d + e);
/// assert_eq!(curried(1)(2)(3)(4)(5), 15);
/// ```
#[macro_export]
macro_rules! curry5 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = Clone::clone(&first);
                    let second = Clone::clone(&second);
                    move |fourth| {
                        let function = ::std::rc::Rc::clone(&function);
                        let first = Clone::clone(&first);
                        let second = Clone::clone(&second);
                        let third = Clone::clone(&third);
                        move |fifth| {
                            function(
                                Clone::clone(&first),
                                Clone::clone(&second),
                                Clone::clone(&third),
                                Clone::clone(&fourth),
                                fifth,
                            )
                        }
                    }
                }
            }
        }
    }};
}
