//! The `partial!` macro for partial function application.
//!
//! Where the `curry*!` macros hand over arguments strictly one at a
//! time, `partial!` fixes any subset of a function's arguments in a
//! single step, using `__` (double underscore) as a placeholder for
//! the arguments that remain parameters. Combining the two gives every
//! grouping of a call: `f(a, b, c)`, `partial!(f, a, b, __)(c)`,
//! `curry3!(f)(a)(b)(c)` all agree.
//!
//! `__` is matched as a literal token; do not import
//! [`crate::curry::__`] into scope for use with this macro.

/// Partially applies arguments to a function of 2 to 4 arguments.
///
/// # Syntax
///
/// For a 2-argument function `f(a, b)`:
/// - `partial!(f, value, __)` creates `|b| f(value, b)`
/// - `partial!(f, __, value)` creates `|a| f(a, value)`
/// - `partial!(f, v1, v2)` creates `|| f(v1, v2)` (a thunk)
/// - `partial!(f, __, __)` creates `|a, b| f(a, b)`
///
/// The same placeholder positions work for 3- and 4-argument
/// functions.
///
/// Fixed values must implement `Clone`, since the resulting closure
/// may be called many times.
///
/// # Examples
///
/// ```
/// use currycomb::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let half = partial!(divide, __, 2.0);
/// assert_eq!(half(10.0), 5.0);
/// ```
#[macro_export]
macro_rules! partial {
    // =========================================================================
    // 4-argument functions
    // =========================================================================
    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third, fourth| function(first, second, third, fourth)
    }};
    ($function:expr, $a:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let a = $a;
        move |second, third, fourth| function(a.clone(), second, third, fourth)
    }};
    ($function:expr, __, $b:expr, __, __ $(,)?) => {{
        let function = $function;
        let b = $b;
        move |first, third, fourth| function(first, b.clone(), third, fourth)
    }};
    ($function:expr, __, __, $c:expr, __ $(,)?) => {{
        let function = $function;
        let c = $c;
        move |first, second, fourth| function(first, second, c.clone(), fourth)
    }};
    ($function:expr, __, __, __, $d:expr $(,)?) => {{
        let function = $function;
        let d = $d;
        move |first, second, third| function(first, second, third, d.clone())
    }};
    ($function:expr, $a:expr, $b:expr, __, __ $(,)?) => {{
        let function = $function;
        let (a, b) = ($a, $b);
        move |third, fourth| function(a.clone(), b.clone(), third, fourth)
    }};
    ($function:expr, $a:expr, __, $c:expr, __ $(,)?) => {{
        let function = $function;
        let (a, c) = ($a, $c);
        move |second, fourth| function(a.clone(), second, c.clone(), fourth)
    }};
    ($function:expr, $a:expr, __, __, $d:expr $(,)?) => {{
        let function = $function;
        let (a, d) = ($a, $d);
        move |second, third| function(a.clone(), second, third, d.clone())
    }};
    ($function:expr, __, $b:expr, $c:expr, __ $(,)?) => {{
        let function = $function;
        let (b, c) = ($b, $c);
        move |first, fourth| function(first, b.clone(), c.clone(), fourth)
    }};
    ($function:expr, __, $b:expr, __, $d:expr $(,)?) => {{
        let function = $function;
        let (b, d) = ($b, $d);
        move |first, third| function(first, b.clone(), third, d.clone())
    }};
    ($function:expr, __, __, $c:expr, $d:expr $(,)?) => {{
        let function = $function;
        let (c, d) = ($c, $d);
        move |first, second| function(first, second, c.clone(), d.clone())
    }};
    ($function:expr, $a:expr, $b:expr, $c:expr, __ $(,)?) => {{
        let function = $function;
        let (a, b, c) = ($a, $b, $c);
        move |fourth| function(a.clone(), b.clone(), c.clone(), fourth)
    }};
    ($function:expr, $a:expr, $b:expr, __, $d:expr $(,)?) => {{
        let function = $function;
        let (a, b, d) = ($a, $b, $d);
        move |third| function(a.clone(), b.clone(), third, d.clone())
    }};
    ($function:expr, $a:expr, __, $c:expr, $d:expr $(,)?) => {{
        let function = $function;
        let (a, c, d) = ($a, $c, $d);
        move |second| function(a.clone(), second, c.clone(), d.clone())
    }};
    ($function:expr, __, $b:expr, $c:expr, $d:expr $(,)?) => {{
        let function = $function;
        let (b, c, d) = ($b, $c, $d);
        move |first| function(first, b.clone(), c.clone(), d.clone())
    }};
    ($function:expr, $a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {{
        let function = $function;
        let (a, b, c, d) = ($a, $b, $c, $d);
        move || function(a.clone(), b.clone(), c.clone(), d.clone())
    }};

    // =========================================================================
    // 3-argument functions
    // =========================================================================
    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, second, third| function(first, second, third)
    }};
    ($function:expr, $a:expr, __, __ $(,)?) => {{
        let function = $function;
        let a = $a;
        move |second, third| function(a.clone(), second, third)
    }};
    ($function:expr, __, $b:expr, __ $(,)?) => {{
        let function = $function;
        let b = $b;
        move |first, third| function(first, b.clone(), third)
    }};
    ($function:expr, __, __, $c:expr $(,)?) => {{
        let function = $function;
        let c = $c;
        move |first, second| function(first, second, c.clone())
    }};
    ($function:expr, $a:expr, $b:expr, __ $(,)?) => {{
        let function = $function;
        let (a, b) = ($a, $b);
        move |third| function(a.clone(), b.clone(), third)
    }};
    ($function:expr, $a:expr, __, $c:expr $(,)?) => {{
        let function = $function;
        let (a, c) = ($a, $c);
        move |second| function(a.clone(), second, c.clone())
    }};
    ($function:expr, __, $b:expr, $c:expr $(,)?) => {{
        let function = $function;
        let (b, c) = ($b, $c);
        move |first| function(first, b.clone(), c.clone())
    }};
    ($function:expr, $a:expr, $b:expr, $c:expr $(,)?) => {{
        let function = $function;
        let (a, b, c) = ($a, $b, $c);
        move || function(a.clone(), b.clone(), c.clone())
    }};

    // =========================================================================
    // 2-argument functions
    // =========================================================================
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};
    ($function:expr, $a:expr, __ $(,)?) => {{
        let function = $function;
        let a = $a;
        move |second| function(a.clone(), second)
    }};
    ($function:expr, __, $b:expr $(,)?) => {{
        let function = $function;
        let b = $b;
        move |first| function(first, b.clone())
    }};
    ($function:expr, $a:expr, $b:expr $(,)?) => {{
        let function = $function;
        let (a, b) = ($a, $b);
        move || function(a.clone(), b.clone())
    }};
}
