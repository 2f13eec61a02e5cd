//! Small numeric helpers.

/// Rounds `x` up, then down to an even number if that landed on an odd one.
///
/// So every value in `(2k - 1, 2k + 1]` maps to `2k`. NaN and the
/// infinities come back unchanged.
///
/// # Examples
///
/// ```
/// use algos::mathex::ceiled_even;
///
/// assert_eq!(ceiled_even(3.2), 4.0);
/// assert_eq!(ceiled_even(4.0), 4.0);
/// assert_eq!(ceiled_even(4.5), 4.0);
/// ```
pub fn ceiled_even(x: f64) -> f64 {
    let ceiled = x.ceil();
    if ceiled % 2.0 != 0.0 {
        ceiled - 1.0
    } else {
        ceiled
    }
}

/// Rounds `x` up, then down to an odd number if that landed on an even one.
///
/// # Examples
///
/// ```
/// use algos::mathex::ceiled_odd;
///
/// assert_eq!(ceiled_odd(2.2), 3.0);
/// assert_eq!(ceiled_odd(3.5), 3.0);
/// assert_eq!(ceiled_odd(0.0), -1.0);
/// ```
pub fn ceiled_odd(x: f64) -> f64 {
    let ceiled = x.ceil();
    if ceiled % 2.0 == 0.0 {
        ceiled - 1.0
    } else {
        ceiled
    }
}
