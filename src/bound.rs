//! Lower and upper bounds on sorted sequences.
//!
//! Both searches are driven by a single "strictly less than" comparator,
//! the same convention as C++'s `std::lower_bound`/`std::upper_bound`. The
//! upper bound asks the comparator with its arguments swapped, so callers
//! never have to provide `<=` or equality.
//!
//! The sequence must already be sorted under the comparator. This isn't
//! checked; on unsorted input the result is some index in the range but
//! otherwise meaningless.
//!
//! # Examples
//!
//! ```
//! use algos::bound::{lower_bound, upper_bound};
//!
//! let xs = [1, 2, 4, 4, 4, 6, 8];
//! let less = |a: &i32, b: &i32| a < b;
//!
//! let lo = lower_bound(&xs, &4, less);
//! let hi = upper_bound(&xs, &4, less);
//!
//! assert_eq!((lo, hi), (2, 5));
//! assert_eq!(&xs[lo..hi], &[4, 4, 4]);
//! ```

use std::ops::Range;

/// Returns the index of the first element of `seq` that is not ordered
/// before `value`, or `seq.len()` if every element is.
pub fn lower_bound<T, F>(seq: &[T], value: &T, less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    lower_bound_in(seq, value, less, 0..seq.len())
}

/// Like [`lower_bound`] but only looks at `seq[range]`. The result is in
/// `range.start..=range.end`. An empty (or backwards) range returns
/// `range.start`.
///
/// # Examples
///
/// ```
/// use algos::bound::lower_bound_in;
///
/// let xs = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(lower_bound_in(&xs, &4, |a, b| a < b, 2..5), 3);
/// // Everything in range is before 7.
/// assert_eq!(lower_bound_in(&xs, &7, |a, b| a < b, 2..5), 5);
/// ```
pub fn lower_bound_in<T, F>(seq: &[T], value: &T, mut less: F, range: Range<usize>) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    search(seq, range, |element| less(element, value))
}

/// Returns the index of the first element of `seq` that `value` is ordered
/// before, or `seq.len()` if there is none.
pub fn upper_bound<T, F>(seq: &[T], value: &T, less: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    upper_bound_in(seq, value, less, 0..seq.len())
}

/// Like [`upper_bound`] but only looks at `seq[range]`. The result is in
/// `range.start..=range.end`. An empty (or backwards) range returns
/// `range.start`.
///
/// # Examples
///
/// ```
/// use algos::bound::upper_bound_in;
///
/// let xs = [1, 2, 3, 4, 5, 6, 7];
/// assert_eq!(upper_bound_in(&xs, &4, |a, b| a < b, 2..6), 4);
/// ```
pub fn upper_bound_in<T, F>(seq: &[T], value: &T, mut less: F, range: Range<usize>) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    search(seq, range, |element| !less(value, element))
}

/// Finds the first index in `range` whose element fails `goes_right`,
/// assuming everything that passes comes before everything that fails.
///
/// Halves a count rather than averaging two bounds so the probe index can't
/// overflow. A probe past the end of `seq` counts as failing.
fn search<T, P>(seq: &[T], range: Range<usize>, mut goes_right: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut first = range.start;
    let mut count = range.end.saturating_sub(range.start);

    while count > 0 {
        let step = count / 2;
        let probe = first + step;
        if seq.get(probe).map_or(false, &mut goes_right) {
            first = probe + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }

    first
}

/// Bound searches as methods on slices.
///
/// # Examples
///
/// ```
/// use algos::bound::BoundSearch;
///
/// let words = ["apple", "banana", "cherry", "cherry", "date"];
/// assert_eq!(words.lower_bound(&"cherry"), 2);
/// assert_eq!(words.upper_bound(&"cherry"), 4);
///
/// // Ordering by length instead.
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// let sorted = ["fig", "kiwi", "lime", "mango"];
/// assert_eq!(sorted.lower_bound_by(&"pear", by_len), 1);
/// assert_eq!(sorted.upper_bound_by(&"pear", by_len), 3);
/// ```
pub trait BoundSearch<T> {
    /// See [`lower_bound`].
    fn lower_bound_by<F>(&self, value: &T, less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    /// See [`upper_bound`].
    fn upper_bound_by<F>(&self, value: &T, less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool;

    /// [`lower_bound_by`][BoundSearch::lower_bound_by] using `T`'s own `<`.
    fn lower_bound(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.lower_bound_by(value, |a, b| a < b)
    }

    /// [`upper_bound_by`][BoundSearch::upper_bound_by] using `T`'s own `<`.
    fn upper_bound(&self, value: &T) -> usize
    where
        T: Ord,
    {
        self.upper_bound_by(value, |a, b| a < b)
    }
}

impl<T> BoundSearch<T> for [T] {
    fn lower_bound_by<F>(&self, value: &T, less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        lower_bound(self, value, less)
    }

    fn upper_bound_by<F>(&self, value: &T, less: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        upper_bound(self, value, less)
    }
}
