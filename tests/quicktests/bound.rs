use algos::bound::{lower_bound, lower_bound_in, upper_bound, upper_bound_in, BoundSearch};

use quickcheck_macros::quickcheck;

/// Sorts by the first field only so distinct tuples can be equivalent.
fn by_key(a: &(i8, u8), b: &(i8, u8)) -> bool {
    a.0 < b.0
}

#[quickcheck]
fn equivalent_elements_lie_between_bounds(xs: Vec<(i8, u8)>, key: i8) -> bool {
    let mut xs = xs;
    xs.sort_by_key(|x| x.0);
    let needle = (key, 0);

    let lo = lower_bound(&xs, &needle, by_key);
    let hi = upper_bound(&xs, &needle, by_key);

    xs[..lo].iter().all(|x| x.0 < key)
        && xs[lo..hi].iter().all(|x| x.0 == key)
        && xs[hi..].iter().all(|x| x.0 > key)
}

#[quickcheck]
fn count_matches_occurrences(xs: Vec<u8>, x: u8) -> bool {
    let mut xs = xs;
    xs.sort_unstable();
    xs.upper_bound(&x) - xs.lower_bound(&x) == xs.iter().filter(|e| **e == x).count()
}

#[quickcheck]
fn bounds_stay_in_range(xs: Vec<u8>, x: u8, start: usize, end: usize) -> bool {
    let mut xs = xs;
    xs.sort_unstable();
    let len = xs.len() + 1;
    let (start, end) = (start % len, end % len);

    let lo = lower_bound_in(&xs, &x, |a, b| a < b, start..end);
    let hi = upper_bound_in(&xs, &x, |a, b| a < b, start..end);
    if start >= end {
        lo == start && hi == start
    } else {
        start <= lo && lo <= hi && hi <= end
    }
}

#[test]
fn documented_examples() {
    let less = |a: &i32, b: &i32| a < b;
    assert_eq!(lower_bound(&[], &5, less), 0);
    assert_eq!(upper_bound(&[], &5, less), 0);

    let xs = [1, 2, 4, 4, 4, 6, 8];
    assert_eq!(lower_bound(&xs, &4, less), 2);
    assert_eq!(upper_bound(&xs, &4, less), 5);

    let xs = [1, 2, 3, 4, 5, 6, 7];
    assert_eq!(lower_bound_in(&xs, &4, less, 2..5), 3);
}
