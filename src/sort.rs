//! Selection sort.
//!
//! Each pass finds the smallest remaining element and swaps it to the front of the unsorted
//! part. That is always `O(n^2)` comparisons, whatever the input, but never more than `n - 1`
//! swaps. The sort is in place and not stable.
//!
//! # Examples
//!
//! ```
//! use classic_ds::sort::selection_sort;
//!
//! let mut numbers = [5, 3, 8, 1, 2];
//! selection_sort(&mut numbers);
//! assert_eq!(numbers, [1, 2, 3, 5, 8]);
//! ```

use std::cmp::Ordering;

/// Sorts `items` in ascending order.
pub fn selection_sort<T>(items: &mut [T])
where
    T: Ord,
{
    selection_sort_by(items, T::cmp);
}

/// Sorts `items` with the given comparator.
///
/// # Examples
///
/// ```
/// use classic_ds::sort::selection_sort_by;
///
/// let mut words = ["pear", "fig", "banana"];
/// selection_sort_by(&mut words, |a, b| b.len().cmp(&a.len()));
/// assert_eq!(words, ["banana", "pear", "fig"]);
/// ```
pub fn selection_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if compare(&items[j], &items[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}
