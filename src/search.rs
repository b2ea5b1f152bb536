//! Binary search over sorted slices.
//!
//! Every variant here returns the index of *an* element equal to the key (if there are
//! duplicates, which one is unspecified) or `None` when nothing matches. The slice must already
//! be sorted by the same ordering the search uses; otherwise the result is meaningless but still
//! memory safe.
//!
//! # Examples
//!
//! ```
//! use classic_ds::search;
//!
//! let numbers = [10, 20, 30, 40, 50];
//! assert_eq!(search::find(&numbers, &30), Some(2));
//! assert_eq!(search::find(&numbers, &35), None);
//!
//! // Only look at indices 3 and 4.
//! assert_eq!(search::find_in(&numbers, &20, 3..5), Ok(None));
//! assert_eq!(search::find_in(&numbers, &50, 3..5), Ok(Some(4)));
//! ```

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::{Error, Result};

/// Finds `key` in the sorted slice `items`.
pub fn find<T>(items: &[T], key: &T) -> Option<usize>
where
    T: Ord,
{
    find_by(items, |probe| probe.cmp(key))
}

/// Finds `key` within `items[range]`. The returned index is into `items`, not into the range.
///
/// # Errors
///
/// [`Error::InvalidRange`] if the range is reversed or ends past the end of `items`.
pub fn find_in<T>(items: &[T], key: &T, range: Range<usize>) -> Result<Option<usize>>
where
    T: Ord,
{
    if range.start > range.end || range.end > items.len() {
        return Err(Error::InvalidRange {
            start: range.start,
            end: range.end,
            len: items.len(),
        });
    }
    let offset = range.start;
    Ok(find(&items[range], key).map(|i| i + offset))
}

/// The search loop behind every other function in this module. `compare` reports how a probed
/// element relates to the key being searched for: `Less` means the key lies to the right of it.
///
/// # Examples
///
/// ```
/// use classic_ds::search::find_by;
///
/// // Sorted by length.
/// let words = ["a", "to", "the", "fish"];
/// assert_eq!(find_by(&words, |w| w.len().cmp(&3)), Some(2));
/// ```
pub fn find_by<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // Search the half-open window `low..high` so the bounds never go below zero.
    let mut low = 0;
    let mut high = items.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match compare(&items[mid]) {
            Ordering::Less => low = mid + 1,
            Ordering::Equal => return Some(mid),
            Ordering::Greater => high = mid,
        }
    }
    None
}

macro_rules! integer_finds {
    ($($name:ident => $ty:ty),* $(,)?) => {$(
        #[doc = concat!("Finds `key` in a sorted slice of `", stringify!($ty), "`s.")]
        pub fn $name(items: &[$ty], key: $ty) -> Option<usize> {
            find_by(items, |probe| probe.cmp(&key))
        }
    )*};
}

macro_rules! float_finds {
    ($($name:ident => $ty:ty),* $(,)?) => {$(
        #[doc = concat!("Finds `key` in a sorted slice of `", stringify!($ty), "`s.")]
        ///
        /// Floats are compared with their IEEE 754 total order, so `-0.0` sorts before `0.0` and
        /// `NaN` can be found when the slice is sorted the same way (e.g. with `total_cmp`).
        pub fn $name(items: &[$ty], key: $ty) -> Option<usize> {
            find_by(items, |probe| probe.total_cmp(&key))
        }
    )*};
}

integer_finds! {
    find_i32 => i32,
    find_i64 => i64,
}

float_finds! {
    find_f32 => f32,
    find_f64 => f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_integer_in_middle() {
        assert_eq!(find(&[10, 20, 30, 40, 50], &30), Some(2));
    }

    #[test]
    fn find_string_at_beginning() {
        let fruits = ["Apple", "Banana", "Cherry", "Date"];
        assert_eq!(find(&fruits, &"Apple"), Some(0));
    }

    #[test]
    fn find_element_at_end() {
        assert_eq!(find(&[1, 3, 5, 7, 9, 11], &11), Some(5));
    }

    #[test]
    fn element_not_found() {
        assert_eq!(find(&[2, 4, 6, 8, 10], &5), None);
        assert_eq!(find(&[2, 4, 6, 8, 10], &1), None);
        assert_eq!(find(&[2, 4, 6, 8, 10], &11), None);
    }

    #[test]
    fn single_element_and_empty() {
        assert_eq!(find(&[42], &42), Some(0));
        assert_eq!(find(&[42], &7), None);
        assert_eq!(find::<i32>(&[], &7), None);
    }

    #[test]
    fn find_with_custom_range() {
        let numbers = [10, 20, 30, 40, 50, 60, 70, 80];

        assert_eq!(find_in(&numbers, &70, 4..8), Ok(Some(6)));
        assert_eq!(find_in(&numbers, &20, 4..8), Ok(None));
        assert_eq!(find_in(&numbers, &20, 0..0), Ok(None));
        assert_eq!(find_in(&numbers, &80, 0..8), Ok(Some(7)));
    }

    #[test]
    fn invalid_ranges() {
        let numbers = [1, 2, 3];

        assert_eq!(
            find_in(&numbers, &1, 0..4),
            Err(Error::InvalidRange {
                start: 0,
                end: 4,
                len: 3
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 2..1;
        assert!(find_in(&numbers, &1, reversed).is_err());
        assert_eq!(
            Error::InvalidRange {
                start: 0,
                end: 4,
                len: 3
            }
            .to_string(),
            "invalid range 0..4 for a slice of length 3"
        );
    }

    #[test]
    fn primitive_variants() {
        assert_eq!(find_i32(&[-3, -1, 0, 4], -1), Some(1));
        assert_eq!(find_i64(&[i64::MIN, 0, i64::MAX], i64::MAX), Some(2));
        assert_eq!(find_i64(&[1, 2], 3), None);

        assert_eq!(find_f64(&[-1.5, 0.0, 2.25, 8.0], 2.25), Some(2));
        assert_eq!(find_f64(&[-1.5, 0.0, 2.25], 1.0), None);
        assert_eq!(find_f32(&[0.5, 1.5, f32::INFINITY], f32::INFINITY), Some(2));
    }

    #[test]
    fn floats_use_total_order() {
        assert_eq!(find_f64(&[-0.0, 0.0], 0.0), Some(1));
        assert_eq!(find_f64(&[-0.0, 0.0], -0.0), Some(0));
        assert_eq!(find_f64(&[1.0, f64::NAN], f64::NAN), Some(1));
    }
}
