//! Sort-by-key helpers.
//!
//! Keys only need `PartialOrd`. Sorting is stable, and the first pair of keys
//! that cannot be ordered aborts the sort with [`StreamError::Incomparable`].

use crate::error::{Result, StreamError};
use crate::policy::SortOrder;
use std::cmp::Ordering;
use tracing::debug;

/// Sort a copy of `items` by the key `key_fn` extracts, in `order`.
///
/// Elements with equal keys keep their input order in both directions.
///
/// # Errors
/// [`StreamError::Incomparable`] if two keys compared during the sort have no
/// ordering (for example a `NaN` float key). The indices refer to `items`.
pub fn order_by<T, K, F>(items: &[T], key_fn: F, order: SortOrder) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let keys: Vec<K> = items.iter().map(key_fn).collect();
    let sorted = merge_sort(&keys, (0..items.len()).collect(), order).inspect_err(|err| {
        debug!(%err, %order, "sort aborted");
    })?;
    Ok(sorted.into_iter().map(|idx| items[idx].clone()).collect())
}

/// Ascending [`order_by`].
///
/// # Example
/// ```
/// use stream_helper::order_by_asc;
///
/// let users = vec![("a", 30), ("b", 20), ("c", 20)];
/// let sorted = order_by_asc(&users, |u| u.1).unwrap();
/// assert_eq!(sorted, vec![("b", 20), ("c", 20), ("a", 30)]);
/// ```
///
/// # Errors
/// Same as [`order_by`].
pub fn order_by_asc<T, K, F>(items: &[T], key_fn: F) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    order_by(items, key_fn, SortOrder::Asc)
}

/// Descending [`order_by`].
///
/// # Errors
/// Same as [`order_by`].
pub fn order_by_desc<T, K, F>(items: &[T], key_fn: F) -> Result<Vec<T>>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    order_by(items, key_fn, SortOrder::Desc)
}

// Top-down merge sort over indices into `keys`. Ties take from the left run.
// Not `sort_by`: a comparator that is not a total order may make it panic.
fn merge_sort<K: PartialOrd>(keys: &[K], mut run: Vec<usize>, order: SortOrder) -> Result<Vec<usize>> {
    if run.len() <= 1 {
        return Ok(run);
    }
    let right = run.split_off(run.len() / 2);
    let left = merge_sort(keys, run, order)?;
    let right = merge_sort(keys, right, order)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        let (l, r) = (left[i], right[j]);
        let ord = keys[l]
            .partial_cmp(&keys[r])
            .ok_or_else(|| StreamError::incomparable(l.min(r), l.max(r)))?;
        if order.apply(ord) == Ordering::Greater {
            merged.push(r);
            j += 1;
        } else {
            merged.push(l);
            i += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desc_keeps_ties_in_input_order() {
        let items = vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
        let sorted = order_by_desc(&items, |p| p.0).unwrap();
        assert_eq!(sorted, vec![(2, 'b'), (2, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn nan_key_is_incomparable() {
        let items = vec![1.0, f64::NAN, 0.5];
        let err = order_by_asc(&items, |x| *x).unwrap_err();
        assert!(matches!(err, StreamError::Incomparable { .. }));
    }

    #[test]
    fn single_and_empty_inputs_sort_trivially() {
        let one = vec![f64::NAN];
        assert_eq!(order_by_asc(&one, |x| *x).unwrap().len(), 1);
        let none: Vec<u8> = Vec::new();
        assert!(order_by_desc(&none, |x| *x).unwrap().is_empty());
    }
}
