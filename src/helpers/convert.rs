//! Element-type conversion and in-place update.
//!
//! These helpers accept an absent input (`None`) and hand back `None`, so a
//! caller can pass an optional list straight through.

use std::fmt::Display;

/// Map every element to a new type, keeping order and count.
///
/// ```
/// use stream_helper::convert;
///
/// assert_eq!(convert(Some(&[1, 2][..]), |n| n * 10), Some(vec![10, 20]));
/// assert_eq!(convert(None::<&[i32]>, |n| n * 10), None);
/// ```
pub fn convert<T, R, F>(items: Option<&[T]>, mapper: F) -> Option<Vec<R>>
where
    F: Fn(&T) -> R,
{
    items.map(|items| items.iter().map(mapper).collect())
}

/// [`convert`] each element to its `Display` form.
pub fn convert_string<T: Display>(items: Option<&[T]>) -> Option<Vec<String>> {
    convert(items, ToString::to_string)
}

/// Run `action` on every element and return the elements in their original order.
///
/// `None` stays `None`; an empty list comes back as a new empty list.
///
/// ```
/// use stream_helper::update;
///
/// let bumped = update(Some(vec![1, 2]), |n| *n += 1);
/// assert_eq!(bumped, Some(vec![2, 3]));
/// assert_eq!(update(None::<Vec<i32>>, |n| *n += 1), None);
/// ```
pub fn update<T, F>(items: Option<Vec<T>>, mut action: F) -> Option<Vec<T>>
where
    F: FnMut(&mut T),
{
    let items = items?;
    if items.is_empty() {
        return Some(Vec::new());
    }
    Some(
        items
            .into_iter()
            .map(|mut item| {
                action(&mut item);
                item
            })
            .collect(),
    )
}
