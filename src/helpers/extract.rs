//! Projection helpers: a fixed-size array of mapped values, or a joined string.

/// Apply `mapper` to every element and pack the results into a fixed-size slice.
///
/// The result has exactly `items.len()` entries, in input order.
///
/// # Example
/// ```
/// use stream_helper::to_array;
///
/// let ages: Box<[u32]> = to_array(&[("a", 20), ("b", 23)], |u| u.1);
/// assert_eq!(&*ages, &[20, 23]);
/// ```
pub fn to_array<T, V, F>(items: &[T], mapper: F) -> Box<[V]>
where
    F: Fn(&T) -> V,
{
    items.iter().map(mapper).collect()
}

/// Concatenate the string each element maps to, separated by `delimiter`.
///
/// Empty input yields an empty string. The mapper may return anything that
/// borrows as `str` (`&str`, `String`, `Cow<str>`, ...).
///
/// # Example
/// ```
/// use stream_helper::join;
///
/// let users = vec![("1", 20), ("2", 23), ("3", 22)];
/// assert_eq!(join(&users, |u| u.0, "#"), "1#2#3");
/// assert_eq!(join(&users[..0], |u| u.0, "#"), "");
/// ```
pub fn join<'a, T, S, F>(items: &'a [T], mapper: F, delimiter: &str) -> String
where
    S: AsRef<str>,
    F: Fn(&'a T) -> S,
{
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            out.push_str(delimiter);
        }
        out.push_str(mapper(item).as_ref());
    }
    out
}
