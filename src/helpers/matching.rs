/// Whether any element's extracted value equals `target`.
///
/// An absent value matches an absent target; present values compare with `PartialEq`.
///
/// # Example
/// ```
/// use stream_helper::match_value;
///
/// let names = vec![Some("x".to_string()), None];
/// assert!(match_value(&names, |n| n.as_deref(), None));
/// assert!(match_value(&names, |n| n.as_deref(), Some("x")));
/// assert!(!match_value(&names, |n| n.as_deref(), Some("zzz")));
/// ```
pub fn match_value<'a, T, V, F>(items: &'a [T], value_fn: F, target: Option<V>) -> bool
where
    V: PartialEq,
    F: Fn(&'a T) -> Option<V>,
{
    items.iter().any(|item| value_fn(item) == target)
}

/// Whether at least one element satisfies `predicate`. Stops at the first match.
pub fn any_match<T, P>(items: &[T], predicate: P) -> bool
where
    P: Fn(&T) -> bool,
{
    items.iter().any(predicate)
}
