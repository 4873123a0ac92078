use std::collections::HashMap;
use std::hash::Hash;

/// Group elements by the key `classifier` derives: `K -> Vec<T>`.
///
/// Each group keeps its members in their input order. The order of the groups
/// themselves is unspecified.
///
/// # Example
/// ```
/// use stream_helper::group_by;
///
/// let words = vec!["apple", "bean", "avocado"];
/// let groups = group_by(&words, |w| w.len() % 2);
/// assert_eq!(groups[&1], vec!["apple", "avocado"]);
/// ```
pub fn group_by<T, K, F>(items: &[T], classifier: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(classifier(item)).or_default().push(item.clone());
    }
    groups
}
