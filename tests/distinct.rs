use stream_helper::testing::*;
use stream_helper::*;

#[test]
fn unique_with_key_keeps_first_per_key() {
    let items: Vec<Option<User>> = sample_users().into_iter().map(Some).collect();
    let kept = unique_with_key(&items, |u| u.map(User::key), &User::default());

    assert_collections_unordered_equal(
        &kept,
        &[
            User::new("1", 20),
            User::new("2", 23),
            User::new("3", 22),
            User::new("4", 30),
        ],
    );
}

#[test]
fn unique_with_key_replaces_absent_elements() {
    let items = vec![None, Some(User::new("a", 1)), None];
    let fallback = User::anonymous(0);
    let kept = unique_with_key(&items, |u| u.map(User::key), &fallback);

    assert_collections_unordered_equal(&kept, &[fallback, User::new("a", 1)]);
}

#[test]
fn unique_with_key_is_repeatable() {
    let items: Vec<Option<User>> = (0..50)
        .map(|i| Some(User::new(format!("u{}", i % 13), i)))
        .collect();
    let a = unique_with_key(&items, |u| u.map(User::key), &User::default());
    let b = unique_with_key(&items, |u| u.map(User::key), &User::default());
    assert_eq!(a.len(), 13);
    assert_eq!(a, b);
}
