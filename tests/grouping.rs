use stream_helper::testing::*;
use stream_helper::*;

#[test]
fn group_by_name_keeps_input_order_within_groups() {
    let users = sample_users();
    let groups = group_by(&users, User::key);

    assert_eq!(groups.len(), 4);
    assert_collections_equal(&groups["1"], &[User::new("1", 20), User::new("1", 50)]);
    assert_collections_equal(&groups["3"], &[User::new("3", 22)]);
    assert_stable_groups(&users, &groups);
}

#[test]
fn group_by_tolerates_repeated_keys_without_error() {
    let words = vec!["b", "a", "b", "c", "b", "a"];
    let groups = group_by(&words, |w| w.to_string());

    assert_eq!(groups["b"].len(), 3);
    assert_eq!(groups["a"], vec!["a", "a"]);
    assert_stable_groups(&words, &groups);
}

#[test]
fn group_by_empty_input_is_empty() {
    let empty: Vec<User> = Vec::new();
    assert!(group_by(&empty, |u| u.age).is_empty());
}
