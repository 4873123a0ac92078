use stream_helper::testing::*;
use stream_helper::*;

#[test]
fn to_array_is_dense_and_ordered() {
    let users = sample_users();
    let ages = to_array(&users, |u| u.age);

    assert_eq!(ages.len(), users.len());
    for (i, user) in users.iter().enumerate() {
        assert_eq!(ages[i], user.age);
    }
    assert_eq!(&*ages, &[20, 23, 22, 30, 50]);
}

#[test]
fn join_inserts_delimiter_between_items_only() {
    let users = sample_users();
    assert_eq!(join(&users[..3], |u| u.key(), "#"), "1#2#3");
    assert_eq!(join(&users[..1], |u| u.key(), "#"), "1");
    assert_eq!(join(&users[..0], |u| u.key(), "#"), "");
}

#[test]
fn join_accepts_borrowed_and_owned_strings() {
    let users = sample_users();
    let borrowed = join(&users, |u| u.name.as_deref().unwrap_or("?"), ", ");
    let owned = join(&users, |u| format!("{}", u.age), ", ");
    assert_eq!(borrowed, "1, 2, 3, 4, 1");
    assert_eq!(owned, "20, 23, 22, 30, 50");
}
