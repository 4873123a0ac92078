use stream_helper::testing::*;
use stream_helper::*;

#[test]
fn match_value_treats_absent_as_equal_to_absent() {
    let users = vec![User::new("x", 1), User::anonymous(2)];

    assert!(match_value(&users, |u| u.name.as_deref(), None));
    assert!(match_value(&users, |u| u.name.as_deref(), Some("x")));
    assert!(!match_value(&users, |u| u.name.as_deref(), Some("zzz-not-present")));
}

#[test]
fn match_value_without_absent_values_rejects_absent_target() {
    let users = sample_users();
    assert!(!match_value(&users, |u| u.name.as_deref(), None));
    assert!(match_value(&users, |u| u.name.as_deref(), Some("1")));
    assert!(!match_value(&users, |u| u.name.as_deref(), Some("小明")));
}

#[test]
fn match_value_compares_by_value() {
    let users = sample_users();
    let target = String::from("4");
    assert!(match_value(&users, |u| u.name.clone(), Some(target)));
}

#[test]
fn any_match_is_an_existential() {
    let users = sample_users();
    assert!(any_match(&users, |u| u.age > 40));
    assert!(!any_match(&users, |u| u.age > 60));
    assert!(!any_match(&users[..0], |_| true));
}
