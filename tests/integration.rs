use stream_helper::testing::*;
use stream_helper::*;

#[test]
fn sample_users_end_to_end() -> anyhow::Result<()> {
    let users = sample_users();

    let first = to_map_unique(&users, User::key, Clone::clone);
    assert_eq!(first.len(), 4);
    assert_eq!(first["1"], User::new("1", 20));

    let last = to_map_unique2(&users, User::key, Clone::clone);
    assert_eq!(last["1"], User::new("1", 50));

    let groups = group_by(&users, User::key);
    assert_eq!(groups["1"].len(), 2);

    assert_eq!(&*to_array(&users, |u| u.age), &[20, 23, 22, 30, 50]);
    assert_eq!(join(&users, |u| u.key(), "#"), "1#2#3#4#1");
    assert!(match_value(&users, |u| u.name.as_deref(), Some("1")));

    let asc = order_by_asc(&users, |u| u.age)?;
    let desc = order_by_desc(&users, |u| u.age)?;
    let asc_names = convert_string(Some(asc.as_slice())).unwrap_or_default();
    let desc_names = convert_string(Some(desc.as_slice())).unwrap_or_default();
    assert_eq!(asc_names.first().map(String::as_str), Some("User(name=1, age=20)"));
    assert_eq!(desc_names.first().map(String::as_str), Some("User(name=1, age=50)"));

    Ok(())
}

#[test]
fn fixtures_serialize_with_optional_name() -> anyhow::Result<()> {
    let json = serde_json::to_string(&User::anonymous(7))?;
    assert_eq!(json, r#"{"name":null,"age":7}"#);
    Ok(())
}

#[test]
fn errors_compose_with_anyhow() {
    fn build() -> anyhow::Result<usize> {
        let users = sample_users();
        Ok(to_map_with_key(&users, User::key)?.len())
    }
    let err = build().unwrap_err();
    assert!(err.downcast_ref::<StreamError>().is_some());
}
