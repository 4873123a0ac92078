use std::cmp::Ordering;
use stream_helper::{SortOrder, TieBreak};

#[test]
fn defaults() {
    assert_eq!(TieBreak::default(), TieBreak::First);
    assert_eq!(SortOrder::default(), SortOrder::Asc);
}

#[test]
fn policies_load_from_config_strings() -> anyhow::Result<()> {
    let tie: TieBreak = serde_json::from_str("\"last\"")?;
    let order: SortOrder = serde_json::from_str("\"desc\"")?;
    assert_eq!(tie, TieBreak::Last);
    assert_eq!(order, SortOrder::Desc);
    assert!(serde_json::from_str::<TieBreak>("\"middle\"").is_err());
    Ok(())
}

#[test]
fn resolve_and_apply() {
    assert_eq!(TieBreak::First.resolve("a", "b"), "a");
    assert_eq!(TieBreak::Last.resolve("a", "b"), "b");
    assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
    assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(SortOrder::Desc.apply(Ordering::Equal), Ordering::Equal);
    assert_eq!(format!("{} {}", TieBreak::Last, SortOrder::Desc), "last desc");
}
