use pretty_assertions::assert_eq;
use std::io::Write;
use std::thread;
use tempfile::NamedTempFile;
use tree_navigator::prelude::*;

const SNAPSHOT: &str = r#"{
    "root": 1,
    "nodes": [
        {"id": 1, "left_child_id": 2, "right_child_id": 3, "displayName": "Ada", "statusTag": "active",
         "imageRef": "img/ada.png", "description": {"left_count": 1, "right_count": 2}},
        {"id": 2, "left_child_id": null, "right_child_id": null, "displayName": "Ben", "statusTag": "inactive"},
        {"id": 3, "left_child_id": 4, "right_child_id": null, "displayName": "Cy", "statusTag": "active"},
        {"id": 4, "left_child_id": null, "right_child_id": null, "displayName": "Di", "statusTag": "active"}
    ]
}"#;

fn options() -> NavigatorOptions {
    NavigatorOptions::default()
        .max_depth(1)
        .detail_field(FieldSpec::new("Left", "left_count").fallback("0"))
        .detail_field(FieldSpec::new("Right", "right_count").fallback("0"))
}

#[test]
fn test_navigate_snapshot_loaded_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();

    let store = FlatNodeStore::from_json_file(file.path(), None).unwrap();
    let mut navigator = TreeNavigator::new(store, options()).unwrap();

    assert_eq!(navigator.selected(), Some(&"1".into()));
    assert_eq!(
        navigator.details(&"1".into()),
        Some(vec![DetailRow::new("Left", "1"), DetailRow::new("Right", "2")])
    );

    assert!(navigator.click(&"4".into()));
    assert_eq!(navigator.level(), Level::Depth(2));
    assert_eq!(navigator.breadcrumb(), vec![NodeId::from("1"), "3".into(), "4".into()]);

    assert!(navigator.up_one_level());
    assert!(navigator.activate(&"3".into()));
    assert_eq!(
        navigator.drain_events(),
        vec![
            NavigatorEvent::NodeSelected("4".into()),
            NavigatorEvent::NodeSelected("3".into()),
            NavigatorEvent::NodeActivated("3".into()),
        ]
    );

    let expected = "\
focus: 3 level: 1
[root] Cy #3 (active)
  [L] Di #4 (active)
  [R] Empty
";
    assert_eq!(navigator.render_window().to_string(), expected);
}

#[test]
fn test_background_refresh_is_applied_whole() {
    let store = FlatNodeStore::from_json_str(SNAPSHOT, None).unwrap();
    let mut navigator = TreeNavigator::new(store, options()).unwrap();
    navigator.click(&"4".into());

    let (tx, rx) = refresh_channel();
    let producer = thread::spawn(move || {
        for generation in 0..3u64 {
            let root = format!("g{}", generation);
            let store = FlatNodeStore::new(
                vec![
                    NodeRecord::new(root.as_str()).left(format!("{}-left", root)),
                    NodeRecord::new(format!("{}-left", root)),
                ],
                Some(root.as_str().into()),
            );
            tx.send(store).unwrap();
        }
    });
    producer.join().unwrap();

    assert!(navigator.poll_refresh(&rx));
    assert_eq!(navigator.viewport(), &Viewport::new(Some("g2".into()), Level::Depth(0)));
    assert!(navigator.index().lookup(&"4".into()).is_none());
    assert!(navigator.index().lookup(&"g1".into()).is_none());

    assert!(navigator.to_bottom_left());
    assert_eq!(navigator.selected(), Some(&"g2-left".into()));
    assert!(!navigator.poll_refresh(&rx));
}

#[test]
fn test_root_supplied_separately_for_bare_array() {
    let json = r#"[{"id": "x", "right": "y"}, {"id": "y"}]"#;
    let store = FlatNodeStore::from_json_str(json, Some("x".into())).unwrap();
    let mut navigator = TreeNavigator::new(store, NavigatorOptions::default()).unwrap();

    assert!(navigator.to_bottom_right());
    assert_eq!(navigator.viewport(), &Viewport::new(Some("y".into()), Level::Depth(1)));
    assert_eq!(navigator.leg_sizes(&"x".into()), (0, 1));
}
