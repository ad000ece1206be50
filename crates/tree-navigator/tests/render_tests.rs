use pretty_assertions::assert_eq;
use tree_navigator::prelude::*;

fn render_window(store: FlatNodeStore, options: NavigatorOptions) -> RenderedTree {
    let index = TreeIndex::build(&store);
    let controller = NavigationController::new(&index);
    BoundedRenderer::new(&index, &options, &AllFieldsProjector).render_window(controller.viewport())
}

#[test]
fn test_empty_dataset_renders_single_placeholder() {
    let window = render_window(FlatNodeStore::empty(), NavigatorOptions::default());

    assert!(window.is_empty());
    assert_eq!(window.root.slot_count(), 1);
    assert_eq!(window.root.depth, 0);
    assert!(window.root.children.is_none());
    assert_eq!(window.root.click_target(), None);
}

#[test]
fn test_unresolved_root_renders_single_placeholder() {
    let store = FlatNodeStore::new(vec![NodeRecord::new("a")], Some("b".into()));
    let window = render_window(store, NavigatorOptions::default());

    assert!(window.is_empty());
    assert_eq!(window.viewport.selected, Some("b".into()));
}

#[test]
fn test_placeholders_use_configured_appearance() {
    let options = NavigatorOptions::default()
        .max_depth(1)
        .placeholder_id("vacant")
        .placeholder_label("Open position")
        .placeholder_image("img/vacant.svg")
        .default_color("#eeeeee");
    let store = FlatNodeStore::new(vec![NodeRecord::new("1").right("2"), NodeRecord::new("2")], Some("1".into()));
    let window = render_window(store, options);

    let left = window.root.child(ChildSlot::Left).unwrap();
    assert_eq!(
        left.slot,
        Slot::Missing(Placeholder {
            id: "vacant".to_string(),
            label: "Open position".to_string(),
            image: "img/vacant.svg".to_string(),
            color: "#eeeeee".to_string(),
        })
    );
    assert_eq!(left.position, Position::Left);
    assert_eq!(window.root.child(ChildSlot::Right).unwrap().click_target(), Some(&"2".into()));
}

#[test]
fn test_dangling_reference_renders_as_placeholder() {
    let store = FlatNodeStore::new(vec![NodeRecord::new("1").left("ghost")], Some("1".into()));
    let window = render_window(store, NavigatorOptions::default().max_depth(1));

    assert!(window.root.child(ChildSlot::Left).unwrap().is_placeholder());
    assert_eq!(window.root.slot_count(), 3);
}

#[test]
fn test_cyclic_data_is_bounded_by_depth() {
    let store = FlatNodeStore::new(
        vec![NodeRecord::new("1").left("1").right("1")],
        Some("1".into()),
    );
    let window = render_window(store, NavigatorOptions::default().max_depth(3));

    assert_eq!(window.root.slot_count(), 15);
    assert!(window.root.iter().all(|node| node.click_target() == Some(&"1".into())));
}

#[test]
fn test_window_follows_selection() {
    let store = FlatNodeStore::new(
        vec![
            NodeRecord::new("1").left("2").right("3"),
            NodeRecord::new("2"),
            NodeRecord::new("3").left("4").name("Three"),
            NodeRecord::new("4").name("Four").status("gold"),
        ],
        Some("1".into()),
    );
    let mut navigator = TreeNavigator::new(store, NavigatorOptions::default().max_depth(1)).unwrap();
    navigator.click(&"3".into());

    let expected = "\
focus: 3 level: 1
[root] Three #3
  [L] Four #4 (gold)
  [R] Empty
";
    assert_eq!(navigator.render_window().to_string(), expected);
}
