//! Slot-fill registry tests
//!
//! Producers and consumers only share a slot name; these tests drive both
//! through the public API the way panels and plugins do.

mod common;

use common::contents;
use modeler_shell::layout::{StatusBar, StatusBarView};
use modeler_shell::slot::{names, Fill, FillMeta, Slot, SlotOrder, SlotRegistry};

// =============================================================================
// Registration lifecycle
// =============================================================================

#[test]
fn test_rerender_updates_in_place() {
    let registry = SlotRegistry::new();
    let mut first = Fill::new(&registry, "A");
    let mut second = Fill::new(&registry, "A");

    let id = first.render("v1", FillMeta::new());
    second.render("other", FillMeta::new());
    let again = first.render("v2", FillMeta::new());

    assert_eq!(id, again);
    assert_eq!(registry.len(), 2);
    assert_eq!(contents(&registry, "A", SlotOrder::Append), vec!["v2", "other"]);
}

#[test]
fn test_register_with_returned_id_keeps_length_one() {
    let registry = SlotRegistry::new();
    let id = registry.register(None, "A", 1, FillMeta::new());
    let same = registry.register(Some(id), "A", 2, FillMeta::new());

    assert_eq!(id, same);
    assert_eq!(registry.len(), 1);
    assert_eq!(contents(&registry, "A", SlotOrder::Append), vec![2]);
}

#[test]
fn test_query_is_scoped_to_name() {
    let registry = SlotRegistry::new();
    registry.register(None, "A", "a1", FillMeta::new());
    registry.register(None, "B", "b1", FillMeta::new());
    registry.register(None, "A", "a2", FillMeta::new());

    assert_eq!(contents(&registry, "A", SlotOrder::Append), vec!["a1", "a2"]);
    assert_eq!(contents(&registry, "B", SlotOrder::Append), vec!["b1"]);
    assert!(contents(&registry, "C", SlotOrder::Append).is_empty());
}

#[test]
fn test_unregister_twice_is_noop() {
    let registry = SlotRegistry::new();
    let keep = registry.register(None, "A", "keep", FillMeta::new());
    let gone = registry.register(None, "A", "gone", FillMeta::new());

    registry.unregister(gone);
    registry.unregister(gone);

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(keep));
    assert!(!registry.contains(gone));
}

#[test]
fn test_dropping_fill_unregisters() {
    let registry = SlotRegistry::new();
    {
        let mut fill = Fill::new(&registry, "A");
        fill.render("transient", FillMeta::new());
        assert_eq!(registry.len(), 1);
    }
    assert!(registry.is_empty());
}

#[test]
fn test_retarget_moves_fill_between_slots() {
    let registry = SlotRegistry::new();
    let mut fill = Fill::new(&registry, names::STATUS_BAR_FILE);
    fill.render("item", FillMeta::new());

    fill.retarget(names::STATUS_BAR_APP);
    fill.render("item", FillMeta::new());

    assert!(contents(&registry, names::STATUS_BAR_FILE, SlotOrder::Append).is_empty());
    assert_eq!(
        contents(&registry, names::STATUS_BAR_APP, SlotOrder::Append),
        vec!["item"]
    );
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn test_priority_order_independent_of_registration_order() {
    for reversed in [false, true] {
        let registry = SlotRegistry::new();
        let mut entries = vec![("low", 1), ("high", 2)];
        if reversed {
            entries.reverse();
        }
        for (content, priority) in entries {
            registry.register(None, "tabs", content, FillMeta::new().with_priority(priority));
        }

        let priorities: Vec<_> = registry
            .query("tabs", SlotOrder::Priority)
            .into_iter()
            .map(|r| r.meta.priority)
            .collect();
        assert_eq!(priorities, vec![Some(2), Some(1)]);
    }
}

#[test]
fn test_priority_ties_keep_registration_order() {
    let registry = SlotRegistry::new();
    registry.register(None, "tabs", "first", FillMeta::new().with_priority(1));
    registry.register(None, "tabs", "second", FillMeta::new().with_priority(1));

    assert_eq!(
        contents(&registry, "tabs", SlotOrder::Priority),
        vec!["first", "second"]
    );
}

#[test]
fn test_grouped_order_buckets_by_group() {
    let registry = SlotRegistry::new();
    registry.register(None, "bar", "loose", FillMeta::new());
    registry.register(None, "bar", "lint", FillMeta::new().with_group("1_linting"));
    registry.register(
        None,
        "bar",
        "deploy",
        FillMeta::new().with_group("2_deploy").with_priority(1),
    );
    registry.register(
        None,
        "bar",
        "start",
        FillMeta::new().with_group("2_deploy").with_priority(5),
    );

    assert_eq!(
        contents(&registry, "bar", SlotOrder::Grouped),
        vec!["lint", "start", "deploy", "loose"]
    );
}

#[test]
fn test_status_bar_scenario() {
    let registry = SlotRegistry::new();
    let mut a = Fill::new(&registry, names::STATUS_BAR_FILE);
    let mut b = Fill::new(&registry, names::STATUS_BAR_FILE);
    let mut c = Fill::new(&registry, names::STATUS_BAR_FILE);
    a.render("A", FillMeta::new());
    b.render("B", FillMeta::new().with_priority(2));
    c.render("C", FillMeta::new().with_priority(1));

    let mut additive = StatusBar::new(&registry);
    assert_eq!(
        additive.render(),
        StatusBarView {
            file: vec!["A", "B", "C"],
            app: vec![],
        }
    );

    let mut prioritized = Slot::new(&registry, names::STATUS_BAR_FILE, SlotOrder::Priority);
    let labels: Vec<_> = prioritized.map(|r| r.content);
    assert_eq!(labels, vec!["B", "C"]);
}

// =============================================================================
// Consumers
// =============================================================================

#[test]
fn test_consumer_sees_changes_only_for_its_name() {
    let registry = SlotRegistry::new();
    let mut tabs = Slot::new(&registry, names::BOTTOM_PANEL, SlotOrder::Priority);
    tabs.mark_seen();

    registry.register(None, names::STATUS_BAR_APP, "elsewhere", FillMeta::new());
    assert!(!tabs.poll_changed());

    let mut fill = Fill::new(&registry, names::BOTTOM_PANEL);
    fill.render("log", FillMeta::new().with_priority(1));
    assert!(tabs.poll_changed());

    assert_eq!(tabs.items().len(), 1);
    assert!(!tabs.poll_changed());

    drop(fill);
    assert!(tabs.poll_changed());
    assert_eq!(tabs.count(), 0);
}

#[test]
fn test_consumer_limit() {
    let registry = SlotRegistry::new();
    for i in 0..5 {
        registry.register(None, "list", i, FillMeta::new());
    }
    let mut slot = Slot::new(&registry, "list", SlotOrder::Append).with_limit(3);
    assert_eq!(slot.map(|r| r.content), vec![0, 1, 2]);
}

#[test]
fn test_props_pass_through() {
    let registry = SlotRegistry::new();
    let id = registry.register(
        None,
        "A",
        "x",
        FillMeta::new()
            .with_key("log")
            .with_prop("tab", serde_json::json!("linting"))
            .with_prop("extra", serde_json::json!({ "nested": [1, 2] })),
    );

    let registration = registry.get(id).unwrap();
    assert_eq!(registration.meta.key(), Some("log"));
    assert_eq!(registration.meta.prop_str("tab"), Some("linting"));
    assert_eq!(
        registration.meta.props.get("extra"),
        Some(&serde_json::json!({ "nested": [1, 2] }))
    );
}
