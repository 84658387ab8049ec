//! Resizable container tests
//!
//! Drags are driven the way a host drives them: a press on the resizer, then
//! window-wide moves and a release.

mod common;

use modeler_shell::resize::{
    Axis, Direction, Geometry, PointerPosition, PointerStream, ResizableContainer, ResizeBounds,
    ResizeError, SizeSpec, Viewport, COLLAPSED_SIZE,
};

const VIEWPORT: Viewport = Viewport {
    width: 1000.0,
    height: 600.0,
};

fn right_edge(stream: &PointerStream, max: Option<SizeSpec>) -> ResizableContainer {
    let bounds = ResizeBounds::new(SizeSpec::Pixels(100.0), max).unwrap();
    ResizableContainer::new(Direction::Right, bounds, stream)
}

/// Drag the resizer so that the prospective size becomes `prospective`
fn drag_to(
    container: &mut ResizableContainer,
    committed: &Geometry,
    prospective: f64,
) -> Option<Geometry> {
    let start = committed.size.resolve(Axis::Horizontal, VIEWPORT);
    let origin = PointerPosition::new(start, 10.0);
    let target = container.direction().offset(origin, prospective - start);
    container.press(origin, committed, None, VIEWPORT);
    container.pointer_move(target, VIEWPORT);
    container.release(target, committed, VIEWPORT)
}

// =============================================================================
// Commit rules
// =============================================================================

#[test]
fn test_drag_below_threshold_closes_keeping_size() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, None);
    let committed = Geometry::new(true, SizeSpec::Pixels(300.0));

    let result = drag_to(&mut container, &committed, 25.0);
    assert_eq!(result, Some(Geometry::new(false, SizeSpec::Pixels(300.0))));
}

#[test]
fn test_drag_between_threshold_and_min_opens_at_min() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, None);
    let committed = Geometry::new(true, SizeSpec::Pixels(300.0));

    let result = drag_to(&mut container, &committed, 75.0);
    assert_eq!(result, Some(Geometry::new(true, SizeSpec::Pixels(100.0))));
}

#[test]
fn test_drag_past_max_commits_max() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, Some(SizeSpec::Pixels(500.0)));
    let committed = Geometry::new(true, SizeSpec::Pixels(300.0));

    let result = drag_to(&mut container, &committed, 900.0);
    assert_eq!(result, Some(Geometry::new(true, SizeSpec::Pixels(500.0))));
}

#[test]
fn test_drag_past_percent_max_commits_resolved_pixels() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, Some(SizeSpec::Percent(50.0)));
    let committed = Geometry::new(true, SizeSpec::Pixels(300.0));

    let result = drag_to(&mut container, &committed, 900.0);
    assert_eq!(result, Some(Geometry::new(true, SizeSpec::Pixels(500.0))));
}

#[test]
fn test_committed_open_size_always_within_bounds() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, Some(SizeSpec::Pixels(400.0)));
    let committed = Geometry::new(true, SizeSpec::Pixels(200.0));

    for prospective in [51.0, 60.0, 99.0, 100.0, 250.0, 400.0, 401.0, 5000.0] {
        let geometry = drag_to(&mut container, &committed, prospective).unwrap();
        assert!(geometry.open);
        let size = geometry.size.resolve(Axis::Horizontal, VIEWPORT);
        assert!((100.0..=400.0).contains(&size), "{} -> {}", prospective, size);
    }
}

// =============================================================================
// Clicks
// =============================================================================

#[test]
fn test_click_toggles_open_and_closed() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, None);
    let at = PointerPosition::new(300.0, 10.0);

    let open = Geometry::new(true, SizeSpec::Pixels(300.0));
    container.press(at, &open, None, VIEWPORT);
    let closed = container.release(at, &open, VIEWPORT).unwrap();
    assert_eq!(closed, Geometry::new(false, SizeSpec::Pixels(300.0)));

    container.press(at, &closed, None, VIEWPORT);
    let reopened = container.release(at, &closed, VIEWPORT).unwrap();
    assert_eq!(reopened, open);
}

#[test]
fn test_click_open_below_min_snaps_to_min() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, None);
    let at = PointerPosition::new(0.0, 0.0);
    let closed = Geometry::new(false, SizeSpec::Pixels(40.0));

    container.press(at, &closed, None, VIEWPORT);
    let opened = container.release(at, &closed, VIEWPORT).unwrap();
    assert_eq!(opened, Geometry::new(true, SizeSpec::Pixels(100.0)));
}

// =============================================================================
// Preview and listeners
// =============================================================================

#[test]
fn test_preview_does_not_touch_committed_geometry() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, None);
    let committed = Geometry::new(true, SizeSpec::Pixels(300.0));

    container.press(PointerPosition::new(300.0, 0.0), &committed, None, VIEWPORT);
    let preview = container
        .pointer_move(PointerPosition::new(20.0, 0.0), VIEWPORT)
        .unwrap();
    assert!(!preview.open);
    assert_eq!(preview.size, COLLAPSED_SIZE);
    assert_eq!(container.rendered_size(&committed, VIEWPORT), COLLAPSED_SIZE);

    container.cancel();
    assert_eq!(container.rendered_size(&committed, VIEWPORT), 300.0);
    assert!(container.rendered_open(&committed));
}

#[test]
fn test_listeners_detached_after_release_and_cancel() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, None);
    let committed = Geometry::new(true, SizeSpec::Pixels(300.0));

    drag_to(&mut container, &committed, 250.0);
    assert!(!stream.is_captured());

    container.press(PointerPosition::new(0.0, 0.0), &committed, None, VIEWPORT);
    assert!(stream.is_captured());
    container.cancel();
    assert!(!stream.is_captured());

    container.press(PointerPosition::new(0.0, 0.0), &committed, None, VIEWPORT);
    drop(container);
    assert!(!stream.is_captured());
}

#[test]
fn test_measured_size_is_drag_start() {
    let stream = PointerStream::new();
    let mut container = right_edge(&stream, None);
    let committed = Geometry::new(true, SizeSpec::Pixels(300.0));

    container.press(PointerPosition::new(0.0, 0.0), &committed, Some(280.0), VIEWPORT);
    let geometry = container
        .release(PointerPosition::new(10.0, 0.0), &committed, VIEWPORT)
        .unwrap();
    assert_eq!(geometry, Geometry::new(true, SizeSpec::Pixels(290.0)));
}

// =============================================================================
// Size specs
// =============================================================================

#[test]
fn test_percent_size_recomputed_on_viewport_change() {
    let stream = PointerStream::new();
    let container = right_edge(&stream, None);
    let committed = Geometry::new(true, SizeSpec::parse("50%").unwrap());

    assert_eq!(container.rendered_size(&committed, VIEWPORT), 500.0);
    assert_eq!(
        container.rendered_size(&committed, Viewport::new(1600.0, 900.0)),
        800.0
    );
}

#[test]
fn test_malformed_size_strings_rejected() {
    for input in ["300", "abc%", "%", "300px", "-5%", "0%"] {
        assert!(SizeSpec::parse(input).is_err(), "{:?} accepted", input);
    }
    assert!(matches!(
        SizeSpec::parse("30 px"),
        Err(ResizeError::Malformed(_))
    ));
}

#[test]
fn test_size_spec_serde_forms() {
    let px: SizeSpec = serde_json::from_str("300").unwrap();
    let pct: SizeSpec = serde_json::from_str("\"30%\"").unwrap();
    assert_eq!(px, SizeSpec::Pixels(300.0));
    assert_eq!(pct, SizeSpec::Percent(30.0));
    assert_eq!(serde_json::to_string(&pct).unwrap(), "\"30%\"");

    assert!(serde_json::from_str::<SizeSpec>("\"300\"").is_err());
    assert!(serde_json::from_str::<SizeSpec>("-1").is_err());
}

#[test]
fn test_inverted_bounds_rejected() {
    let result = ResizeBounds::new(SizeSpec::Pixels(400.0), Some(SizeSpec::Pixels(200.0)));
    assert!(matches!(result, Err(ResizeError::InvertedBounds { .. })));
}
