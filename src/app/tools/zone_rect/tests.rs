use super::super::{GestureAction, GestureCommit, GestureTool};
use super::ZoneRectTool;
use crate::core::{GeoBounds, GeoPoint};
use crate::shared::Overlay;

const NE: GeoPoint = GeoPoint::new(48.95, 21.2);
const SW: GeoPoint = GeoPoint::new(48.9, 21.1);

#[test]
fn test_drag_flow_commits_normalized_bounds() {
    let mut tool = ZoneRectTool::new();

    // Von Nord-Ost nach Süd-West ziehen
    assert_eq!(tool.on_press(NE), GestureAction::Updated);
    assert_eq!(
        tool.on_move(GeoPoint::new(48.92, 21.15)),
        GestureAction::Updated
    );
    let action = tool.on_release(SW);

    let expected = GeoBounds::from_corners(SW, NE);
    assert_eq!(action, GestureAction::Commit(GestureCommit::Zone(expected)));
    assert_eq!(expected.south_west, SW);
    assert!(tool.overlay().is_none());
    assert!(tool.is_awaiting_accept());
}

#[test]
fn test_overlay_follows_pointer() {
    let mut tool = ZoneRectTool::new();
    tool.on_press(SW);
    tool.on_move(NE);

    assert_eq!(
        tool.overlay(),
        Some(Overlay::Rectangle(GeoBounds::from_corners(SW, NE)))
    );
    assert!(tool.has_pending_input());
}

#[test]
fn test_latch_blocks_second_rectangle() {
    let mut tool = ZoneRectTool::new();
    tool.on_press(SW);
    tool.on_release(NE);

    assert_eq!(tool.on_press(SW), GestureAction::Ignored);
    assert!(tool.overlay().is_none());

    // Erfolgreiche Antwort hält die Sperre
    tool.on_commit_settled(true);
    assert!(tool.is_awaiting_accept());

    // Lösen vom Eingabestrom gibt frei
    tool.detach();
    assert!(!tool.is_awaiting_accept());
    assert_eq!(tool.on_press(SW), GestureAction::Updated);
}

#[test]
fn test_rejected_commit_releases_latch() {
    let mut tool = ZoneRectTool::new();
    tool.on_press(SW);
    tool.on_release(NE);

    tool.on_commit_settled(false);

    assert!(!tool.is_awaiting_accept());
    assert_eq!(tool.on_press(SW), GestureAction::Updated);
}

#[test]
fn test_zero_area_release_is_discarded() {
    let mut tool = ZoneRectTool::new();
    tool.on_press(SW);

    assert_eq!(tool.on_release(SW), GestureAction::Updated);
    assert!(!tool.is_awaiting_accept());
    assert!(!tool.has_pending_input());
}

#[test]
fn test_move_and_release_without_press_are_ignored() {
    let mut tool = ZoneRectTool::new();
    assert_eq!(tool.on_move(NE), GestureAction::Ignored);
    assert_eq!(tool.on_release(NE), GestureAction::Ignored);
    assert_eq!(tool.on_click(NE), GestureAction::Ignored);
}

#[test]
fn test_detach_discards_live_rectangle() {
    let mut tool = ZoneRectTool::new();
    tool.on_press(SW);
    tool.on_move(NE);

    tool.detach();

    assert!(tool.overlay().is_none());
    assert_eq!(tool.on_release(NE), GestureAction::Ignored);
}
