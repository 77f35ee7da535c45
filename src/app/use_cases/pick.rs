//! Treffer-Test für Klicks auf die Karte im Navigationsmodus.

use crate::app::AppState;
use crate::core::GeoPoint;
use glam::DVec2;

/// Getroffenes Objekt unter dem Mauszeiger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapPick {
    Position(String),
    Zone(String),
}

/// Sucht das Objekt an `pos`.
///
/// Marker haben Vorrang (Trefferradius in Pixel), danach die kleinste Zone
/// der expandierten Sicht, die den Punkt enthält.
pub fn pick_at(state: &AppState, pos: GeoPoint) -> Option<MapPick> {
    let camera = &state.view.camera;
    let viewport = state.view.viewport();
    let click_px = camera.geo_to_screen(pos, viewport);
    let radius = f64::from(state.options.marker_radius_px) + 3.0;

    let nearest_mark = state
        .positions
        .marks()
        .values()
        .map(|mark| {
            let px = camera.geo_to_screen(mark.position(), viewport);
            (mark, px.distance(click_px))
        })
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((mark, _)) = nearest_mark {
        return Some(MapPick::Position(mark.id.clone()));
    }

    state
        .zones
        .expanded()
        .into_values()
        .filter(|zone| zone.bounds.contains(&pos))
        .min_by(|a, b| area(a.bounds.to_rect()).total_cmp(&area(b.bounds.to_rect())))
        .map(|zone| MapPick::Zone(zone.id))
}

fn area(rect: [f64; 4]) -> f64 {
    let extent = DVec2::new(rect[2] - rect[0], rect[3] - rect[1]);
    extent.x * extent.y
}
