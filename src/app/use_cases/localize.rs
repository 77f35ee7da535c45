//! Setzt offene Localize-Anforderungen in Kamera-Befehle um.

use crate::app::AppState;
use crate::core::CameraCommand;

/// Arbeitet die Localize-Flags von Zonen und Positionen ab.
///
/// Zonen werden eingepasst (`FitBounds`), Positionen animiert angefahren
/// (`PanTo`). Die Flags werden in jedem Fall zurückgesetzt, auch wenn das
/// Ziel nicht mehr existiert.
pub fn apply(state: &mut AppState) {
    if state.zones.localizing {
        state.zones.localizing = false;
        match state.zones.selected_zone() {
            Some(zone) => {
                log::debug!("Kamera auf Zone {} ausrichten", zone.id);
                state.view.issue_camera_command(CameraCommand::FitBounds {
                    bounds: zone.bounds,
                    padding_px: state.options.fit_bounds_padding_px,
                });
            }
            None => log::warn!("Localize ohne selektierte Zone verworfen"),
        }
    }

    if state.positions.localizing {
        state.positions.localizing = false;
        match state.positions.selected_mark().map(|mark| mark.position()) {
            Some(target) => state.view.issue_camera_command(CameraCommand::PanTo {
                target,
                animate: true,
            }),
            None => log::warn!("Localize ohne selektierte Position verworfen"),
        }
    }
}
