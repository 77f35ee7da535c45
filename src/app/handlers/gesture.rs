//! Handler für Zeigerereignisse der Erstellungsmodi.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

pub fn press(state: &mut AppState, pos: GeoPoint) {
    use_cases::gesture::press(state, pos);
}

pub fn move_to(state: &mut AppState, pos: GeoPoint) {
    use_cases::gesture::move_to(state, pos);
}

pub fn release(state: &mut AppState, pos: GeoPoint) {
    use_cases::gesture::release(state, pos);
}

pub fn click(state: &mut AppState, pos: GeoPoint) {
    use_cases::gesture::click(state, pos);
}
