//! Handler für Slider-Parameter und Distanzfelder.

use crate::app::use_cases;
use crate::app::AppState;

pub fn set_tension(state: &mut AppState, value: f32) {
    use_cases::params::set_tension(state, value);
}

pub fn set_rider_weight(state: &mut AppState, value: f32) {
    use_cases::params::set_rider_weight(state, value);
}

pub fn set_drag_coefficient(state: &mut AppState, value: f32) {
    use_cases::params::set_drag_coefficient(state, value);
}

/// Übernimmt die horizontale Distanz aus dem Eingabefeld.
pub fn set_horizontal_distance(state: &mut AppState, meters: f32) {
    use_cases::params::set_horizontal_distance(state, meters);
}

/// Übernimmt den vertikalen Abfall aus dem Eingabefeld.
pub fn set_vertical_drop(state: &mut AppState, meters: f32) {
    use_cases::params::set_vertical_drop(state, meters);
}
