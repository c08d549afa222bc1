//! Handler für Canvas-Größe und Hintergrund.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Environment;

/// Aktualisiert die Canvas-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Setzt die Hintergrund-Umgebung.
pub fn set_environment(state: &mut AppState, environment: Environment) {
    use_cases::viewport::set_environment(state, environment);
}
