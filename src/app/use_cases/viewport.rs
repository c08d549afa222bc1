//! Use-Case-Funktionen für Canvas-Größe und Hintergrund.

use crate::app::AppState;
use crate::core::Environment;

/// Aktualisiert die gespeicherte Canvas-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.canvas_size = size;
}

/// Wählt die Hintergrund-Umgebung.
pub fn set_environment(state: &mut AppState, environment: Environment) {
    if state.view.environment != environment {
        log::info!("Umgebung: {}", environment.label());
    }
    state.view.environment = environment;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_updates_canvas_size() {
        let mut state = AppState::new();

        resize(&mut state, [1920.0, 1080.0]);

        assert_eq!(state.view.canvas_size, [1920.0, 1080.0]);
    }

    #[test]
    fn set_environment_updates_view() {
        let mut state = AppState::new();
        assert_eq!(state.view.environment, Environment::None);

        set_environment(&mut state, Environment::Cave);

        assert_eq!(state.view.environment, Environment::Cave);
    }
}
