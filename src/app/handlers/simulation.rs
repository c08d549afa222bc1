//! Handler für Fahrt und Animationen.

use crate::app::state::InteractionEvent;
use crate::app::use_cases;
use crate::app::AppState;

/// Startet eine Fahrt (nur aus Ready wirksam).
pub fn start(state: &mut AppState) {
    use_cases::interaction::step(state, InteractionEvent::StartSimulation);
}

/// Bricht den Tween der laufenden Fahrt ab.
pub fn cancel(state: &mut AppState) {
    use_cases::simulation::cancel_run(state);
}

/// Schreibt die Animationen um einen Frame fort.
pub fn advance(state: &mut AppState, dt: f32) {
    use_cases::animation::advance(state, dt);
}
