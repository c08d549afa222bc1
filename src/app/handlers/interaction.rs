//! Handler für Zeiger-Eingaben auf der Canvas.

use crate::app::state::InteractionEvent;
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Maustaste gedrückt (Platzieren oder Drag-Start).
pub fn pointer_down(state: &mut AppState, pos: Vec2) {
    use_cases::interaction::step(state, InteractionEvent::PointerDown(pos));
}

/// Mausbewegung (Vorschau, Drag oder Hover).
pub fn pointer_move(state: &mut AppState, pos: Vec2) {
    use_cases::interaction::step(state, InteractionEvent::PointerMove(pos));
}

/// Maustaste losgelassen (Drag beenden).
pub fn pointer_up(state: &mut AppState) {
    use_cases::interaction::step(state, InteractionEvent::PointerUp);
}

/// Setzt die Sitzung auf den Anfang zurück.
pub fn reset(state: &mut AppState) {
    use_cases::interaction::step(state, InteractionEvent::Reset);
}
