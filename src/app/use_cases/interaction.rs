//! Use-Case: Zustandsübergänge der Canvas-Interaktion.
//!
//! `step` ist die einzige Stelle, an der `AppState::interaction` wechselt.
//! Alle abgeleiteten Werte (Kurve, Kennzahlen, Status, Hinweis, Cursor) sind
//! nach Rückkehr aktualisiert.

use super::{instructions, simulation};
use crate::app::state::{AnchorId, CursorHint, InteractionEvent, InteractionState};
use crate::app::AppState;
use glam::Vec2;

/// Führt ein Ereignis auf dem Zustandsautomaten aus.
pub fn step(state: &mut AppState, event: InteractionEvent) {
    use InteractionEvent as E;
    use InteractionState as S;

    let next = match (state.interaction, event) {
        (_, E::Reset) => {
            simulation::cancel_run(state);
            state.session.clear();
            Some(S::PlacingStart)
        }

        (S::Simulating { .. }, E::PointerDown(_) | E::PointerMove(_) | E::PointerUp) => None,

        (S::PlacingStart, E::PointerDown(pos)) => {
            state.session.anchors.set(AnchorId::Start, pos);
            Some(S::PlacingEnd)
        }

        (S::PlacingEnd, E::PointerMove(pos)) => {
            state.session.anchors.set(AnchorId::End, pos);
            state.session.rebuild_curve();
            None
        }
        (S::PlacingEnd, E::PointerDown(pos)) => {
            state.session.anchors.set(AnchorId::End, pos);
            state.session.rebuild_curve();
            Some(S::Ready)
        }

        (S::Ready, E::PointerDown(pos)) => {
            pick_anchor(state, pos).map(|anchor| S::Dragging { anchor })
        }
        (S::Ready, E::PointerMove(pos)) => {
            state.ui.cursor = if pick_anchor(state, pos).is_some() {
                CursorHint::Grab
            } else {
                CursorHint::Default
            };
            None
        }

        (S::Dragging { anchor }, E::PointerMove(pos)) => {
            state.session.anchors.set(anchor, pos);
            state.session.rebuild_curve();
            state.session.refresh_metrics();
            None
        }
        (S::Dragging { .. }, E::PointerUp) => Some(S::Ready),

        (S::Ready, E::StartSimulation) => {
            simulation::begin_run(state).map(|run| S::Simulating { run })
        }
        (S::Simulating { run }, E::SimulationCompleted(handle)) if run.handle == handle => {
            simulation::park_rider(state);
            log::info!("Fahrt {:?} abgeschlossen", handle);
            Some(S::Ready)
        }
        (_, E::SimulationCompleted(handle)) => {
            log::debug!("Veralteter Fahrt-Abschluss {:?} ignoriert", handle);
            None
        }

        (current, E::StartSimulation) => {
            log::debug!("Simulation im Zustand {} ignoriert", current.name());
            None
        }

        _ => None,
    };

    if let Some(next) = next {
        enter(state, next);
    }
}

/// Wechselt in einen Zustand und aktualisiert die Seiteneffekte.
fn enter(state: &mut AppState, next: InteractionState) {
    log::info!(
        "Interaktion: {} -> {}",
        state.interaction.name(),
        next.name()
    );
    state.interaction = next;

    if next == InteractionState::Ready {
        state.session.refresh_metrics();
    }
    if let Some(status) = next.status_label() {
        state.ui.status = status.to_string();
    }
    state.ui.cursor = next.cursor();
    instructions::request_text(state, next.instructions());
}

/// Nächster Anker strikt innerhalb des Pick-Radius.
pub fn pick_anchor(state: &AppState, pos: Vec2) -> Option<AnchorId> {
    let radius = state.options.anchor_pick_radius_px;
    AnchorId::BOTH
        .into_iter()
        .filter_map(|id| {
            state
                .session
                .anchors
                .get(id)
                .map(|anchor| (id, anchor.distance(pos)))
        })
        .filter(|(_, distance)| *distance < radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_state() -> AppState {
        let mut state = AppState::new();
        step(&mut state, InteractionEvent::PointerDown(Vec2::new(100.0, 100.0)));
        step(&mut state, InteractionEvent::PointerDown(Vec2::new(400.0, 300.0)));
        state
    }

    #[test]
    fn placement_goes_through_placing_end() {
        let mut state = AppState::new();

        step(&mut state, InteractionEvent::PointerDown(Vec2::new(10.0, 10.0)));
        assert_eq!(state.interaction, InteractionState::PlacingEnd);
        assert!(state.session.curve.is_none());

        step(&mut state, InteractionEvent::PointerDown(Vec2::new(90.0, 50.0)));
        assert_eq!(state.interaction, InteractionState::Ready);
        assert!(state.session.curve.is_some());
        assert_eq!(state.ui.status, "Bereit zur Simulation");
    }

    #[test]
    fn preview_moves_provisional_end_without_metrics() {
        let mut state = AppState::new();
        step(&mut state, InteractionEvent::PointerDown(Vec2::ZERO));

        step(&mut state, InteractionEvent::PointerMove(Vec2::new(50.0, 20.0)));

        assert_eq!(state.interaction, InteractionState::PlacingEnd);
        assert_eq!(
            state.session.curve.map(|c| c.end()),
            Some(Vec2::new(50.0, 20.0))
        );
        assert_eq!(state.session.metrics.length_m, 0.0);
    }

    #[test]
    fn pick_requires_strictly_inside_radius() {
        let state = ready_state();

        assert_eq!(
            pick_anchor(&state, Vec2::new(114.0, 100.0)),
            Some(AnchorId::Start)
        );
        assert_eq!(pick_anchor(&state, Vec2::new(115.0, 100.0)), None);
        assert_eq!(
            pick_anchor(&state, Vec2::new(400.0, 290.0)),
            Some(AnchorId::End)
        );
    }

    #[test]
    fn pick_prefers_nearer_anchor() {
        let mut state = AppState::new();
        step(&mut state, InteractionEvent::PointerDown(Vec2::new(100.0, 100.0)));
        step(&mut state, InteractionEvent::PointerDown(Vec2::new(110.0, 100.0)));

        assert_eq!(
            pick_anchor(&state, Vec2::new(108.0, 100.0)),
            Some(AnchorId::End)
        );
    }

    #[test]
    fn click_away_from_anchors_stays_ready() {
        let mut state = ready_state();

        step(&mut state, InteractionEvent::PointerDown(Vec2::new(250.0, 20.0)));

        assert_eq!(state.interaction, InteractionState::Ready);
    }

    #[test]
    fn hover_updates_cursor_only() {
        let mut state = ready_state();

        step(&mut state, InteractionEvent::PointerMove(Vec2::new(101.0, 101.0)));
        assert_eq!(state.ui.cursor, CursorHint::Grab);

        step(&mut state, InteractionEvent::PointerMove(Vec2::new(250.0, 20.0)));
        assert_eq!(state.ui.cursor, CursorHint::Default);
        assert_eq!(state.interaction, InteractionState::Ready);
    }

    #[test]
    fn drag_moves_anchor_and_updates_metrics_live() {
        let mut state = ready_state();
        let before = state.session.metrics;

        step(&mut state, InteractionEvent::PointerDown(Vec2::new(100.0, 100.0)));
        assert_eq!(
            state.interaction,
            InteractionState::Dragging {
                anchor: AnchorId::Start
            }
        );
        assert_eq!(state.ui.cursor, CursorHint::Grabbing);

        step(&mut state, InteractionEvent::PointerMove(Vec2::new(0.0, 0.0)));
        assert_ne!(state.session.metrics, before);
        assert_eq!(
            state.session.curve.map(|c| c.start()),
            Some(Vec2::new(0.0, 0.0))
        );

        step(&mut state, InteractionEvent::PointerUp);
        assert_eq!(state.interaction, InteractionState::Ready);
        assert_eq!(state.session.anchors.count(), 2);
    }

    #[test]
    fn simulating_ignores_pointer_input() {
        let mut state = ready_state();
        step(&mut state, InteractionEvent::StartSimulation);
        assert!(state.interaction.is_simulating());

        step(&mut state, InteractionEvent::PointerDown(Vec2::new(100.0, 100.0)));
        step(&mut state, InteractionEvent::PointerMove(Vec2::new(5.0, 5.0)));

        assert!(state.interaction.is_simulating());
        assert_eq!(
            state.session.anchors.get(AnchorId::Start),
            Some(Vec2::new(100.0, 100.0))
        );
    }

    #[test]
    fn completion_parks_rider_at_end() {
        let mut state = ready_state();
        step(&mut state, InteractionEvent::StartSimulation);
        let run = *state.interaction.active_run().unwrap();

        step(&mut state, InteractionEvent::SimulationCompleted(run.handle));

        assert_eq!(state.interaction, InteractionState::Ready);
        let rider = state.session.rider.unwrap();
        assert!(rider.parked);
        assert_eq!(rider.position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn reset_clears_everything() {
        let mut state = ready_state();
        step(&mut state, InteractionEvent::StartSimulation);

        step(&mut state, InteractionEvent::Reset);

        assert_eq!(state.interaction, InteractionState::PlacingStart);
        assert_eq!(state.session.anchors.count(), 0);
        assert!(state.session.curve.is_none());
        assert!(state.session.rider.is_none());
        assert_eq!(state.ui.status, "Warte auf Entwurf");
    }
}
