//! Use-Case: Scheduler fortschreiben und Tween-Events verteilen.

use super::{instructions, interaction, simulation};
use crate::app::animation::{TweenEvent, TweenTarget};
use crate::app::state::InteractionEvent;
use crate::app::AppState;

/// Schreibt alle Tweens um `dt` fort und verteilt die Events an ihre Empfänger.
pub fn advance(state: &mut AppState, dt: f32) {
    let events = state.animations.advance(dt);
    dispatch(state, events);
}

/// Verteilt bereits erzeugte Tween-Events (auch für fremde Scheduler).
pub fn dispatch(state: &mut AppState, events: Vec<TweenEvent>) {
    for event in events {
        match event {
            TweenEvent::Tick {
                handle,
                target: TweenTarget::Rider,
                value,
            } => simulation::apply_tick(state, handle, value),
            TweenEvent::Completed {
                handle,
                target: TweenTarget::Rider,
            } => interaction::step(state, InteractionEvent::SimulationCompleted(handle)),
            TweenEvent::Tick {
                handle,
                target: TweenTarget::Instructions,
                value,
            } => instructions::apply_tick(state, handle, value),
            TweenEvent::Completed {
                handle,
                target: TweenTarget::Instructions,
            } => instructions::complete(state, handle),
        }
    }
}
