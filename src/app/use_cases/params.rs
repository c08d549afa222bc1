//! Use-Case: Slider-Parameter und Distanzfelder.

use crate::app::state::{AnchorId, InteractionState};
use crate::app::AppState;
use crate::core::m_to_px;

/// Kennzahlen werden erst angezeigt, wenn das Seil fertig platziert ist.
fn metrics_visible(state: &AppState) -> bool {
    !matches!(
        state.interaction,
        InteractionState::PlacingStart | InteractionState::PlacingEnd
    )
}

/// Begrenzt `value` auf `[min, max]`; bei `min > max` gewinnt `max`.
fn limit(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

fn rebuild(state: &mut AppState) {
    state.session.rebuild_curve();
    if metrics_visible(state) {
        state.session.refresh_metrics();
    }
}

/// Setzt den Spannungsfaktor (begrenzt auf den Slider-Bereich).
pub fn set_tension(state: &mut AppState, value: f32) {
    if !value.is_finite() {
        return;
    }
    state.session.params.tension = limit(value, 0.0, state.options.tension_max);
    rebuild(state);
}

/// Setzt das Fahrergewicht in kg.
pub fn set_rider_weight(state: &mut AppState, value: f32) {
    if !value.is_finite() {
        return;
    }
    state.session.params.rider_weight_kg = limit(
        value,
        state.options.rider_weight_min_kg,
        state.options.rider_weight_max_kg,
    );
    if metrics_visible(state) {
        state.session.refresh_metrics();
    }
}

/// Setzt den Luftwiderstandsfaktor.
///
/// Werte außerhalb von [0, 1] beeinflussen die Geschwindigkeit ohne Prüfung;
/// begrenzt wird nur auf den Slider-Bereich.
pub fn set_drag_coefficient(state: &mut AppState, value: f32) {
    if !value.is_finite() {
        return;
    }
    state.session.params.drag_coefficient = limit(value, 0.0, state.options.drag_coefficient_max);
    if metrics_visible(state) {
        state.session.refresh_metrics();
    }
}

/// Verschiebt den Endanker horizontal auf `start.x + meters`.
pub fn set_horizontal_distance(state: &mut AppState, meters: f32) {
    move_end_anchor(state, |start, end| {
        end.x = start.x + m_to_px(meters);
    });
}

/// Verschiebt den Endanker vertikal auf `start.y + meters`.
pub fn set_vertical_drop(state: &mut AppState, meters: f32) {
    move_end_anchor(state, |start, end| {
        end.y = start.y + m_to_px(meters);
    });
}

fn move_end_anchor(state: &mut AppState, update: impl FnOnce(glam::Vec2, &mut glam::Vec2)) {
    if !state.interaction.fields_editable() {
        log::debug!(
            "Distanzfeld im Zustand {} gesperrt",
            state.interaction.name()
        );
        return;
    }
    let Some((start, mut end)) = state.session.anchors.both() else {
        return;
    };
    update(start, &mut end);
    state.session.anchors.set(AnchorId::End, end);
    rebuild(state);
}
