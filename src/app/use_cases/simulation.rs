//! Use-Case: Fahrt des Fahrers entlang des Seils.
//!
//! Die Fahrt ist ein Tween auf dem `TweenTarget::Rider`. Ticks und Abschluss
//! werden nur akzeptiert, wenn ihr Handle zur laufenden Fahrt gehört.

use crate::app::animation::{Easing, TweenHandle, TweenTarget};
use crate::app::state::{Rider, SimulationRun};
use crate::app::AppState;
use crate::core::CableMetrics;

/// Plant eine neue Fahrt auf der aktuellen Kurve.
///
/// Liefert `None` ohne Kurve. Eine eventuell noch geplante Fahrt wird
/// vorher abgebrochen.
pub fn begin_run(state: &mut AppState) -> Option<SimulationRun> {
    let curve = state.session.curve?;
    let params = state.session.params;
    let metrics = CableMetrics::compute(&curve, params.rider_weight_kg, params.drag_coefficient);
    let duration_s = state
        .options
        .run_timing()
        .duration_s(metrics.length_m, metrics.max_speed_ms);

    state.animations.cancel_target(TweenTarget::Rider);
    let handle = state
        .animations
        .schedule(TweenTarget::Rider, duration_s, Easing::QuadIn);

    state.session.metrics = metrics;
    state.session.rider = Some(Rider {
        position: curve.start(),
        parked: false,
    });

    log::info!(
        "Fahrt gestartet: {:.2} m, v_max {:.2} m/s, Dauer {:.2} s",
        metrics.length_m,
        metrics.max_speed_ms,
        duration_s
    );

    Some(SimulationRun {
        handle,
        duration_s,
        max_speed_ms: metrics.max_speed_ms,
    })
}

/// Bewegt den Fahrer auf `point_at(t)` der aktuellen Kurve.
pub fn apply_tick(state: &mut AppState, handle: TweenHandle, t: f32) {
    let Some(run) = state.interaction.active_run() else {
        log::debug!("Fahrer-Tick {:?} außerhalb einer Fahrt ignoriert", handle);
        return;
    };
    if run.handle != handle {
        log::debug!("Veralteter Fahrer-Tick {:?} ignoriert", handle);
        return;
    }
    if let (Some(curve), Some(rider)) = (&state.session.curve, &mut state.session.rider) {
        rider.position = curve.point_at(t);
    }
}

/// Parkt den Fahrer am Seilende (nach abgeschlossener Fahrt).
pub fn park_rider(state: &mut AppState) {
    state.session.rider = state.session.curve.map(|curve| Rider {
        position: curve.point_at(1.0),
        parked: true,
    });
}

/// Bricht den Tween der laufenden Fahrt ab. Der Zustand bleibt unverändert.
pub fn cancel_run(state: &mut AppState) {
    let Some(run) = state.interaction.active_run().copied() else {
        return;
    };
    if state.animations.cancel(run.handle) {
        log::info!("Fahrt {:?} abgebrochen", run.handle);
    }
}
