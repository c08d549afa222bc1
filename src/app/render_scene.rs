//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let session = &state.session;
    let cable = session
        .curve
        .map(|curve| curve.polyline(state.options.cable_render_segments))
        .unwrap_or_default();

    RenderScene {
        start_anchor: session.anchors.get(crate::app::state::AnchorId::Start),
        end_anchor: session.anchors.get(crate::app::state::AnchorId::End),
        cable,
        rider: session.rider.map(|rider| rider.position),
        environment: state.view.environment,
        canvas_size: state.view.canvas_size,
        options: state.options.clone(),
    }
}
