//! Datenpanel am unteren Bildschirmrand: Status und Kennzahlen.

use crate::app::AppState;

/// Rendert das Datenpanel
pub fn render_data_panel(ctx: &egui::Context, state: &AppState) {
    let metrics = &state.session.metrics;

    egui::TopBottomPanel::bottom("data_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&state.ui.status).strong());

            ui.separator();
            ui.label(format!("Länge: {}", metrics.length_label()));

            ui.separator();
            ui.label(format!("Höhendifferenz: {}", metrics.height_diff_label()));

            ui.separator();
            ui.label(format!("Steigung: {}", metrics.slope_label()));

            ui.separator();
            ui.label(format!("Max. Geschwindigkeit: {}", metrics.speed_label()));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
