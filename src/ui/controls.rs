//! Steuerpanel links: Parameter-Slider, Distanzfelder, Umgebung, Aktionen.

use crate::app::{AppIntent, AppState};
use crate::core::metrics::field_label;
use crate::core::Environment;

/// Bearbeitungspuffer der beiden Distanzfelder.
///
/// Solange ein Feld nicht fokussiert ist, zeigt es den aktuellen Wert aus
/// den Kennzahlen. Übernommen wird erst beim Verlassen des Felds.
#[derive(Debug, Default)]
pub struct ControlsPanel {
    horizontal: String,
    vertical: String,
}

impl ControlsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert das Panel und gibt erzeugte Events zurück.
    pub fn show(&mut self, ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let params = state.session.params;
        let options = &state.options;

        egui::SidePanel::left("controls_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Seilbahn");
                ui.separator();

                // ── Parameter ───────────────────────────────────────
                let mut tension = params.tension;
                ui.label("Spannung:");
                if ui
                    .add(egui::Slider::new(&mut tension, 0.0..=options.tension_max).step_by(0.01))
                    .changed()
                {
                    events.push(AppIntent::TensionChanged { value: tension });
                }

                let mut weight = params.rider_weight_kg;
                ui.horizontal(|ui| {
                    ui.label("Gewicht:");
                    ui.label(format!("{:.0} kg", weight));
                });
                if ui
                    .add(
                        egui::Slider::new(&mut weight, options.rider_weight_range())
                            .step_by(1.0)
                            .show_value(false),
                    )
                    .changed()
                {
                    events.push(AppIntent::RiderWeightChanged { value: weight });
                }

                let mut drag = params.drag_coefficient;
                ui.horizontal(|ui| {
                    ui.label("Luftwiderstand:");
                    ui.label(format!("{:.2}", drag));
                });
                if ui
                    .add(
                        egui::Slider::new(&mut drag, 0.0..=options.drag_coefficient_max)
                            .step_by(0.01)
                            .show_value(false),
                    )
                    .changed()
                {
                    events.push(AppIntent::DragCoefficientChanged { value: drag });
                }

                ui.separator();

                // ── Distanzfelder ───────────────────────────────────
                let editable = state.interaction.fields_editable();
                let metrics = &state.session.metrics;

                ui.label("Horizontale Distanz (m):");
                if let Some(text) = distance_field(
                    ui,
                    "horizontal_distance",
                    &mut self.horizontal,
                    field_label(metrics.horizontal_m),
                    editable,
                ) {
                    events.push(AppIntent::HorizontalDistanceEdited { text });
                }

                ui.label("Vertikaler Abfall (m):");
                if let Some(text) = distance_field(
                    ui,
                    "vertical_drop",
                    &mut self.vertical,
                    field_label(metrics.vertical_m),
                    editable,
                ) {
                    events.push(AppIntent::VerticalDropEdited { text });
                }

                ui.separator();

                // ── Umgebung ────────────────────────────────────────
                let mut environment = state.view.environment;
                egui::ComboBox::from_label("Umgebung")
                    .selected_text(environment.label())
                    .show_ui(ui, |ui| {
                        for env in Environment::ALL {
                            ui.selectable_value(&mut environment, env, env.label());
                        }
                    });
                if environment != state.view.environment {
                    events.push(AppIntent::EnvironmentSelected { environment });
                }

                ui.separator();

                // ── Aktionen ────────────────────────────────────────
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(
                            state.interaction.can_simulate(),
                            egui::Button::new("Simulieren"),
                        )
                        .clicked()
                    {
                        events.push(AppIntent::SimulateRequested);
                    }
                    if ui.button("Zurücksetzen").clicked() {
                        events.push(AppIntent::ResetRequested);
                    }
                });

                ui.add_space(8.0);
                if ui.button("Optionen…").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                }
            });

        events
    }
}

/// Zeichnet ein Distanzfeld. Liefert den Text, wenn er übernommen werden soll.
fn distance_field(
    ui: &mut egui::Ui,
    id_salt: &str,
    buffer: &mut String,
    current: String,
    editable: bool,
) -> Option<String> {
    let id = ui.make_persistent_id(id_salt);
    let has_focus = ui.memory(|m| m.has_focus(id));
    if !has_focus {
        buffer.clone_from(&current);
    }

    let response = ui.add_enabled(
        editable,
        egui::TextEdit::singleline(buffer).id(id).desired_width(120.0),
    );

    if response.lost_focus() && editable {
        committed_text(buffer, &current)
    } else {
        None
    }
}

/// Übernimmt den Feldtext nur, wenn er sich vom angezeigten Wert unterscheidet.
fn committed_text(buffer: &str, current: &str) -> Option<String> {
    (buffer.trim() != current).then(|| buffer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_field_is_not_committed() {
        assert_eq!(committed_text("20.4", "20.4"), None);
        assert_eq!(committed_text(" 20.4 ", "20.4"), None);
    }

    #[test]
    fn edited_field_is_committed() {
        assert_eq!(committed_text("21", "20.4"), Some("21".to_string()));
        assert_eq!(committed_text("", "20.4"), Some(String::new()));
    }
}
