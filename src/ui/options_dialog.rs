//! Optionen-Dialog für Interaktion, Fahrt, Slider-Bereiche und Darstellung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Interaktion ─────────────────────────────────
                    ui.collapsing("Interaktion", |ui| {
                        changed |= drag_value(
                            ui,
                            "Pick-Radius (px):",
                            &mut opts.anchor_pick_radius_px,
                            4.0..=50.0,
                            0.5,
                        );
                    });

                    // ── Fahrt ───────────────────────────────────────
                    ui.collapsing("Fahrt", |ui| {
                        changed |= drag_value(
                            ui,
                            "Geschwindigkeitsfaktor:",
                            &mut opts.run_speed_factor,
                            0.1..=2.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Mindestdauer (s):",
                            &mut opts.run_min_duration_s,
                            0.1..=20.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Hinweis-Überblendung (s):",
                            &mut opts.instruction_fade_s,
                            0.0..=2.0,
                            0.01,
                        );
                    });

                    // ── Parameter ───────────────────────────────────
                    ui.collapsing("Parameter", |ui| {
                        changed |= drag_value(
                            ui,
                            "Spannung (Start):",
                            &mut opts.tension_default,
                            0.0..=1.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Spannung (max):",
                            &mut opts.tension_max,
                            0.1..=2.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Gewicht (Start, kg):",
                            &mut opts.rider_weight_default_kg,
                            1.0..=500.0,
                            1.0,
                        );
                        let weight_max = opts.rider_weight_max_kg;
                        changed |= drag_value(
                            ui,
                            "Gewicht (min, kg):",
                            &mut opts.rider_weight_min_kg,
                            1.0..=weight_max.max(1.0),
                            1.0,
                        );
                        let weight_min = opts.rider_weight_min_kg;
                        changed |= drag_value(
                            ui,
                            "Gewicht (max, kg):",
                            &mut opts.rider_weight_max_kg,
                            weight_min.min(500.0)..=500.0,
                            1.0,
                        );
                        changed |= drag_value(
                            ui,
                            "Luftwiderstand (Start):",
                            &mut opts.drag_coefficient_default,
                            0.0..=1.0,
                            0.01,
                        );
                        changed |= drag_value(
                            ui,
                            "Luftwiderstand (max):",
                            &mut opts.drag_coefficient_max,
                            0.0..=2.0,
                            0.01,
                        );
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        changed |= drag_value(
                            ui,
                            "Ankergröße (px):",
                            &mut opts.anchor_size_px,
                            4.0..=60.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Fahrer-Radius (px):",
                            &mut opts.rider_radius_px,
                            2.0..=40.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Seilbreite (px):",
                            &mut opts.cable_width_px,
                            0.5..=10.0,
                            0.1,
                        );
                        ui.horizontal(|ui| {
                            ui.label("Seil-Segmente:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.cable_render_segments)
                                        .range(4..=400),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Startanker:", &mut opts.anchor_start_color);
                        changed |= color_edit(ui, "Endanker:", &mut opts.anchor_end_color);
                        changed |= color_edit(ui, "Seil:", &mut opts.cable_color);
                        changed |= color_edit(ui, "Fahrer:", &mut opts.rider_color);
                        changed |= color_edit(ui, "Canvas:", &mut opts.canvas_color);
                        ui.horizontal(|ui| {
                            ui.label("Bildverzeichnis:");
                            changed |= ui.text_edit_singleline(&mut opts.assets_dir).changed();
                        });
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: beschriftetes DragValue für f32-Optionen.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        changed = ui
            .add(egui::DragValue::new(value).range(range).speed(speed))
            .changed();
    });
    changed
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::render::color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
