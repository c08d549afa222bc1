//! Zipline-Simulator.
//!
//! Seilbahn auf einer Fläche entwerfen, Durchhang und Fahrerparameter
//! einstellen und die Fahrt entlang des Seils animieren.

use eframe::egui;
use zipline_simulator::core::CanvasProjection;
use zipline_simulator::{
    render, ui, AppController, AppIntent, AppState, CursorHint, SimulatorOptions,
};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!("Zipline-Simulator v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Zipline-Simulator"),
            ..Default::default()
        };

        eframe::run_native(
            "Zipline-Simulator",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(SimulatorApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SimulatorApp {
    state: AppState,
    controller: AppController,
    controls: ui::ControlsPanel,
    input: ui::InputState,
}

impl SimulatorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SimulatorOptions::config_path();
        let options = SimulatorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            controls: ui::ControlsPanel::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SimulatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let dt = ctx.input(|i| i.stable_dt);
        let mut events = vec![AppIntent::FrameAdvanced { dt }];
        events.extend(self.collect_panel_events(ctx));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let projection = canvas_projection(rect);

                events.extend(self.input.collect_canvas_events(ui, &response, &projection));
                self.process_events(std::mem::take(&mut events));

                // Szene erst nach allen Events dieses Frames bauen
                let scene = self.controller.build_render_scene(&self.state);
                let banner = &self.state.ui.instructions;
                render::paint_scene(ui, rect, &scene);
                render::paint_instructions(ui, rect, &banner.text, banner.opacity);

                if response.hovered() {
                    ctx.set_cursor_icon(cursor_icon(self.state.ui.cursor));
                }
            });

        self.maybe_request_repaint(ctx);
    }
}

impl SimulatorApp {
    fn collect_panel_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_data_panel(ctx, &self.state);
        events.extend(self.controls.show(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.animations.active_count() > 0
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.ui.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}

fn canvas_projection(rect: egui::Rect) -> CanvasProjection {
    CanvasProjection::new(
        glam::Vec2::new(rect.min.x, rect.min.y),
        glam::Vec2::new(rect.width(), rect.height()),
    )
}

fn cursor_icon(hint: CursorHint) -> egui::CursorIcon {
    match hint {
        CursorHint::Default => egui::CursorIcon::Default,
        CursorHint::Crosshair => egui::CursorIcon::Crosshair,
        CursorHint::Grab => egui::CursorIcon::Grab,
        CursorHint::Grabbing => egui::CursorIcon::Grabbing,
    }
}
