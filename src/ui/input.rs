//! Canvas-Input-Handling: Maus-Events und Shortcuts → AppIntent.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::CanvasProjection;
use glam::Vec2;

/// Verwaltet den Zeiger-Zustand der Canvas zwischen Frames.
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Zeigerposition (Canvas-Pixel)
    last_pointer: Option<Vec2>,
    /// Maustaste wurde auf der Canvas gedrückt und ist noch unten
    pressed_on_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Bewegungen werden nur gemeldet, wenn sich die Position geändert hat.
    /// Während die Taste gedrückt ist, folgen sie dem Zeiger auch außerhalb
    /// der Canvas, damit ein Drag nicht abreißt.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        projection: &CanvasProjection,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: [projection.size.x, projection.size.y],
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        let (pressed, released, latest) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });
        let hovered = response.hovered();
        let canvas_pos = latest.map(|p| projection.screen_to_canvas(Vec2::new(p.x, p.y)));

        if let Some(pos) = canvas_pos {
            if (hovered || self.pressed_on_canvas) && self.last_pointer != Some(pos) {
                events.push(AppIntent::CanvasPointerMoved { pos });
            }
            self.last_pointer = Some(pos);
        }

        if pressed && hovered {
            if let Some(pos) = canvas_pos.filter(|pos| projection.contains(*pos)) {
                events.push(AppIntent::CanvasPointerPressed { pos });
                self.pressed_on_canvas = true;
            }
        }

        if released && self.pressed_on_canvas {
            events.push(AppIntent::CanvasPointerReleased);
            self.pressed_on_canvas = false;
        }

        events
    }
}
