//! Zeichnen der Szene mit dem egui-Painter.
//!
//! Alle Positionen der `RenderScene` sind Canvas-Pixel; die Projektion auf
//! Bildschirmkoordinaten übernimmt `CanvasProjection`.

pub use crate::shared::RenderScene;

use crate::core::CanvasProjection;
use eframe::egui;
use glam::Vec2;

/// Wandelt eine RGBA-Farbe (0.0–1.0) in eine egui-Farbe um.
pub fn color32(color: [f32; 4]) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        channel(color[3]),
    )
}

fn to_pos(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

/// Zeichnet Hintergrund, Seil, Anker und Fahrer in `rect`.
pub fn paint_scene(ui: &egui::Ui, rect: egui::Rect, scene: &RenderScene) {
    let painter = ui.painter_at(rect);
    let options = &scene.options;
    let projection = CanvasProjection::new(
        Vec2::new(rect.min.x, rect.min.y),
        Vec2::new(rect.width(), rect.height()),
    );

    painter.rect_filled(rect, 0.0, color32(options.canvas_color));
    if let Some(uri) = scene.environment.image_uri(&options.assets_dir) {
        egui::Image::new(uri).paint_at(ui, rect);
    }

    if scene.has_cable() {
        let points: Vec<egui::Pos2> = scene
            .cable
            .iter()
            .map(|p| to_pos(projection.canvas_to_screen(*p)))
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(options.cable_width_px, color32(options.cable_color)),
        ));
    }

    let anchors = [
        (scene.start_anchor, options.anchor_start_color),
        (scene.end_anchor, options.anchor_end_color),
    ];
    for (anchor, color) in anchors {
        let Some(anchor) = anchor else {
            continue;
        };
        let center = to_pos(projection.canvas_to_screen(anchor));
        let size = egui::vec2(options.anchor_size_px, options.anchor_size_px);
        painter.rect_filled(
            egui::Rect::from_center_size(center, size),
            2.0,
            color32(color),
        );
    }

    if let Some(rider) = scene.rider {
        painter.circle_filled(
            to_pos(projection.canvas_to_screen(rider)),
            options.rider_radius_px,
            color32(options.rider_color),
        );
    }
}

/// Zeichnet den Hinweistext oben mittig über die Canvas.
pub fn paint_instructions(ui: &egui::Ui, rect: egui::Rect, text: &str, opacity: f32) {
    if text.is_empty() || opacity <= 0.0 {
        return;
    }
    let painter = ui.painter_at(rect);
    let color = egui::Color32::WHITE.gamma_multiply(opacity.clamp(0.0, 1.0));
    let shadow = egui::Color32::BLACK.gamma_multiply(opacity.clamp(0.0, 1.0) * 0.6);
    let anchor = rect.center_top() + egui::vec2(0.0, 16.0);
    let font = egui::FontId::proportional(18.0);

    painter.text(
        anchor + egui::vec2(1.0, 1.0),
        egui::Align2::CENTER_TOP,
        text,
        font.clone(),
        shadow,
    );
    painter.text(anchor, egui::Align2::CENTER_TOP, text, font, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color32_maps_unit_range_to_bytes() {
        assert_eq!(
            color32([1.0, 0.0, 0.0, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255)
        );
        assert_eq!(
            color32([2.0, -1.0, 0.5, 1.0]),
            egui::Color32::from_rgba_unmultiplied(255, 0, 128, 255)
        );
    }
}
