//! Orthografische Abbildung Canvas-Pixel ↔ Bildschirm.
//!
//! Der Canvas-Raum hat seinen Ursprung oben links, +y zeigt nach unten, und
//! ein Canvas-Pixel entspricht einem Bildschirm-Punkt. Bei Größenänderung
//! wandern nur die Grenzen mit, bestehende Anker behalten ihre Koordinaten.

use glam::Vec2;

/// Projektion des Canvas in den Bildschirm.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasProjection {
    /// Obere linke Ecke des Canvas in Bildschirmkoordinaten
    pub origin: Vec2,
    /// Canvas-Größe in Pixeln
    pub size: Vec2,
}

impl CanvasProjection {
    /// Erstellt eine Projektion für ein Canvas-Rechteck.
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Bildschirmposition → Canvas-Pixel.
    pub fn screen_to_canvas(&self, screen_pos: Vec2) -> Vec2 {
        screen_pos - self.origin
    }

    /// Canvas-Pixel → Bildschirmposition.
    pub fn canvas_to_screen(&self, canvas_pos: Vec2) -> Vec2 {
        canvas_pos + self.origin
    }

    /// Liegt der Canvas-Punkt innerhalb der aktuellen Grenzen?
    pub fn contains(&self, canvas_pos: Vec2) -> bool {
        canvas_pos.x >= 0.0
            && canvas_pos.y >= 0.0
            && canvas_pos.x <= self.size.x
            && canvas_pos.y <= self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_and_canvas_round_trip() {
        let projection = CanvasProjection::new(Vec2::new(220.0, 30.0), Vec2::new(800.0, 600.0));
        let screen = Vec2::new(420.0, 130.0);

        let canvas = projection.screen_to_canvas(screen);
        assert_eq!(canvas, Vec2::new(200.0, 100.0));
        assert_eq!(projection.canvas_to_screen(canvas), screen);
    }

    #[test]
    fn contains_tracks_resized_bounds() {
        let mut projection = CanvasProjection::new(Vec2::ZERO, Vec2::new(100.0, 100.0));
        let p = Vec2::new(150.0, 50.0);
        assert!(!projection.contains(p));

        projection.size = Vec2::new(200.0, 100.0);
        assert!(projection.contains(p));
    }
}
