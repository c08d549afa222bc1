//! Seilgeometrie: quadratische Bézier-Kurve zwischen zwei Ankern.
//!
//! Der Steuerpunkt liegt auf dem Mittelpunkt der Sehne, verschoben um
//! `Sehnenlänge × Spannungsfaktor` entlang der Bildschirm-Vertikalen
//! (+y = nach unten). Die Kurve ist eine reine Funktion ihrer Eingaben und
//! wird bei jeder Änderung komplett neu gebaut.

use super::units::px_to_m;
use glam::Vec2;

/// Anzahl Polylinien-Segmente für die Längenberechnung.
///
/// Die Polylinie ist der Kurve einbeschrieben, die berechnete Länge ist also
/// nie größer als die echte Bogenlänge. Für gerade Seile (Steuerpunkt auf der
/// Sehne) ist sie bis auf Float-Rundung exakt, bei durchhängenden Seilen fällt
/// der relative Fehler quadratisch mit der Segmentanzahl (bei 50 Segmenten
/// und Spannung ≤ 0.5 deutlich unter 0.1 %).
pub const LENGTH_SAMPLES: usize = 50;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Approximierte Kurvenlänge über Polylinien-Segmente.
pub fn approx_length(positions_fn: impl Fn(f32) -> Vec2, samples: usize) -> f32 {
    let samples = samples.max(1);
    let mut length = 0.0;
    let mut prev = positions_fn(0.0);
    for i in 1..=samples {
        let t = i as f32 / samples as f32;
        let p = positions_fn(t);
        length += prev.distance(p);
        prev = p;
    }
    length
}

/// Durchhängendes Seil zwischen Start- und Endanker (Canvas-Pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableCurve {
    start: Vec2,
    control: Vec2,
    end: Vec2,
}

impl CableCurve {
    /// Baut die Kurve aus beiden Ankern und dem Spannungsfaktor.
    pub fn build(start: Vec2, end: Vec2, tension: f32) -> Self {
        let sag = start.distance(end) * tension;
        let control = (start + end) * 0.5 + Vec2::new(0.0, sag);
        Self {
            start,
            control,
            end,
        }
    }

    /// Startanker.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Endanker.
    pub fn end(&self) -> Vec2 {
        self.end
    }

    /// Durchhang-Steuerpunkt.
    pub fn control(&self) -> Vec2 {
        self.control
    }

    /// Exakte Kurvenposition bei `t` (auf [0, 1] begrenzt).
    ///
    /// Die Endpunkte werden direkt zurückgegeben, damit `point_at(0)` und
    /// `point_at(1)` bitgenau den Ankern entsprechen.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return self.start;
        }
        if t == 1.0 {
            return self.end;
        }
        quadratic_bezier(self.start, self.control, self.end, t)
    }

    /// Bogenlänge in Pixeln (Polylinie mit [`LENGTH_SAMPLES`] Segmenten).
    pub fn length(&self) -> f32 {
        self.length_with_samples(LENGTH_SAMPLES)
    }

    /// Bogenlänge in Pixeln mit frei wählbarer Segmentanzahl.
    pub fn length_with_samples(&self, samples: usize) -> f32 {
        approx_length(|t| self.point_at(t), samples)
    }

    /// Bogenlänge in Metern.
    pub fn length_m(&self) -> f32 {
        px_to_m(self.length())
    }

    /// Gleichmäßig in `t` verteilte Punkte (`segments + 1` Stück) für das Rendering.
    pub fn polyline(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn endpoints_match_anchors_exactly() {
        let anchors = [
            (Vec2::new(12.5, 40.0), Vec2::new(610.25, 333.3)),
            (Vec2::new(-3.0, 7.0), Vec2::new(-3.0, 900.0)),
            (Vec2::new(800.0, 100.0), Vec2::new(50.0, 20.0)),
        ];
        for (a, b) in anchors {
            for tension in [0.0, 0.1, 0.35, 2.0] {
                let curve = CableCurve::build(a, b, tension);
                assert_eq!(curve.point_at(0.0), a);
                assert_eq!(curve.point_at(1.0), b);
            }
        }
    }

    #[test]
    fn zero_tension_is_straight_segment() {
        let a = Vec2::new(100.0, 50.0);
        let b = Vec2::new(300.0, 250.0);
        let curve = CableCurve::build(a, b, 0.0);

        let mid = curve.point_at(0.5);
        assert_relative_eq!(mid.x, 200.0);
        assert_relative_eq!(mid.y, 150.0);
    }

    #[test]
    fn sag_moves_control_point_down() {
        let curve = CableCurve::build(Vec2::new(0.0, 100.0), Vec2::new(200.0, 100.0), 0.25);

        assert_relative_eq!(curve.control().x, 100.0);
        assert_relative_eq!(curve.control().y, 150.0);
        // B(0.5) liegt auf halber Höhe zwischen Sehne und Steuerpunkt
        assert_relative_eq!(curve.point_at(0.5).y, 125.0);
    }

    #[test]
    fn horizontal_line_length_matches_distance() {
        let curve = CableCurve::build(Vec2::new(40.0, 200.0), Vec2::new(540.0, 200.0), 0.0);

        let relative_error = (curve.length() - 500.0).abs() / 500.0;
        assert!(relative_error < 0.005, "Fehler {relative_error}");
        assert_relative_eq!(curve.length_m(), 50.0, epsilon = 1e-3);
    }

    #[test]
    fn diagonal_straight_line_length_is_exact() {
        let curve = CableCurve::build(Vec2::new(0.0, 0.0), Vec2::new(300.0, 400.0), 0.0);
        assert_relative_eq!(curve.length(), 500.0, epsilon = 1e-2);
    }

    #[test]
    fn sampled_length_converges_from_below() {
        let curve = CableCurve::build(Vec2::new(0.0, 0.0), Vec2::new(400.0, 100.0), 0.4);

        let coarse = curve.length();
        let fine = curve.length_with_samples(4000);
        assert!(coarse <= fine + 1e-3);
        assert!((fine - coarse) / fine < 0.001);
    }

    #[test]
    fn length_of_degenerate_curve_is_zero() {
        let p = Vec2::new(10.0, 10.0);
        let curve = CableCurve::build(p, p, 0.3);
        assert_eq!(curve.length(), 0.0);
    }

    #[test]
    fn point_at_clamps_parameter() {
        let curve = CableCurve::build(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.2);
        assert_eq!(curve.point_at(-0.5), Vec2::ZERO);
        assert_eq!(curve.point_at(1.5), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn polyline_has_segments_plus_one_points() {
        let curve = CableCurve::build(Vec2::ZERO, Vec2::new(10.0, 0.0), 0.2);
        let points = curve.polyline(50);
        assert_eq!(points.len(), 51);
        assert_eq!(points[0], curve.start());
        assert_eq!(points[50], curve.end());
    }
}
