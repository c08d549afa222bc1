//! Vereinfachtes Fahrtmodell: Lageenergie → Maximalgeschwindigkeit.
//!
//! Das Modell ignoriert die Seilgeometrie. Der Luftwiderstand wirkt als
//! flacher Faktor `(1 - drag)` auf die Geschwindigkeit; Werte außerhalb
//! von [0, 1] werden nicht validiert.

/// Erdbeschleunigung in m/s².
pub const GRAVITY: f32 = 9.81;

/// Lageenergie in Joule für Masse `weight_kg` und Höhendifferenz `drop_m`.
pub fn potential_energy(weight_kg: f32, drop_m: f32) -> f32 {
    weight_kg * GRAVITY * drop_m.abs()
}

/// Geschätzte Maximalgeschwindigkeit in m/s.
///
/// `v = sqrt(2·E / m) · (1 - drag)`. Liefert 0 bei Masse 0, Höhendifferenz 0
/// und jedem nicht-endlichen Ergebnis.
pub fn max_speed(weight_kg: f32, drag_coefficient: f32, vertical_drop_m: f32) -> f32 {
    if weight_kg == 0.0 || vertical_drop_m == 0.0 {
        return 0.0;
    }
    let energy = potential_energy(weight_kg, vertical_drop_m);
    let speed = (2.0 * energy / weight_kg).sqrt() * (1.0 - drag_coefficient);
    if speed.is_finite() {
        speed
    } else {
        0.0
    }
}

/// Zeitparameter einer Fahrt (empirische Konstanten, keine Physik).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunTiming {
    /// Anteil der Maximalgeschwindigkeit als mittlere Fahrtgeschwindigkeit
    pub speed_factor: f32,
    /// Untergrenze der Fahrtdauer in Sekunden
    pub min_duration_s: f32,
}

impl Default for RunTiming {
    fn default() -> Self {
        Self {
            speed_factor: 0.7,
            min_duration_s: 2.0,
        }
    }
}

impl RunTiming {
    /// Fahrtdauer in Sekunden: `max(min, Länge / (Faktor · v_max))`.
    ///
    /// Ein nicht-endlicher Quotient (v_max = 0) fällt auf die Untergrenze zurück.
    pub fn duration_s(&self, length_m: f32, max_speed_ms: f32) -> f32 {
        let raw = length_m / (self.speed_factor * max_speed_ms);
        if raw.is_finite() {
            raw.max(self.min_duration_s)
        } else {
            self.min_duration_s
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn free_fall_speed_without_drag() {
        let v = max_speed(70.0, 0.0, 20.0);
        assert_relative_eq!(v, (2.0 * 9.81 * 20.0f32).sqrt(), epsilon = 1e-4);
        assert_relative_eq!(v, 19.81, epsilon = 0.01);
    }

    #[test]
    fn speed_is_independent_of_weight() {
        assert_relative_eq!(
            max_speed(50.0, 0.2, 12.0),
            max_speed(120.0, 0.2, 12.0),
            epsilon = 1e-4
        );
    }

    #[test]
    fn drag_attenuates_linearly() {
        let free = max_speed(70.0, 0.0, 20.0);
        assert_relative_eq!(max_speed(70.0, 0.25, 20.0), free * 0.75, epsilon = 1e-4);
    }

    #[test]
    fn negative_drop_uses_magnitude() {
        assert_relative_eq!(max_speed(70.0, 0.0, -20.0), max_speed(70.0, 0.0, 20.0));
    }

    #[test]
    fn degenerate_inputs_yield_zero() {
        assert_eq!(max_speed(0.0, 0.0, 20.0), 0.0);
        assert_eq!(max_speed(70.0, 0.0, 0.0), 0.0);
        assert_eq!(max_speed(f32::NAN, 0.0, 20.0), 0.0);
    }

    #[test]
    fn drag_outside_unit_range_is_not_validated() {
        // Bekannte Unschärfe des Modells: negative Geschwindigkeit bei drag > 1
        assert!(max_speed(70.0, 1.5, 20.0) < 0.0);
    }

    #[test]
    fn duration_has_floor() {
        let timing = RunTiming::default();
        assert_relative_eq!(timing.duration_s(1.0, 20.0), 2.0);
        assert_relative_eq!(timing.duration_s(70.0, 10.0), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn duration_with_zero_speed_falls_back_to_floor() {
        let timing = RunTiming::default();
        assert_relative_eq!(timing.duration_s(50.0, 0.0), 2.0);
        assert_relative_eq!(timing.duration_s(0.0, 0.0), 2.0);
    }
}
