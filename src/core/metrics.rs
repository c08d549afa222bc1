//! Abgeleitete Kennzahlen des Seils für das Datenpanel.

use super::cable::CableCurve;
use super::kinematics::max_speed;
use super::units::{ms_to_kmh, px_to_m};
use std::fmt;

/// Horizontale Distanzen unterhalb dieses Betrags (m) gelten als senkrecht.
///
/// Entspricht der Anzeige-Rundung der Eingabefelder auf eine Nachkommastelle:
/// was als `0.0` angezeigt wird, liefert keine endliche Steigung.
pub const SLOPE_MIN_HORIZONTAL_M: f32 = 0.05;

/// Steigung in Prozent oder senkrecht.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Percent(f32),
    /// Keine horizontale Distanz → Anzeige als `Inf %`
    Infinite,
}

impl Slope {
    /// Berechnet die Steigung aus Höhendifferenz und horizontaler Distanz (m).
    pub fn from_run_rise(horizontal_m: f32, vertical_m: f32) -> Self {
        if horizontal_m.abs() < SLOPE_MIN_HORIZONTAL_M {
            Slope::Infinite
        } else {
            Slope::Percent(vertical_m.abs() / horizontal_m.abs() * 100.0)
        }
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slope::Percent(p) => write!(f, "{:.1} %", p),
            Slope::Infinite => write!(f, "Inf %"),
        }
    }
}

/// Kennzahlen eines Seils (alle Werte in Metern bzw. m/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableMetrics {
    /// Bogenlänge des Seils
    pub length_m: f32,
    /// Horizontale Distanz Start → Ende (vorzeichenbehaftet)
    pub horizontal_m: f32,
    /// Vertikaler Abfall Start → Ende (positiv = Ende liegt tiefer)
    pub vertical_m: f32,
    pub slope: Slope,
    /// Geschätzte Maximalgeschwindigkeit
    pub max_speed_ms: f32,
}

impl Default for CableMetrics {
    fn default() -> Self {
        Self {
            length_m: 0.0,
            horizontal_m: 0.0,
            vertical_m: 0.0,
            slope: Slope::Percent(0.0),
            max_speed_ms: 0.0,
        }
    }
}

impl CableMetrics {
    /// Berechnet alle Kennzahlen aus der Kurve und den Fahrerparametern.
    pub fn compute(curve: &CableCurve, rider_weight_kg: f32, drag_coefficient: f32) -> Self {
        let delta = curve.end() - curve.start();
        let horizontal_m = px_to_m(delta.x);
        let vertical_m = px_to_m(delta.y);
        Self {
            length_m: curve.length_m(),
            horizontal_m,
            vertical_m,
            slope: Slope::from_run_rise(horizontal_m, vertical_m),
            max_speed_ms: max_speed(rider_weight_kg, drag_coefficient, vertical_m),
        }
    }

    /// Maximalgeschwindigkeit in km/h.
    pub fn max_speed_kmh(&self) -> f32 {
        ms_to_kmh(self.max_speed_ms)
    }

    pub fn length_label(&self) -> String {
        format!("{:.2} m", self.length_m)
    }

    /// Höhendifferenz aus dem auf eine Nachkommastelle gerundeten Feldwert.
    pub fn height_diff_label(&self) -> String {
        // `+ 0.0` macht aus -0.0 eine 0.0
        let rounded = (self.vertical_m * 10.0).round() / 10.0 + 0.0;
        format!("{:.2} m", rounded)
    }

    pub fn slope_label(&self) -> String {
        self.slope.to_string()
    }

    pub fn speed_label(&self) -> String {
        format!("{:.1} km/h", self.max_speed_kmh())
    }
}

/// Formatiert einen Meterwert für die Eingabefelder (eine Nachkommastelle).
pub fn field_label(value_m: f32) -> String {
    format!("{:.1}", value_m)
}
