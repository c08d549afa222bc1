//! Sitzungsdaten: Anker, Seilkurve, Fahrer, Parameter und Kennzahlen.

use super::interaction::AnchorId;
use crate::core::{CableCurve, CableMetrics};
use crate::shared::SimulatorOptions;
use glam::Vec2;

/// Start- und Endanker (0, 1 oder 2 gesetzt).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchors {
    start: Option<Vec2>,
    end: Option<Vec2>,
}

impl Anchors {
    pub fn get(&self, id: AnchorId) -> Option<Vec2> {
        match id {
            AnchorId::Start => self.start,
            AnchorId::End => self.end,
        }
    }

    pub fn set(&mut self, id: AnchorId, position: Vec2) {
        match id {
            AnchorId::Start => self.start = Some(position),
            AnchorId::End => self.end = Some(position),
        }
    }

    /// Entfernt beide Anker.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Anzahl gesetzter Anker.
    pub fn count(&self) -> usize {
        usize::from(self.start.is_some()) + usize::from(self.end.is_some())
    }

    /// Beide Anker, falls gesetzt.
    pub fn both(&self) -> Option<(Vec2, Vec2)> {
        Some((self.start?, self.end?))
    }
}

/// Vom Benutzer einstellbare Parameter (Slider).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableParams {
    /// Spannungsfaktor (Durchhang relativ zur Spannweite)
    pub tension: f32,
    pub rider_weight_kg: f32,
    pub drag_coefficient: f32,
}

impl CableParams {
    /// Startwerte aus den Optionen.
    pub fn from_options(options: &SimulatorOptions) -> Self {
        Self {
            tension: options.tension_default,
            rider_weight_kg: options.rider_weight_default_kg,
            drag_coefficient: options.drag_coefficient_default,
        }
    }
}

impl Default for CableParams {
    fn default() -> Self {
        Self::from_options(&SimulatorOptions::default())
    }
}

/// Fahrerposition auf dem Seil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rider {
    pub position: Vec2,
    /// `true` nach abgeschlossener Fahrt: nur noch Anzeige am Seilende
    pub parked: bool,
}

/// Die bearbeitete Seilbahn.
#[derive(Debug, Clone, Default)]
pub struct CableSession {
    pub anchors: Anchors,
    /// Existiert genau dann, wenn beide Anker gesetzt sind
    pub curve: Option<CableCurve>,
    pub rider: Option<Rider>,
    pub params: CableParams,
    pub metrics: CableMetrics,
}

impl CableSession {
    /// Erstellt eine leere Sitzung mit Parametern aus den Optionen.
    pub fn new(options: &SimulatorOptions) -> Self {
        Self {
            params: CableParams::from_options(options),
            ..Self::default()
        }
    }

    /// Baut die Kurve komplett neu aus Ankern und Spannung.
    ///
    /// Ein geparkter Fahrer verschwindet, da er zur alten Geometrie gehört.
    pub fn rebuild_curve(&mut self) {
        self.curve = self
            .anchors
            .both()
            .map(|(start, end)| CableCurve::build(start, end, self.params.tension));
        if self.rider.is_some_and(|r| r.parked) {
            self.rider = None;
        }
    }

    /// Berechnet die Kennzahlen neu (Nullwerte ohne Kurve).
    pub fn refresh_metrics(&mut self) {
        self.metrics = match &self.curve {
            Some(curve) => CableMetrics::compute(
                curve,
                self.params.rider_weight_kg,
                self.params.drag_coefficient,
            ),
            None => CableMetrics::default(),
        };
    }

    /// Verwirft Anker, Kurve, Fahrer und Kennzahlen. Parameter bleiben.
    pub fn clear(&mut self) {
        self.anchors.clear();
        self.curve = None;
        self.rider = None;
        self.metrics = CableMetrics::default();
    }
}
