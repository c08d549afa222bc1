//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::SimulatorOptions;
use crate::core::Environment;
use glam::Vec2;

/// Read-only Daten für einen Render-Frame (alle Positionen in Canvas-Pixeln).
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Startanker (None = noch nicht gesetzt)
    pub start_anchor: Option<Vec2>,
    /// Endanker (auch vorläufig während der Platzierung)
    pub end_anchor: Option<Vec2>,
    /// Seil als Polylinie (leer = kein Seil)
    pub cable: Vec<Vec2>,
    /// Fahrerposition (aktiv oder am Ziel geparkt)
    pub rider: Option<Vec2>,
    /// Gewählte Hintergrund-Umgebung
    pub environment: Environment,
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: SimulatorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Seil gezeichnet werden soll.
    pub fn has_cable(&self) -> bool {
        self.cable.len() >= 2
    }
}
