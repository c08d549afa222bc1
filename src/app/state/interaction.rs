//! Zustandsautomat der Canvas-Interaktion.
//!
//! Die Zustände tragen ihre Übergangsdaten selbst (gezogener Anker, laufende
//! Fahrt). Übergänge passieren ausschließlich in
//! `use_cases::interaction::step`.

use super::ui::CursorHint;
use crate::app::animation::TweenHandle;
use glam::Vec2;

/// Welcher Anker ist gemeint?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorId {
    Start,
    End,
}

impl AnchorId {
    /// Beide Anker in fester Reihenfolge.
    pub const BOTH: [AnchorId; 2] = [AnchorId::Start, AnchorId::End];

    /// Index des Ankers (0 = Start, 1 = Ende).
    pub fn index(self) -> usize {
        match self {
            AnchorId::Start => 0,
            AnchorId::End => 1,
        }
    }
}

/// Gebundene Fahrt: Tween-Handle plus die beim Start geschätzten Werte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationRun {
    /// Handle des Fahrer-Tweens im Scheduler
    pub handle: TweenHandle,
    /// Feste Fahrtdauer in Sekunden
    pub duration_s: f32,
    /// Beim Start geschätzte Maximalgeschwindigkeit (m/s)
    pub max_speed_ms: f32,
}

/// Zustände der Canvas-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Nächster Klick setzt den Startanker
    #[default]
    PlacingStart,
    /// Mausbewegung zeigt Vorschau, Klick setzt den Endanker
    PlacingEnd,
    /// Seil fertig: Anker ziehbar, Felder editierbar, Simulation startbar
    Ready,
    /// Ein Anker wird gezogen
    Dragging { anchor: AnchorId },
    /// Fahrt läuft, Zeiger-Eingaben werden ignoriert
    Simulating { run: SimulationRun },
}

/// Eingaben des Zustandsautomaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
    /// Simulation soll starten (Button / Shortcut)
    StartSimulation,
    /// Der Fahrer-Tween mit diesem Handle ist abgeschlossen
    SimulationCompleted(TweenHandle),
    /// Zurück zum Anfang (aus jedem Zustand)
    Reset,
}

impl InteractionState {
    /// Kurzname für Logs.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::PlacingStart => "PLACING_START",
            InteractionState::PlacingEnd => "PLACING_END",
            InteractionState::Ready => "READY",
            InteractionState::Dragging { .. } => "DRAGGING",
            InteractionState::Simulating { .. } => "SIMULATING",
        }
    }

    /// Sind die Distanz-Felder editierbar?
    pub fn fields_editable(&self) -> bool {
        matches!(self, InteractionState::Ready)
    }

    /// Ist der Simulieren-Button aktiv?
    pub fn can_simulate(&self) -> bool {
        matches!(self, InteractionState::Ready)
    }

    /// Läuft gerade eine Fahrt?
    pub fn is_simulating(&self) -> bool {
        matches!(self, InteractionState::Simulating { .. })
    }

    /// Laufende Fahrt, falls vorhanden.
    pub fn active_run(&self) -> Option<&SimulationRun> {
        match self {
            InteractionState::Simulating { run } => Some(run),
            _ => None,
        }
    }

    /// Statuszeile beim Eintritt in den Zustand (None = bisherige bleibt).
    pub fn status_label(&self) -> Option<&'static str> {
        match self {
            InteractionState::PlacingStart => Some("Warte auf Entwurf"),
            InteractionState::Ready => Some("Bereit zur Simulation"),
            InteractionState::Simulating { .. } => Some("Fahrt läuft..."),
            InteractionState::PlacingEnd | InteractionState::Dragging { .. } => None,
        }
    }

    /// Hinweistext für den Zustand.
    pub fn instructions(&self) -> &'static str {
        match self {
            InteractionState::PlacingStart => {
                "Klicke auf die Fläche, um den STARTPUNKT der Seilbahn zu setzen."
            }
            InteractionState::PlacingEnd => "Klicke erneut, um den ENDPUNKT zu setzen.",
            InteractionState::Ready => {
                "Entwurf fertig! Ziehe die Punkte zum Anpassen oder drücke Simulieren."
            }
            InteractionState::Simulating { .. } => "Los geht's!",
            InteractionState::Dragging { .. } => "Loslassen, um die neue Position zu fixieren.",
        }
    }

    /// Cursor beim Eintritt in den Zustand.
    pub fn cursor(&self) -> CursorHint {
        match self {
            InteractionState::PlacingStart | InteractionState::PlacingEnd => CursorHint::Crosshair,
            InteractionState::Ready => CursorHint::Grab,
            InteractionState::Dragging { .. } => CursorHint::Grabbing,
            InteractionState::Simulating { .. } => CursorHint::Default,
        }
    }
}
