use crate::app::animation::{AnimationScheduler, TweenScheduler};
use crate::app::CommandLog;
use crate::shared::SimulatorOptions;

use super::{CableSession, InteractionState, UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Zustand der Canvas-Interaktion
    pub interaction: InteractionState,
    /// Anker, Kurve, Fahrer, Parameter, Kennzahlen
    pub session: CableSession,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Tween-Scheduler für Fahrt und Hinweistext
    pub animations: Box<dyn AnimationScheduler>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: SimulatorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(SimulatorOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    pub fn with_options(options: SimulatorOptions) -> Self {
        Self::with_scheduler(options, Box::new(TweenScheduler::new()))
    }

    /// Erstellt einen App-State mit eigenem Scheduler (z.B. Test-Fake).
    pub fn with_scheduler(options: SimulatorOptions, animations: Box<dyn AnimationScheduler>) -> Self {
        let interaction = InteractionState::default();
        let ui = UiState::new(
            interaction.status_label().unwrap_or_default(),
            interaction.instructions(),
            interaction.cursor(),
        );
        Self {
            interaction,
            session: CableSession::new(&options),
            view: ViewState::new(),
            ui,
            animations,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl gesetzter Anker (für UI-Anzeige)
    pub fn anchor_count(&self) -> usize {
        self.session.anchors.count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
