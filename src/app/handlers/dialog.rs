//! Handler für den Options-Dialog und das Beenden der Anwendung.

use crate::app::AppState;
use crate::shared::SimulatorOptions;

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, mut options: SimulatorOptions) -> anyhow::Result<()> {
    options.normalize_ranges();
    state.options = options;
    let path = SimulatorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = SimulatorOptions::default();
    let path = SimulatorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
