//! Keyboard-Shortcuts für die Canvas.
//!
//! Leertaste startet die Fahrt, Escape setzt zurück. Solange ein Textfeld
//! den Fokus hat, werden keine Shortcuts ausgelöst.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (space_pressed, escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if space_pressed {
        events.push(AppIntent::SimulateRequested);
    }
    if escape_pressed {
        events.push(AppIntent::ResetRequested);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_with_key(key: egui::Key) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.events.push(egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::default(),
        });

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui);
            });
        });

        events
    }

    #[test]
    fn space_requests_simulation() {
        let events = collect_with_key(egui::Key::Space);

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::SimulateRequested)));
    }

    #[test]
    fn escape_requests_reset() {
        let events = collect_with_key(egui::Key::Escape);

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::ResetRequested)));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(collect_with_key(egui::Key::A).is_empty());
    }
}
