//! Command-Log der ausgeführten, zustandsändernden Commands.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Bei MAX_ENTRIES wird die ältere Hälfte verworfen.
    /// Commands, die pro Frame anfallen (Animation, Zeigerbewegung,
    /// Canvas-Größe), werden nicht aufgezeichnet.
    pub fn record(&mut self, command: &AppCommand) {
        if Self::is_per_frame(command) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    fn is_per_frame(command: &AppCommand) -> bool {
        matches!(
            command,
            AppCommand::AdvanceAnimations { .. }
                | AppCommand::PointerMove { .. }
                | AppCommand::SetViewportSize { .. }
        )
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_commands_are_not_recorded() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::AdvanceAnimations { dt: 0.016 });
        log.record(&AppCommand::PointerMove {
            pos: glam::Vec2::new(3.0, 4.0),
        });
        log.record(&AppCommand::SetViewportSize {
            size: [800.0, 600.0],
        });
        log.record(&AppCommand::StartSimulation);

        assert_eq!(log.entries(), &[AppCommand::StartSimulation]);
    }

    #[test]
    fn log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..(CommandLog::MAX_ENTRIES + 10) {
            log.record(&AppCommand::PointerUp);
        }
        assert!(log.len() <= CommandLog::MAX_ENTRIES);
        assert!(!log.is_empty());
    }
}
