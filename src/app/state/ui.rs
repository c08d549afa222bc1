//! UI-bezogener Zustand: Statuszeile, Hinweistext mit Überblendung, Cursor.

use crate::app::animation::TweenHandle;

/// Cursor-Hinweis für die Canvas (vom Host auf egui-Cursor abgebildet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Crosshair,
    Grab,
    Grabbing,
}

/// Phase der Hinweistext-Überblendung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Idle,
    /// Alter Text wird ausgeblendet
    FadingOut,
    /// Neuer Text wird eingeblendet
    FadingIn,
}

/// Hinweistext mit Überblendungszustand.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionBanner {
    /// Aktuell angezeigter Text
    pub text: String,
    /// Text, der nach dem Ausblenden eingesetzt wird
    pub pending: Option<String>,
    /// Deckkraft 0.0–1.0
    pub opacity: f32,
    pub phase: FadePhase,
    /// Deckkraft zu Beginn des Ausblendens
    pub fade_from: f32,
    /// Tween der laufenden Phase
    pub tween: Option<TweenHandle>,
}

impl InstructionBanner {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pending: None,
            opacity: 1.0,
            phase: FadePhase::Idle,
            fade_from: 1.0,
            tween: None,
        }
    }

    /// Text, der am Ende der Überblendung stehen wird.
    pub fn target_text(&self) -> &str {
        self.pending.as_deref().unwrap_or(&self.text)
    }
}

/// UI-Zustand
#[derive(Debug, Clone)]
pub struct UiState {
    /// Statuszeile im Datenpanel
    pub status: String,
    pub instructions: InstructionBanner,
    pub cursor: CursorHint,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
}

impl UiState {
    pub fn new(status: &str, instructions: &str, cursor: CursorHint) -> Self {
        Self {
            status: status.to_string(),
            instructions: InstructionBanner::new(instructions),
            cursor,
            show_options_dialog: false,
        }
    }
}
