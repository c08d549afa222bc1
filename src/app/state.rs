//! Application State — zentrale Datenhaltung.
//!
//! Aufgeteilt in:
//! - `app_state`   — Hauptzustand (`AppState`)
//! - `interaction` — Zustandsautomat der Canvas-Interaktion
//! - `session`     — Anker, Seilkurve, Fahrer, Parameter, Kennzahlen
//! - `ui`          — Status-/Hinweistext, Cursor-Hinweis, Dialog-Flags
//! - `view`        — Canvas-Größe und Hintergrund-Umgebung

mod app_state;
pub mod interaction;
pub mod session;
pub mod ui;
mod view;

pub use app_state::AppState;
pub use interaction::{AnchorId, InteractionEvent, InteractionState, SimulationRun};
pub use session::{Anchors, CableParams, CableSession, Rider};
pub use ui::{CursorHint, FadePhase, InstructionBanner, UiState};
pub use view::ViewState;
