//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod animation;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, Interaktion, UI).
pub mod state;
pub mod use_cases;

pub use animation::{
    AnimationScheduler, Easing, TweenEvent, TweenHandle, TweenScheduler, TweenTarget,
};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CursorHint, InteractionState, UiState, ViewState};
