//! Zipline-Simulator Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AnimationScheduler, AppCommand, AppController, AppIntent, AppState, CursorHint, Easing,
    InteractionState, TweenEvent, TweenHandle, TweenScheduler, TweenTarget, UiState, ViewState,
};
pub use core::{CableCurve, CableMetrics, CanvasProjection, Environment, RunTiming, Slope};
pub use shared::{RenderScene, SimulatorOptions};
