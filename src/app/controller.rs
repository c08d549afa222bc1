//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Canvas-Interaktion ===
            AppCommand::PointerDown { pos } => handlers::interaction::pointer_down(state, pos),
            AppCommand::PointerMove { pos } => handlers::interaction::pointer_move(state, pos),
            AppCommand::PointerUp => handlers::interaction::pointer_up(state),
            AppCommand::ResetSession => handlers::interaction::reset(state),

            // === Fahrt & Animation ===
            AppCommand::StartSimulation => handlers::simulation::start(state),
            AppCommand::CancelSimulation => handlers::simulation::cancel(state),
            AppCommand::AdvanceAnimations { dt } => handlers::simulation::advance(state, dt),

            // === Parameter ===
            AppCommand::SetTension { value } => handlers::params::set_tension(state, value),
            AppCommand::SetRiderWeight { value } => handlers::params::set_rider_weight(state, value),
            AppCommand::SetDragCoefficient { value } => {
                handlers::params::set_drag_coefficient(state, value)
            }
            AppCommand::SetHorizontalDistance { meters } => {
                handlers::params::set_horizontal_distance(state, meters)
            }
            AppCommand::SetVerticalDrop { meters } => {
                handlers::params::set_vertical_drop(state, meters)
            }

            // === View ===
            AppCommand::SetEnvironment { environment } => {
                handlers::view::set_environment(state, environment)
            }
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Dialoge & Optionen ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
