//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::metrics::field_label;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasPointerPressed { pos } => vec![AppCommand::PointerDown { pos }],
        AppIntent::CanvasPointerMoved { pos } => vec![AppCommand::PointerMove { pos }],
        AppIntent::CanvasPointerReleased => vec![AppCommand::PointerUp],
        AppIntent::SimulateRequested => {
            if state.interaction.can_simulate() {
                vec![AppCommand::StartSimulation]
            } else {
                log::debug!(
                    "Simulation im Zustand {} ignoriert",
                    state.interaction.name()
                );
                vec![]
            }
        }
        AppIntent::ResetRequested => vec![AppCommand::CancelSimulation, AppCommand::ResetSession],
        AppIntent::TensionChanged { value } => vec![AppCommand::SetTension { value }],
        AppIntent::RiderWeightChanged { value } => vec![AppCommand::SetRiderWeight { value }],
        AppIntent::DragCoefficientChanged { value } => {
            vec![AppCommand::SetDragCoefficient { value }]
        }
        AppIntent::HorizontalDistanceEdited { text } => {
            parse_field(state, &text, state.session.metrics.horizontal_m)
                .map(|meters| AppCommand::SetHorizontalDistance { meters })
                .into_iter()
                .collect()
        }
        AppIntent::VerticalDropEdited { text } => {
            parse_field(state, &text, state.session.metrics.vertical_m)
                .map(|meters| AppCommand::SetVerticalDrop { meters })
                .into_iter()
                .collect()
        }
        AppIntent::EnvironmentSelected { environment } => {
            vec![AppCommand::SetEnvironment { environment }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::FrameAdvanced { dt } => vec![AppCommand::AdvanceAnimations { dt }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Liest einen Meterwert aus einem Eingabefeld.
///
/// Ungültiger Text, ein gesperrtes Feld oder der unveränderte Anzeigewert
/// liefert `None`; der zuletzt übernommene Wert bleibt dann bestehen.
fn parse_field(state: &AppState, text: &str, current_m: f32) -> Option<f32> {
    if !state.interaction.fields_editable() {
        log::debug!(
            "Feldeingabe im Zustand {} ignoriert",
            state.interaction.name()
        );
        return None;
    }
    match text.trim().replace(',', ".").parse::<f32>() {
        // Angezeigt wird auf eine Nachkommastelle gerundet
        Ok(value) if field_label(current_m).parse::<f32>() == Ok(value) => {
            log::debug!("Feld unverändert ({}), kein Update", text.trim());
            None
        }
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log::debug!("Ungültige Feldeingabe ignoriert: {:?}", text);
            None
        }
    }
}

#[cfg(test)]
mod tests;
