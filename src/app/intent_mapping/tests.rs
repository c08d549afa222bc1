use crate::app::state::InteractionState;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::Environment;

use super::map_intent_to_commands;

fn ready_state() -> AppState {
    let mut state = AppState::new();
    state.interaction = InteractionState::Ready;
    state
}

#[test]
fn reset_requested_cancels_before_resetting() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ResetRequested);

    assert_eq!(
        commands,
        vec![AppCommand::CancelSimulation, AppCommand::ResetSession]
    );
}

#[test]
fn simulate_requested_only_maps_in_ready() {
    let placing = AppState::new();
    assert!(map_intent_to_commands(&placing, AppIntent::SimulateRequested).is_empty());

    let ready = ready_state();
    assert_eq!(
        map_intent_to_commands(&ready, AppIntent::SimulateRequested),
        vec![AppCommand::StartSimulation]
    );
}

#[test]
fn valid_field_text_maps_to_meters() {
    let state = ready_state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::HorizontalDistanceEdited {
            text: " 12.5 ".to_string(),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::SetHorizontalDistance { meters: 12.5 }]
    );

    let commands = map_intent_to_commands(
        &state,
        AppIntent::VerticalDropEdited {
            text: "-3,5".to_string(),
        },
    );
    assert_eq!(commands, vec![AppCommand::SetVerticalDrop { meters: -3.5 }]);
}

#[test]
fn invalid_field_text_maps_to_nothing() {
    let state = ready_state();

    for text in ["", "abc", "NaN", "inf"] {
        let commands = map_intent_to_commands(
            &state,
            AppIntent::HorizontalDistanceEdited {
                text: text.to_string(),
            },
        );
        assert!(commands.is_empty(), "{text:?}");
    }
}

#[test]
fn unchanged_field_label_maps_to_nothing() {
    let mut state = ready_state();
    state.session.metrics.horizontal_m = 20.36;
    state.session.metrics.vertical_m = 5.13;

    for text in ["20.4", "20,40", " 20.4 "] {
        let commands = map_intent_to_commands(
            &state,
            AppIntent::HorizontalDistanceEdited {
                text: text.to_string(),
            },
        );
        assert!(commands.is_empty(), "{text:?}");
    }

    let commands = map_intent_to_commands(
        &state,
        AppIntent::VerticalDropEdited {
            text: "5.1".to_string(),
        },
    );
    assert!(commands.is_empty());

    let commands = map_intent_to_commands(
        &state,
        AppIntent::HorizontalDistanceEdited {
            text: "20.5".to_string(),
        },
    );
    assert_eq!(
        commands,
        vec![AppCommand::SetHorizontalDistance { meters: 20.5 }]
    );
}

#[test]
fn field_edits_outside_ready_are_dropped() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::VerticalDropEdited {
            text: "4.0".to_string(),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn environment_selection_maps_to_command() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::EnvironmentSelected {
            environment: Environment::Desert,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetEnvironment {
            environment: Environment::Desert
        }]
    );
}

#[test]
fn frame_advanced_maps_to_animation_step() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::FrameAdvanced { dt: 0.016 });

    assert_eq!(commands, vec![AppCommand::AdvanceAnimations { dt: 0.016 }]);
}
