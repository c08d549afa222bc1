//! Use-Case: Hinweistext mit Überblendung (ausblenden, Text tauschen, einblenden).

use crate::app::animation::{Easing, TweenHandle, TweenTarget};
use crate::app::state::FadePhase;
use crate::app::AppState;

/// Fordert einen neuen Hinweistext an.
///
/// Gleicher Zieltext wird übersprungen. Läuft bereits ein Ausblenden, wird
/// nur der wartende Text ersetzt.
pub fn request_text(state: &mut AppState, text: &str) {
    let fade_s = state.options.instruction_fade_s;
    let banner = &mut state.ui.instructions;
    if banner.target_text() == text {
        return;
    }

    if !fade_s.is_finite() || fade_s <= 0.0 {
        state.animations.cancel_target(TweenTarget::Instructions);
        let banner = &mut state.ui.instructions;
        banner.text = text.to_string();
        banner.pending = None;
        banner.opacity = 1.0;
        banner.phase = FadePhase::Idle;
        banner.tween = None;
        return;
    }

    banner.pending = Some(text.to_string());
    if banner.phase == FadePhase::FadingOut {
        return;
    }

    banner.fade_from = banner.opacity;
    banner.phase = FadePhase::FadingOut;
    state.animations.cancel_target(TweenTarget::Instructions);
    let handle = state
        .animations
        .schedule(TweenTarget::Instructions, fade_s, Easing::Linear);
    state.ui.instructions.tween = Some(handle);
}

/// Überträgt einen Tween-Wert auf die Deckkraft.
pub fn apply_tick(state: &mut AppState, handle: TweenHandle, value: f32) {
    let banner = &mut state.ui.instructions;
    if banner.tween != Some(handle) {
        log::debug!("Veralteter Hinweis-Tick {:?} ignoriert", handle);
        return;
    }
    banner.opacity = match banner.phase {
        FadePhase::FadingOut => banner.fade_from * (1.0 - value),
        FadePhase::FadingIn => value,
        FadePhase::Idle => banner.opacity,
    };
}

/// Schließt eine Überblend-Phase ab und startet ggf. die nächste.
pub fn complete(state: &mut AppState, handle: TweenHandle) {
    if state.ui.instructions.tween != Some(handle) {
        log::debug!("Veralteter Hinweis-Abschluss {:?} ignoriert", handle);
        return;
    }

    match state.ui.instructions.phase {
        FadePhase::FadingOut => {
            let fade_s = state.options.instruction_fade_s;
            let next = state
                .animations
                .schedule(TweenTarget::Instructions, fade_s, Easing::Linear);
            let banner = &mut state.ui.instructions;
            if let Some(text) = banner.pending.take() {
                banner.text = text;
            }
            banner.opacity = 0.0;
            banner.phase = FadePhase::FadingIn;
            banner.tween = Some(next);
        }
        FadePhase::FadingIn | FadePhase::Idle => {
            let banner = &mut state.ui.instructions;
            banner.opacity = 1.0;
            banner.phase = FadePhase::Idle;
            banner.tween = None;
        }
    }
}
