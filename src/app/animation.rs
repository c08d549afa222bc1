//! Tween-Scheduler: zeitbasierte Werte 0 → 1 mit Easing, explizit abbrechbar.
//!
//! Der Scheduler kennt keine Callbacks auf den `AppState`. Stattdessen liefert
//! `advance()` pro Frame eine Liste von `TweenEvent`s, die der Controller an
//! die Feature-Handler verteilt. Jedes Event trägt das `TweenHandle` seines
//! Tweens, damit Empfänger veraltete Events verwerfen können.

/// Eindeutige Kennung eines geplanten Tweens (monoton steigend, nie wiederverwendet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenHandle(u64);

impl TweenHandle {
    /// Erstellt ein Handle aus einer Roh-ID (für alternative Scheduler).
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Roh-ID des Handles.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Wem ein Tween gehört; `cancel_target` bricht alle Tweens eines Ziels ab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenTarget {
    /// Fahrt des Fahrers entlang des Seils
    Rider,
    /// Überblendung des Hinweistexts
    Instructions,
}

/// Easing-Kurve für den Tween-Fortschritt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratisches Ease-In (t²), beschleunigt aus dem Stand
    QuadIn,
}

impl Easing {
    /// Bildet linearen Fortschritt in [0, 1] auf den Easing-Wert ab.
    pub fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
        }
    }
}

/// Ergebnis eines Scheduler-Schritts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenEvent {
    /// Neuer Wert (bereits mit Easing) für einen laufenden Tween
    Tick {
        handle: TweenHandle,
        target: TweenTarget,
        value: f32,
    },
    /// Tween hat 1.0 erreicht; wird genau einmal gemeldet
    Completed {
        handle: TweenHandle,
        target: TweenTarget,
    },
}

/// Vertrag des Animations-Kollaborateurs.
///
/// Der produktive Scheduler wird per Frame-Delta fortgeschrieben; Tests
/// können eine eigene Implementierung einsetzen, die Events gezielt erzeugt.
pub trait AnimationScheduler {
    /// Plant einen Tween von 0 nach 1 über `duration_s` Sekunden.
    fn schedule(&mut self, target: TweenTarget, duration_s: f32, easing: Easing) -> TweenHandle;

    /// Bricht einen Tween ab. `true`, wenn er noch lief.
    fn cancel(&mut self, handle: TweenHandle) -> bool;

    /// Bricht alle Tweens eines Ziels ab und gibt deren Anzahl zurück.
    fn cancel_target(&mut self, target: TweenTarget) -> usize;

    /// Schreibt alle Tweens um `dt` Sekunden fort.
    fn advance(&mut self, dt: f32) -> Vec<TweenEvent>;

    /// Läuft der Tween noch?
    fn is_active(&self, handle: TweenHandle) -> bool;

    /// Anzahl laufender Tweens.
    fn active_count(&self) -> usize;
}

#[derive(Debug, Clone)]
struct Tween {
    handle: TweenHandle,
    target: TweenTarget,
    duration_s: f32,
    elapsed_s: f32,
    easing: Easing,
}

/// Frame-getriebener Standard-Scheduler.
#[derive(Debug, Default)]
pub struct TweenScheduler {
    next_id: u64,
    tweens: Vec<Tween>,
}

impl TweenScheduler {
    /// Erstellt einen leeren Scheduler.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            tweens: Vec::new(),
        }
    }
}

impl AnimationScheduler for TweenScheduler {
    fn schedule(&mut self, target: TweenTarget, duration_s: f32, easing: Easing) -> TweenHandle {
        let handle = TweenHandle(self.next_id.max(1));
        self.next_id = handle.0 + 1;
        self.tweens.push(Tween {
            handle,
            target,
            duration_s,
            elapsed_s: 0.0,
            easing,
        });
        log::debug!(
            "Tween {:?} geplant: {:?}, {:.2}s, {:?}",
            handle,
            target,
            duration_s,
            easing
        );
        handle
    }

    fn cancel(&mut self, handle: TweenHandle) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.handle != handle);
        before != self.tweens.len()
    }

    fn cancel_target(&mut self, target: TweenTarget) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.target != target);
        before - self.tweens.len()
    }

    fn advance(&mut self, dt: f32) -> Vec<TweenEvent> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut events = Vec::with_capacity(self.tweens.len() * 2);

        for tween in &mut self.tweens {
            tween.elapsed_s += dt;
            let progress = if tween.duration_s > 0.0 {
                (tween.elapsed_s / tween.duration_s).min(1.0)
            } else {
                1.0
            };

            events.push(TweenEvent::Tick {
                handle: tween.handle,
                target: tween.target,
                value: tween.easing.apply(progress),
            });
            if progress >= 1.0 {
                events.push(TweenEvent::Completed {
                    handle: tween.handle,
                    target: tween.target,
                });
            }
        }

        self.tweens
            .retain(|t| t.duration_s > 0.0 && t.elapsed_s < t.duration_s);
        events
    }

    fn is_active(&self, handle: TweenHandle) -> bool {
        self.tweens.iter().any(|t| t.handle == handle)
    }

    fn active_count(&self) -> usize {
        self.tweens.len()
    }
}
