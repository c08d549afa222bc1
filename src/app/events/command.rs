use crate::core::Environment;
use crate::shared::SimulatorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Zeiger gedrückt → Zustandsautomat
    PointerDown { pos: Vec2 },
    /// Zeiger bewegt → Zustandsautomat
    PointerMove { pos: Vec2 },
    /// Zeiger losgelassen → Zustandsautomat
    PointerUp,
    /// Fahrt starten (nur aus Ready wirksam)
    StartSimulation,
    /// Tween der laufenden Fahrt abbrechen (vor `ResetSession`)
    CancelSimulation,
    /// Sitzung auf Anfang zurücksetzen
    ResetSession,
    /// Spannungsfaktor setzen
    SetTension { value: f32 },
    /// Fahrergewicht setzen (kg)
    SetRiderWeight { value: f32 },
    /// Luftwiderstandsfaktor setzen
    SetDragCoefficient { value: f32 },
    /// Endanker horizontal relativ zum Start setzen (m)
    SetHorizontalDistance { meters: f32 },
    /// Endanker vertikal relativ zum Start setzen (m)
    SetVerticalDrop { meters: f32 },
    /// Hintergrund-Umgebung setzen
    SetEnvironment { environment: Environment },
    /// Canvas-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Scheduler um `dt` fortschreiben und Events verteilen
    AdvanceAnimations { dt: f32 },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<SimulatorOptions> },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
