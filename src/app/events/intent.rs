use crate::core::Environment;
use crate::shared::SimulatorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Maustaste auf der Canvas gedrückt (Canvas-Pixel)
    CanvasPointerPressed { pos: Vec2 },
    /// Maus über der Canvas bewegt (Canvas-Pixel)
    CanvasPointerMoved { pos: Vec2 },
    /// Maustaste losgelassen
    CanvasPointerReleased,
    /// Simulieren-Button oder Leertaste
    SimulateRequested,
    /// Zurücksetzen-Button oder Escape
    ResetRequested,
    /// Spannungs-Slider geändert
    TensionChanged { value: f32 },
    /// Gewichts-Slider geändert (kg)
    RiderWeightChanged { value: f32 },
    /// Luftwiderstands-Slider geändert
    DragCoefficientChanged { value: f32 },
    /// Feld „Horizontale Distanz“ bestätigt (Rohtext in Metern)
    HorizontalDistanceEdited { text: String },
    /// Feld „Vertikaler Abfall“ bestätigt (Rohtext in Metern)
    VerticalDropEdited { text: String },
    /// Hintergrund-Umgebung gewählt
    EnvironmentSelected { environment: Environment },
    /// Canvas-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Neuer Frame, `dt` Sekunden seit dem letzten
    FrameAdvanced { dt: f32 },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden im Dialog geändert
    OptionsChanged { options: Box<SimulatorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
