use crate::core::Environment;

/// View-State: Canvas-Größe und gewählter Hintergrund.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Canvas-Größe in Pixeln [Breite, Höhe]
    pub canvas_size: [f32; 2],
    pub environment: Environment,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }
}
