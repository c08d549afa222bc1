//! UI-Komponenten: Steuerpanel, Datenpanel, Canvas-Input, Options-Dialog.

pub mod controls;
pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Panels erzeugen nur `AppIntent`s; der Zustand wird ausschließlich über den
/// Controller verändert.
pub mod options_dialog;
pub mod status;

pub use controls::ControlsPanel;
pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use status::render_data_panel;
