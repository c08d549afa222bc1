//! Eingabe-Intents der UI und daraus abgeleitete Commands des Simulators.
//!
//! `AppIntent` beschreibt, was der Nutzer getan hat (Klick, Feldeingabe,
//! Frame-Tick). `AppCommand` beschreibt die Zustandsänderung, die der
//! Controller ausführt.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;
