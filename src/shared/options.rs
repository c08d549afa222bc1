//! Zentrale Konfiguration für den Zipline-Simulator.
//!
//! `SimulatorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::RunTiming;
use serde::{Deserialize, Serialize};

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius um einen Anker in Canvas-Pixeln (Drag-Start).
pub const ANCHOR_PICK_RADIUS_PX: f32 = 15.0;

// ── Fahrt ───────────────────────────────────────────────────────────

/// Anteil von v_max als mittlere Fahrtgeschwindigkeit.
pub const RUN_SPEED_FACTOR: f32 = 0.7;
/// Mindestdauer einer Fahrt in Sekunden.
pub const RUN_MIN_DURATION_S: f32 = 2.0;
/// Dauer je Halbphase des Hinweistext-Überblendens in Sekunden.
pub const INSTRUCTION_FADE_S: f32 = 0.2;

// ── Parameter-Slider ────────────────────────────────────────────────

/// Standard-Spannungsfaktor (Durchhang relativ zur Spannweite).
pub const TENSION_DEFAULT: f32 = 0.1;
/// Maximaler Spannungsfaktor am Slider.
pub const TENSION_MAX: f32 = 0.5;
/// Standard-Fahrergewicht in kg.
pub const RIDER_WEIGHT_DEFAULT_KG: f32 = 70.0;
/// Minimales Fahrergewicht am Slider.
pub const RIDER_WEIGHT_MIN_KG: f32 = 20.0;
/// Maximales Fahrergewicht am Slider.
pub const RIDER_WEIGHT_MAX_KG: f32 = 150.0;
/// Standard-Luftwiderstandsfaktor.
pub const DRAG_COEFFICIENT_DEFAULT: f32 = 0.1;
/// Maximaler Luftwiderstandsfaktor am Slider.
pub const DRAG_COEFFICIENT_MAX: f32 = 1.0;

// ── Rendering ───────────────────────────────────────────────────────

/// Kantenlänge der Anker-Boxen in Pixeln.
pub const ANCHOR_SIZE_PX: f32 = 20.0;
/// Radius der Fahrer-Kugel in Pixeln.
pub const RIDER_RADIUS_PX: f32 = 8.0;
/// Linienstärke des Seils in Pixeln.
pub const CABLE_WIDTH_PX: f32 = 2.0;
/// Anzahl Segmente der gezeichneten Seil-Polylinie.
pub const CABLE_RENDER_SEGMENTS: usize = 50;
/// Farbe des Startankers (RGBA: Grün).
pub const ANCHOR_START_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe des Endankers (RGBA: Rot).
pub const ANCHOR_END_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe des Seils (RGBA: Hellgrau).
pub const CABLE_COLOR: [f32; 4] = [0.67, 0.67, 0.67, 1.0];
/// Farbe des Fahrers (RGBA: Himbeerrot).
pub const RIDER_COLOR: [f32; 4] = [0.91, 0.27, 0.38, 1.0];
/// Canvas-Hintergrund ohne Umgebungsbild (RGBA: Nachtblau).
pub const CANVAS_COLOR: [f32; 4] = [0.09, 0.13, 0.24, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Simulator-Optionen.
/// Wird als `zipline_simulator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Anker-Drag in Canvas-Pixeln
    pub anchor_pick_radius_px: f32,

    // ── Fahrt ───────────────────────────────────────────────────
    /// Anteil von v_max als mittlere Fahrtgeschwindigkeit
    pub run_speed_factor: f32,
    /// Mindestdauer einer Fahrt (s)
    pub run_min_duration_s: f32,
    /// Halbphase der Hinweistext-Überblendung (s)
    #[serde(default = "default_instruction_fade_s")]
    pub instruction_fade_s: f32,

    // ── Parameter ───────────────────────────────────────────────
    /// Spannungsfaktor beim Start und nach dem Zurücksetzen der Optionen
    pub tension_default: f32,
    pub tension_max: f32,
    pub rider_weight_default_kg: f32,
    pub rider_weight_min_kg: f32,
    pub rider_weight_max_kg: f32,
    pub drag_coefficient_default: f32,
    pub drag_coefficient_max: f32,

    // ── Rendering ───────────────────────────────────────────────
    pub anchor_size_px: f32,
    pub rider_radius_px: f32,
    pub cable_width_px: f32,
    /// Segmentanzahl der gezeichneten Seil-Polylinie
    pub cable_render_segments: usize,
    pub anchor_start_color: [f32; 4],
    pub anchor_end_color: [f32; 4],
    pub cable_color: [f32; 4],
    pub rider_color: [f32; 4],
    /// Canvas-Farbe ohne Umgebungsbild
    pub canvas_color: [f32; 4],
    /// Verzeichnis der Umgebungs-Hintergrundbilder
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            anchor_pick_radius_px: ANCHOR_PICK_RADIUS_PX,

            run_speed_factor: RUN_SPEED_FACTOR,
            run_min_duration_s: RUN_MIN_DURATION_S,
            instruction_fade_s: INSTRUCTION_FADE_S,

            tension_default: TENSION_DEFAULT,
            tension_max: TENSION_MAX,
            rider_weight_default_kg: RIDER_WEIGHT_DEFAULT_KG,
            rider_weight_min_kg: RIDER_WEIGHT_MIN_KG,
            rider_weight_max_kg: RIDER_WEIGHT_MAX_KG,
            drag_coefficient_default: DRAG_COEFFICIENT_DEFAULT,
            drag_coefficient_max: DRAG_COEFFICIENT_MAX,

            anchor_size_px: ANCHOR_SIZE_PX,
            rider_radius_px: RIDER_RADIUS_PX,
            cable_width_px: CABLE_WIDTH_PX,
            cable_render_segments: CABLE_RENDER_SEGMENTS,
            anchor_start_color: ANCHOR_START_COLOR,
            anchor_end_color: ANCHOR_END_COLOR,
            cable_color: CABLE_COLOR,
            rider_color: RIDER_COLOR,
            canvas_color: CANVAS_COLOR,
            assets_dir: default_assets_dir(),
        }
    }
}

/// Serde-Default für `instruction_fade_s` (Abwärtskompatibilität).
fn default_instruction_fade_s() -> f32 {
    INSTRUCTION_FADE_S
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

impl SimulatorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(mut opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.normalize_ranges();
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("zipline_simulator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("zipline_simulator.toml")
    }

    /// Bringt die Slider-Grenzen in eine gültige Ordnung.
    ///
    /// Nicht-endliche Grenzen fallen auf die Standardwerte zurück,
    /// vertauschte Gewichtsgrenzen werden getauscht.
    pub fn normalize_ranges(&mut self) {
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };
        self.tension_max = finite_or(self.tension_max, TENSION_MAX).max(0.0);
        self.drag_coefficient_max =
            finite_or(self.drag_coefficient_max, DRAG_COEFFICIENT_MAX).max(0.0);
        self.rider_weight_min_kg = finite_or(self.rider_weight_min_kg, RIDER_WEIGHT_MIN_KG);
        self.rider_weight_max_kg = finite_or(self.rider_weight_max_kg, RIDER_WEIGHT_MAX_KG);
        if self.rider_weight_min_kg > self.rider_weight_max_kg {
            log::warn!(
                "Gewichtsgrenzen vertauscht ({} > {}), werden getauscht",
                self.rider_weight_min_kg,
                self.rider_weight_max_kg
            );
            std::mem::swap(&mut self.rider_weight_min_kg, &mut self.rider_weight_max_kg);
        }
    }

    /// Slider-Bereich des Fahrergewichts, auch bei vertauschten Grenzen aufsteigend.
    pub fn rider_weight_range(&self) -> std::ops::RangeInclusive<f32> {
        let min = self.rider_weight_min_kg.min(self.rider_weight_max_kg);
        let max = self.rider_weight_min_kg.max(self.rider_weight_max_kg);
        min..=max
    }

    /// Zeitparameter für Fahrten.
    pub fn run_timing(&self) -> RunTiming {
        RunTiming {
            speed_factor: self.run_speed_factor,
            min_duration_s: self.run_min_duration_s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut opts = SimulatorOptions::default();
        opts.anchor_pick_radius_px = 22.0;
        opts.run_min_duration_s = 3.5;
        opts.assets_dir = "bilder".to_string();

        let text = toml::to_string_pretty(&opts).unwrap();
        let parsed: SimulatorOptions = toml::from_str(&text).unwrap();

        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_optional_keys_use_defaults() {
        let mut text = toml::to_string_pretty(&SimulatorOptions::default()).unwrap();
        text = text
            .lines()
            .filter(|l| !l.starts_with("instruction_fade_s") && !l.starts_with("assets_dir"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: SimulatorOptions = toml::from_str(&text).unwrap();
        assert_eq!(parsed.instruction_fade_s, INSTRUCTION_FADE_S);
        assert_eq!(parsed.assets_dir, "assets");
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("zipline_simulator_does_not_exist.toml");
        let opts = SimulatorOptions::load_from_file(&path);
        assert_eq!(opts, SimulatorOptions::default());
    }

    #[test]
    fn normalize_ranges_swaps_inverted_weight_limits() {
        let mut opts = SimulatorOptions::default();
        opts.rider_weight_min_kg = 200.0;
        opts.rider_weight_max_kg = 100.0;

        opts.normalize_ranges();

        assert_eq!(opts.rider_weight_min_kg, 100.0);
        assert_eq!(opts.rider_weight_max_kg, 200.0);
    }

    #[test]
    fn normalize_ranges_replaces_non_finite_limits() {
        let mut opts = SimulatorOptions::default();
        opts.tension_max = f32::NAN;
        opts.drag_coefficient_max = -0.5;
        opts.rider_weight_max_kg = f32::INFINITY;

        opts.normalize_ranges();

        assert_eq!(opts.tension_max, TENSION_MAX);
        assert_eq!(opts.drag_coefficient_max, 0.0);
        assert_eq!(opts.rider_weight_max_kg, RIDER_WEIGHT_MAX_KG);
    }

    #[test]
    fn load_from_file_orders_inverted_weight_limits() {
        let mut opts = SimulatorOptions::default();
        opts.rider_weight_min_kg = 300.0;
        opts.rider_weight_max_kg = 50.0;
        let path = std::env::temp_dir().join("zipline_simulator_inverted_limits.toml");
        std::fs::write(&path, toml::to_string_pretty(&opts).unwrap()).unwrap();

        let loaded = SimulatorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.rider_weight_range(), 50.0..=300.0);
    }

    #[test]
    fn run_timing_reflects_options() {
        let mut opts = SimulatorOptions::default();
        opts.run_speed_factor = 0.5;
        opts.run_min_duration_s = 4.0;

        let timing = opts.run_timing();
        assert_eq!(timing.speed_factor, 0.5);
        assert_eq!(timing.min_duration_s, 4.0);
    }
}
