//! Umrechnung zwischen Canvas-Pixeln und Metern.
//!
//! Alle abgeleiteten physikalischen Größen (Länge, Höhe, Geschwindigkeit)
//! laufen über diese Funktionen, damit der Maßstab überall identisch ist.

/// Maßstab des Canvas: 10 Pixel entsprechen 1 Meter.
pub const PIXELS_PER_METER: f32 = 10.0;

/// Umrechnungsfaktor m/s → km/h.
pub const MS_TO_KMH: f32 = 3.6;

/// Pixel → Meter.
pub fn px_to_m(px: f32) -> f32 {
    px / PIXELS_PER_METER
}

/// Meter → Pixel.
pub fn m_to_px(m: f32) -> f32 {
    m * PIXELS_PER_METER
}

/// m/s → km/h.
pub fn ms_to_kmh(speed_ms: f32) -> f32 {
    speed_ms * MS_TO_KMH
}
