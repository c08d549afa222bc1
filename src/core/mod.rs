//! Core-Domänentypen: Seilkurve, Fahrtmodell, Einheiten, Kennzahlen.

pub mod cable;
pub mod canvas;
pub mod environment;
pub mod kinematics;
pub mod metrics;
pub mod units;

pub use cable::{CableCurve, LENGTH_SAMPLES};
pub use canvas::CanvasProjection;
pub use environment::Environment;
pub use kinematics::{max_speed, RunTiming, GRAVITY};
pub use metrics::{CableMetrics, Slope};
pub use units::{m_to_px, ms_to_kmh, px_to_m, PIXELS_PER_METER};
