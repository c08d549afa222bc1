//! Use-Cases der Application-Layer-Orchestrierung.

pub mod animation;
pub mod instructions;
pub mod interaction;
pub mod params;
pub mod simulation;
pub mod viewport;
