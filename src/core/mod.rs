// Shared primitives used by both the engine and the game

pub mod math;

pub use math::{clamp_magnitude, Rect};
