//! Twinkling starfield with drifting nebulae and a pulsing galaxy glow.

pub mod component;
pub mod model;

pub use component::StarfieldBackground;
