//! Particle text that scatters around the pointer, with asteroids drifting behind it.

pub mod asteroids;
pub mod component;
pub mod particles;
pub mod pointer;

pub use component::{DemoState, ParticleTextDemo};
