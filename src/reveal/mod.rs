//! Particle name that forms, slides away and hands off to a profile section.

pub mod landing;
pub mod orchestrator;
pub mod particle_name;
pub mod profile;

pub use landing::LandingPage;
pub use orchestrator::{RevealOrchestrator, RevealPhase};
pub use particle_name::ParticleName;
pub use profile::{ProfileCard, ProfileLayout, ProfileSection};
