//! Stardrift renders the animations of a personal landing page headlessly on the CPU.
//!
//! Three independent components each own one surface and one frame callback:
//!
//! 1. **Starfield**: twinkling stars, drifting nebulae and a pulsing galaxy glow.
//! 2. **Reveal**: a name forming out of particles, then sliding up to reveal a profile section.
//! 3. **Demo**: particle text that scatters around the pointer, with asteroids drifting by.
//!
//! A [`FrameLoop`] plays the role of the browser: it mounts components, dispatches input
//! events to their listeners, delivers frame callbacks through cancellable handles and
//! composites the surfaces into premultiplied RGBA8 frames. Frames can be collected in memory
//! or written to PNG sequences and MP4 files.
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod config;
pub mod demo;
pub mod encode;
pub mod foundation;
pub mod host;
pub mod render;
pub mod reveal;
pub mod scene;
pub mod starfield;

pub use animation::ease::Ease;
pub use animation::latch::{LatchState, OneShot};
pub use animation::tween::Tween;
pub use assets::background::BackgroundImage;
pub use assets::decode::{PreparedImage, decode_image, load_image};
pub use assets::fonts::FontLibrary;
pub use assets::mask::{OffscreenText, TextMask, TextStyle, sample_home};
pub use config::{DemoConfig, NameConfig, SceneConfig, StarfieldConfig};
pub use demo::{DemoState, ParticleTextDemo};
pub use encode::ffmpeg::{FfmpegSink, is_ffmpeg_on_path};
pub use encode::png::{PngSequenceSink, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig, render_frames};
pub use foundation::core::{Fps, FrameIndex, Point, Rect, Rgba, Rgba8Premul, Vec2, Viewport};
pub use foundation::error::{StardriftError, StardriftResult};
pub use foundation::math::Rng64;
pub use host::component::{Component, FrameClock, FramePlan, HostEnv};
pub use host::events::{EventKind, EventResponse, InputEvent};
pub use host::frame_loop::FrameLoop;
pub use host::scheduler::{ComponentId, FrameHandle, FrameScheduler};
pub use render::frame::FrameRGBA;
pub use render::surface::{Painter, Surface};
pub use reveal::{
    LandingPage, ParticleName, ProfileCard, ProfileLayout, ProfileSection, RevealOrchestrator,
    RevealPhase,
};
pub use scene::{Scene, SceneOptions, build_scene};
pub use starfield::StarfieldBackground;
