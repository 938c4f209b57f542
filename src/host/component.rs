use crate::foundation::core::{FrameIndex, Viewport};
use crate::host::events::{EventKind, EventResponse, InputEvent};
use crate::render::surface::Surface;

/// Properties of the host environment a component is mounted into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostEnv {
    pub viewport: Viewport,
    /// The device reports touch support. Pointer interaction then requires an active touch.
    pub touch_device: bool,
}

impl HostEnv {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            touch_device: false,
        }
    }

    pub fn with_touch(mut self, touch_device: bool) -> Self {
        self.touch_device = touch_device;
        self
    }
}

/// Timing information passed to [`Component::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    /// Frames delivered to this loop so far.
    pub index: FrameIndex,
    /// Loop time at this frame, in milliseconds.
    pub now_ms: f64,
    /// Time since the previous frame, in milliseconds.
    pub dt_ms: f64,
}

/// Whether a component wants another frame after the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePlan {
    Continue,
    Stop,
}

/// A self-contained animation that owns one surface and one frame callback.
///
/// The host calls [`Component::mount`] once, then [`Component::frame`] once per scheduled frame
/// and [`Component::handle_event`] for every event kind listed in
/// [`Component::listens_to`]. After teardown none of them are called again.
pub trait Component {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Event kinds this component registers listeners for at mount time.
    fn listens_to(&self) -> &'static [EventKind] {
        &[]
    }

    /// Build the surface and the initial simulation state for `env`.
    fn mount(&mut self, env: &HostEnv);

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        let _ = event;
        EventResponse::default()
    }

    /// Advance the simulation by one frame and redraw the surface.
    fn frame(&mut self, clock: &FrameClock) -> FramePlan;

    /// The most recently drawn surface, if the component has one.
    fn surface(&self) -> Option<&Surface>;

    /// Release resources. Called once, after listeners are detached.
    fn unmount(&mut self) {}
}
