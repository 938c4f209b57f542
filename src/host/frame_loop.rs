use crate::foundation::core::{Fps, FrameIndex, Rgba};
use crate::foundation::error::StardriftResult;
use crate::host::component::{Component, FrameClock, FramePlan, HostEnv};
use crate::host::events::{EventKind, EventResponse, InputEvent};
use crate::host::scheduler::{ComponentId, FrameHandle, FrameScheduler};
use crate::render::composite::{fill_in_place, over_in_place};
use crate::render::frame::FrameRGBA;

struct Slot {
    id: ComponentId,
    component: Box<dyn Component>,
    frame: Option<FrameHandle>,
}

#[derive(Clone, Copy, Debug)]
struct Listener {
    component: ComponentId,
    kind: EventKind,
}

/// Headless page host.
///
/// Owns mounted components, their listener registrations and frame requests, and a fixed-step
/// clock. Each [`FrameLoop::tick`] delivers the due frame callbacks and composites every
/// component surface, in mount order, over the page background.
pub struct FrameLoop {
    env: HostEnv,
    fps: Fps,
    background: Rgba,
    scheduler: FrameScheduler,
    slots: Vec<Slot>,
    listeners: Vec<Listener>,
    next_component: u64,
    frames: u64,
}

impl FrameLoop {
    pub fn new(env: HostEnv, fps: Fps) -> Self {
        Self {
            env,
            fps,
            background: Rgba::BLACK,
            scheduler: FrameScheduler::new(),
            slots: Vec::new(),
            listeners: Vec::new(),
            next_component: 0,
            frames: 0,
        }
    }

    /// Page colour behind all components.
    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    pub fn env(&self) -> HostEnv {
        self.env
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Frames delivered so far.
    pub fn frame_index(&self) -> FrameIndex {
        FrameIndex(self.frames)
    }

    /// Mount `component`: build its state, register its listeners and request its first frame.
    #[tracing::instrument(skip_all, fields(component = component.name()))]
    pub fn mount(&mut self, mut component: Box<dyn Component>) -> ComponentId {
        self.next_component += 1;
        let id = ComponentId(self.next_component);

        component.mount(&self.env);
        for &kind in component.listens_to() {
            self.listeners.push(Listener {
                component: id,
                kind,
            });
        }
        let frame = Some(self.scheduler.request(id));
        self.slots.push(Slot {
            id,
            component,
            frame,
        });
        tracing::debug!(?id, "mounted");
        id
    }

    /// Cancel the component's frame request, detach its listeners and drop it.
    ///
    /// Returns `false` if `id` is not mounted.
    pub fn teardown(&mut self, id: ComponentId) -> bool {
        let Some(pos) = self.slots.iter().position(|s| s.id == id) else {
            return false;
        };
        let mut slot = self.slots.remove(pos);
        if let Some(handle) = slot.frame.take() {
            self.scheduler.cancel(handle);
        }
        self.listeners.retain(|l| l.component != id);
        slot.component.unmount();
        tracing::debug!(?id, component = slot.component.name(), "torn down");
        true
    }

    /// Tear down every component, newest first.
    pub fn teardown_all(&mut self) {
        let ids: Vec<ComponentId> = self.slots.iter().rev().map(|s| s.id).collect();
        for id in ids {
            self.teardown(id);
        }
    }

    /// Number of registered listeners across all components.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of outstanding frame requests.
    pub fn pending_frames(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Deliver `event` to every listener registered for its kind, in registration order.
    pub fn dispatch(&mut self, event: &InputEvent) -> EventResponse {
        if let InputEvent::Resize(viewport) = event {
            self.env.viewport = *viewport;
        }
        let kind = event.kind();
        let targets: Vec<ComponentId> = self
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.component)
            .collect();

        let mut response = EventResponse::default();
        for id in targets {
            if let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) {
                response = response.merge(slot.component.handle_event(event));
            }
        }
        response
    }

    /// Run one frame and return the composited page.
    pub fn tick(&mut self) -> StardriftResult<FrameRGBA> {
        let dt_ms = self.fps.frame_duration_ms();
        let clock = FrameClock {
            index: FrameIndex(self.frames),
            now_ms: self.frames as f64 * dt_ms,
            dt_ms,
        };
        self.frames += 1;

        for (handle, id) in self.scheduler.take_due() {
            let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) else {
                continue;
            };
            if slot.frame != Some(handle) {
                continue;
            }
            slot.frame = None;
            if slot.component.frame(&clock) == FramePlan::Continue {
                slot.frame = Some(self.scheduler.request(id));
            }
        }

        self.composite()
    }

    fn composite(&self) -> StardriftResult<FrameRGBA> {
        let vp = self.env.viewport;
        let mut out = FrameRGBA::transparent(vp.width, vp.height);
        fill_in_place(&mut out.data, self.background.to_premul().to_array());

        for slot in &self.slots {
            let Some(surface) = slot.component.surface() else {
                continue;
            };
            if surface.viewport() != vp {
                tracing::trace!(
                    component = slot.component.name(),
                    "surface size is stale, not composited"
                );
                continue;
            }
            over_in_place(&mut out.data, surface.data(), 1.0)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/frame_loop.rs"]
mod tests;
