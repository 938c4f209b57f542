use std::sync::{Arc, Mutex};

use super::*;
use crate::foundation::core::{Point, Rect, Viewport};
use crate::render::surface::Surface;

#[derive(Default)]
struct Log {
    frames: u32,
    events: Vec<EventKind>,
    unmounted: bool,
}

struct Probe {
    log: Arc<Mutex<Log>>,
    color: Rgba,
    frames_left: Option<u32>,
    surface: Option<Surface>,
}

impl Probe {
    fn new(log: Arc<Mutex<Log>>, color: Rgba) -> Self {
        Self {
            log,
            color,
            frames_left: None,
            surface: None,
        }
    }
}

impl Component for Probe {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn listens_to(&self) -> &'static [EventKind] {
        &[EventKind::PointerMove, EventKind::TouchMove, EventKind::Resize]
    }

    fn mount(&mut self, env: &HostEnv) {
        self.surface = Surface::new(env.viewport);
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        self.log.lock().unwrap().events.push(event.kind());
        match event {
            InputEvent::Resize(vp) => {
                self.surface = Surface::new(*vp);
                EventResponse::default()
            }
            InputEvent::TouchMove(_) => EventResponse::prevent_default(),
            _ => EventResponse::default(),
        }
    }

    fn frame(&mut self, _clock: &FrameClock) -> FramePlan {
        self.log.lock().unwrap().frames += 1;
        let color = self.color;
        if let Some(s) = self.surface.as_mut() {
            s.render(|p| p.fill_rect(Rect::new(0.0, 0.0, 2.0, 4.0), color));
        }
        match self.frames_left.as_mut() {
            Some(0) => FramePlan::Stop,
            Some(n) => {
                *n -= 1;
                if *n == 0 {
                    FramePlan::Stop
                } else {
                    FramePlan::Continue
                }
            }
            None => FramePlan::Continue,
        }
    }

    fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    fn unmount(&mut self) {
        self.log.lock().unwrap().unmounted = true;
    }
}

fn host() -> FrameLoop {
    FrameLoop::new(HostEnv::new(Viewport::new(4, 4)), Fps::default())
}

#[test]
fn mounted_component_runs_every_tick() {
    let log = Arc::new(Mutex::new(Log::default()));
    let mut fl = host();
    fl.mount(Box::new(Probe::new(log.clone(), Rgba::WHITE)));
    for _ in 0..3 {
        fl.tick().unwrap();
    }
    assert_eq!(log.lock().unwrap().frames, 3);
    assert_eq!(fl.frame_index(), FrameIndex(3));
}

#[test]
fn stop_plan_ends_frame_requests() {
    let log = Arc::new(Mutex::new(Log::default()));
    let mut probe = Probe::new(log.clone(), Rgba::WHITE);
    probe.frames_left = Some(2);
    let mut fl = host();
    fl.mount(Box::new(probe));
    for _ in 0..5 {
        fl.tick().unwrap();
    }
    assert_eq!(log.lock().unwrap().frames, 2);
    assert_eq!(fl.pending_frames(), 0);
}

#[test]
fn teardown_cancels_frames_and_detaches_listeners() {
    let log = Arc::new(Mutex::new(Log::default()));
    let mut fl = host();
    let id = fl.mount(Box::new(Probe::new(log.clone(), Rgba::WHITE)));
    assert_eq!(fl.listener_count(), 3);
    assert_eq!(fl.pending_frames(), 1);

    fl.tick().unwrap();
    assert!(fl.teardown(id));
    assert!(!fl.teardown(id));
    assert_eq!(fl.listener_count(), 0);
    assert_eq!(fl.pending_frames(), 0);

    fl.tick().unwrap();
    fl.dispatch(&InputEvent::PointerMove(Point::new(1.0, 1.0)));

    let log = log.lock().unwrap();
    assert_eq!(log.frames, 1);
    assert!(log.events.is_empty());
    assert!(log.unmounted);
}

#[test]
fn dispatch_only_reaches_registered_kinds() {
    let log = Arc::new(Mutex::new(Log::default()));
    let mut fl = host();
    fl.mount(Box::new(Probe::new(log.clone(), Rgba::WHITE)));

    let r = fl.dispatch(&InputEvent::TouchMove(vec![Point::new(1.0, 1.0)]));
    assert!(r.prevent_default);
    let r = fl.dispatch(&InputEvent::TouchEnd);
    assert!(!r.prevent_default);
    fl.dispatch(&InputEvent::PointerMove(Point::ZERO));

    assert_eq!(
        log.lock().unwrap().events,
        vec![EventKind::TouchMove, EventKind::PointerMove]
    );
}

#[test]
fn composite_follows_mount_order_over_black() {
    let a = Arc::new(Mutex::new(Log::default()));
    let b = Arc::new(Mutex::new(Log::default()));
    let mut fl = host();
    fl.mount(Box::new(Probe::new(a, Rgba::rgb(255, 0, 0))));
    fl.mount(Box::new(Probe::new(b, Rgba::rgb(0, 0, 255))));

    let frame = fl.tick().unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(3, 0), Some([0, 0, 0, 255]));
}

#[test]
fn resize_updates_env_and_output_size() {
    let log = Arc::new(Mutex::new(Log::default()));
    let mut fl = host();
    fl.mount(Box::new(Probe::new(log, Rgba::WHITE)));
    fl.dispatch(&InputEvent::Resize(Viewport::new(8, 2)));
    assert_eq!(fl.env().viewport, Viewport::new(8, 2));
    let frame = fl.tick().unwrap();
    assert_eq!((frame.width, frame.height), (8, 2));
    assert_eq!(frame.pixel(1, 1), Some([255, 255, 255, 255]));
}

#[test]
fn missing_surface_is_skipped() {
    let log = Arc::new(Mutex::new(Log::default()));
    let mut fl = FrameLoop::new(HostEnv::new(Viewport::new(0, 0)), Fps::default());
    fl.mount(Box::new(Probe::new(log.clone(), Rgba::WHITE)));
    let frame = fl.tick().unwrap();
    assert!(frame.data.is_empty());
    assert_eq!(log.lock().unwrap().frames, 1);
}
