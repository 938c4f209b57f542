use crate::assets::background::BackgroundImage;
use crate::assets::fonts::FontLibrary;
use crate::assets::mask::{OffscreenText, TextMask, TextStyle};
use crate::config::DemoConfig;
use crate::demo::asteroids::{Asteroid, step_asteroids};
use crate::demo::particles::{DemoParticle, populate, step_particles, target_count, top_up};
use crate::demo::pointer::PointerState;
use crate::foundation::core::{Point, Rect, Rgba, Viewport};
use crate::foundation::math::Rng64;
use crate::host::component::{Component, FrameClock, FramePlan, HostEnv};
use crate::host::events::{EventKind, EventResponse, InputEvent};
use crate::render::surface::{ImagePaint, Painter, Surface};

const ASTEROID_GREY: Rgba = Rgba::rgb(0x66, 0x66, 0x66);

/// Simulation state rebuilt on every resize.
#[derive(Clone, Debug)]
pub struct DemoState {
    pub viewport: Viewport,
    pub mobile: bool,
    pub mask: TextMask,
    pub target: usize,
    pub particles: Vec<DemoParticle>,
    pub asteroids: Vec<Asteroid>,
}

impl DemoState {
    /// Initial population for `mask`.
    pub fn new(
        viewport: Viewport,
        mobile: bool,
        mask: TextMask,
        cfg: &DemoConfig,
        rng: &mut Rng64,
    ) -> Self {
        let target = target_count(viewport, cfg.base_particles);
        let particles = populate(&mask, target, rng, cfg);
        Self {
            viewport,
            mobile,
            mask,
            target,
            particles,
            asteroids: Vec::new(),
        }
    }

    /// One frame of asteroid and particle simulation.
    pub fn step(&mut self, pointer: Option<Point>, cfg: &DemoConfig, rng: &mut Rng64) {
        step_asteroids(&mut self.asteroids, self.viewport, cfg.asteroid_chance, rng);
        step_particles(&mut self.particles, pointer, &self.mask, rng, cfg);
        top_up(&mut self.particles, self.target, &self.mask, rng, cfg);
    }
}

/// Pointer-reactive particle text with asteroids drifting behind it.
pub struct ParticleTextDemo {
    cfg: DemoConfig,
    rng: Rng64,
    text: OffscreenText,
    background: BackgroundImage,
    pointer: PointerState,
    state: Option<DemoState>,
    surface: Option<Surface>,
}

impl ParticleTextDemo {
    pub fn new(cfg: DemoConfig, fonts: FontLibrary, seed: u64) -> Self {
        Self {
            cfg,
            rng: Rng64::new(seed),
            text: OffscreenText::new(fonts),
            background: BackgroundImage::none(),
            pointer: PointerState::new(false),
            state: None,
            surface: None,
        }
    }

    /// Draw `background` behind the particles once it has loaded.
    pub fn with_background(mut self, background: BackgroundImage) -> Self {
        self.background = background;
        self
    }

    pub fn state(&self) -> Option<&DemoState> {
        self.state.as_ref()
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_mobile(&self, viewport: Viewport) -> bool {
        viewport.width < self.cfg.breakpoint_px
    }

    pub fn style_for(&self, viewport: Viewport) -> TextStyle {
        let font_px = if self.is_mobile(viewport) {
            self.cfg.mobile_font_px
        } else {
            self.cfg.font_px
        };
        TextStyle {
            text: self.cfg.text.clone(),
            font_px,
            family: self.cfg.family.clone(),
            weight: self.cfg.weight,
        }
    }

    /// Rebuild the text mask and regenerate particles and asteroids for `viewport`.
    #[tracing::instrument(skip(self))]
    pub fn rebuild(&mut self, viewport: Viewport) {
        let style = self.style_for(viewport);
        let mask = match self.text.render(&style, viewport) {
            Ok(mask) => mask,
            Err(err) => {
                tracing::warn!(%err, "demo text mask unavailable");
                TextMask::empty(viewport.width, viewport.height)
            }
        };
        self.rebuild_with_mask(viewport, mask);
    }

    /// Same as [`ParticleTextDemo::rebuild`] with a ready-made mask.
    pub fn rebuild_with_mask(&mut self, viewport: Viewport, mask: TextMask) {
        let mobile = self.is_mobile(viewport);
        let state = DemoState::new(viewport, mobile, mask, &self.cfg, &mut self.rng);
        tracing::debug!(
            target_count = state.target,
            particles = state.particles.len(),
            mobile,
            "demo particles regenerated"
        );
        self.state = Some(state);
        self.surface = Surface::new(viewport);
    }

    /// Advance and redraw one frame.
    pub fn step(&mut self) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        state.step(self.pointer.active(), &self.cfg, &mut self.rng);

        let Some(surface) = self.surface.as_mut() else {
            tracing::trace!("demo has no surface, frame skipped");
            return;
        };
        let background = self.background.poll();
        let dim = self.cfg.background_dim;
        surface.render_opaque(|p| draw(p, state, background, dim));
    }
}

fn draw(p: &mut Painter<'_>, state: &DemoState, background: Option<&ImagePaint>, dim: f64) {
    let full = state.viewport.rect();
    match background {
        Some(img) => {
            p.draw_image(img, full);
            p.fill_rect(full, Rgba::BLACK.with_alpha(dim));
        }
        None => p.fill_rect(full, Rgba::BLACK),
    }

    for a in &state.asteroids {
        p.fill_polygon(&a.outline(), ASTEROID_GREY.with_alpha(a.opacity));
    }

    for particle in &state.particles {
        p.fill_rect(
            Rect::from_origin_size(particle.pos, (particle.size, particle.size)),
            particle.color,
        );
    }
}

impl Component for ParticleTextDemo {
    fn name(&self) -> &'static str {
        "demo"
    }

    fn listens_to(&self) -> &'static [EventKind] {
        &[
            EventKind::Resize,
            EventKind::PointerMove,
            EventKind::PointerLeave,
            EventKind::TouchStart,
            EventKind::TouchMove,
            EventKind::TouchEnd,
        ]
    }

    fn mount(&mut self, env: &HostEnv) {
        self.pointer = PointerState::new(env.touch_device);
        self.rebuild(env.viewport);
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if let InputEvent::Resize(vp) = event {
            self.rebuild(*vp);
            return EventResponse::default();
        }
        self.pointer.apply(event)
    }

    fn frame(&mut self, _clock: &FrameClock) -> FramePlan {
        self.step();
        FramePlan::Continue
    }

    fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/demo/component.rs"]
mod tests;
