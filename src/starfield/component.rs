use crate::config::StarfieldConfig;
use crate::foundation::core::{Affine, Rect, Rgba, Viewport};
use crate::foundation::math::Rng64;
use crate::host::component::{Component, FrameClock, FramePlan, HostEnv};
use crate::host::events::{EventKind, EventResponse, InputEvent};
use crate::render::surface::{Painter, Surface};
use crate::starfield::model::{StarfieldState, galaxy_pulse};

/// Full-viewport animated sky drawn behind the page.
pub struct StarfieldBackground {
    cfg: StarfieldConfig,
    rng: Rng64,
    state: Option<StarfieldState>,
    surface: Option<Surface>,
}

impl StarfieldBackground {
    pub fn new(cfg: StarfieldConfig, seed: u64) -> Self {
        Self {
            cfg,
            rng: Rng64::new(seed),
            state: None,
            surface: None,
        }
    }

    /// Current simulation state, `None` before mount.
    pub fn state(&self) -> Option<&StarfieldState> {
        self.state.as_ref()
    }

    /// Throw away stars and nebulae and regenerate them for `viewport`.
    #[tracing::instrument(skip(self))]
    pub fn rebuild(&mut self, viewport: Viewport) {
        let state = StarfieldState::generate(viewport, &self.cfg, &mut self.rng);
        tracing::debug!(
            stars = state.stars.len(),
            nebulae = state.nebulae.len(),
            "starfield regenerated"
        );
        self.state = Some(state);
        self.surface = Surface::new(viewport);
    }

    /// Advance and redraw one frame.
    pub fn step(&mut self) {
        let (Some(state), Some(surface)) = (self.state.as_mut(), self.surface.as_mut()) else {
            tracing::trace!("starfield has no surface, frame skipped");
            return;
        };
        state.step(&self.cfg);
        let cfg = &self.cfg;
        surface.render_opaque(|p| draw(p, state, cfg));
    }
}

fn draw(p: &mut Painter<'_>, state: &StarfieldState, cfg: &StarfieldConfig) {
    let vp = state.viewport;
    let t = state.time_ms;
    p.fill_rect(vp.rect(), Rgba::BLACK);

    let center = vp.center();
    let pulse = galaxy_pulse(t);
    let radius = f64::from(vp.width.max(vp.height)) * cfg.galaxy_radius_factor;
    p.set_transform(Affine::rotate_about(cfg.galaxy_rotation, center));
    p.fill_radial(
        vp.rect(),
        center,
        radius,
        [
            (0.0, Rgba::rgb(147, 112, 219).with_alpha(pulse)),
            (0.3, Rgba::rgb(72, 61, 139).with_alpha(pulse * 0.6)),
            (0.6, Rgba::rgb(25, 25, 112).with_alpha(pulse * 0.3)),
            (1.0, Rgba::TRANSPARENT),
        ],
    );
    p.reset_transform();

    for n in &state.nebulae {
        let opacity = n.opacity_at(t);
        let [r, g, b] = n.color;
        let c = Rgba::rgb(r, g, b);
        p.fill_radial(
            Rect::from_center_size(n.pos, (n.radius * 2.0, n.radius * 2.0)),
            n.pos,
            n.radius,
            [
                (0.0, c.with_alpha(opacity)),
                (0.5, c.with_alpha(opacity * 0.3)),
                (1.0, Rgba::TRANSPARENT),
            ],
        );
    }

    for star in &state.stars {
        let look = star.look(t);
        let color = Rgba::WHITE.with_alpha(look.alpha);
        if look.disc {
            p.fill_circle(star.pos, look.size / 2.0, color);
            if look.glow {
                let halo = look.size * 3.0;
                p.fill_radial(
                    Rect::from_center_size(star.pos, (halo * 2.0, halo * 2.0)),
                    star.pos,
                    halo,
                    [
                        (0.0, Rgba::WHITE.with_alpha(look.alpha * 0.3)),
                        (1.0, Rgba::WHITE.with_alpha(0.0)),
                    ],
                );
            }
        } else {
            let side = look.size.max(1.0);
            p.fill_rect(Rect::from_origin_size(star.pos, (side, side)), color);
        }
    }
}

impl Component for StarfieldBackground {
    fn name(&self) -> &'static str {
        "starfield"
    }

    fn listens_to(&self) -> &'static [EventKind] {
        &[EventKind::Resize]
    }

    fn mount(&mut self, env: &HostEnv) {
        self.rebuild(env.viewport);
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if let InputEvent::Resize(vp) = event {
            self.rebuild(*vp);
        }
        EventResponse::default()
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
#[path = "../../tests/unit/starfield/component.rs"]
mod tests;
