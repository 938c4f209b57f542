use crate::animation::latch::OneShot;
use crate::assets::fonts::FontLibrary;
use crate::assets::mask::{OffscreenText, TextMask, TextStyle};
use crate::config::NameConfig;
use crate::foundation::core::{Point, Rect, Rgba, Viewport};
use crate::foundation::math::{Rng64, smoothing_factor};
use crate::render::surface::Painter;

/// Reference frame length the smoothing rate is tuned for.
const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

/// Invoked once when the name has formed.
pub type CompletionCallback = Box<dyn FnMut() + Send>;

/// A particle of the forming name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NameParticle {
    pub pos: Point,
    pub home: Point,
}

/// Homes on the mask grid, thinned evenly so there are at most `max` of them.
pub fn grid_homes(mask: &TextMask, stride: u32, max: usize) -> Vec<Point> {
    let homes = mask.grid_samples(stride);
    if max == 0 {
        return Vec::new();
    }
    if homes.len() <= max {
        return homes;
    }
    let step = homes.len().div_ceil(max);
    homes.into_iter().step_by(step).collect()
}

/// One particle per home, starting at a uniformly random position in `viewport`.
pub fn scatter(homes: &[Point], viewport: Viewport, rng: &mut Rng64) -> Vec<NameParticle> {
    homes
        .iter()
        .map(|&home| NameParticle {
            pos: Point::new(
                rng.range(0.0, f64::from(viewport.width)),
                rng.range(0.0, f64::from(viewport.height)),
            ),
            home,
        })
        .collect()
}

/// Move every particle `factor` of the way home.
pub fn ease_home(particles: &mut [NameParticle], factor: f64) {
    for p in particles {
        p.pos += (p.home - p.pos) * factor;
    }
}

/// Return `true` when every particle is within `epsilon` of its home.
pub fn all_within(particles: &[NameParticle], epsilon: f64) -> bool {
    particles.iter().all(|p| p.pos.distance(p.home) <= epsilon)
}

/// The configured name forming out of scattered particles.
///
/// Formation ends when the particles settle or the time limit runs out, whichever comes first.
/// The completion callback runs at that moment and never again for this instance, whatever
/// happens to the particles afterwards.
pub struct ParticleName {
    cfg: NameConfig,
    rng: Rng64,
    text: OffscreenText,
    viewport: Viewport,
    particles: Vec<NameParticle>,
    elapsed_ms: f64,
    latch: OneShot,
    on_complete: Option<CompletionCallback>,
}

impl ParticleName {
    pub fn new(cfg: NameConfig, fonts: FontLibrary, seed: u64) -> Self {
        Self {
            cfg,
            rng: Rng64::new(seed),
            text: OffscreenText::new(fonts),
            viewport: Viewport::new(0, 0),
            particles: Vec::new(),
            elapsed_ms: 0.0,
            latch: OneShot::new(),
            on_complete: None,
        }
    }

    /// Register the formation-complete notification.
    pub fn set_on_complete(&mut self, callback: CompletionCallback) {
        self.on_complete = Some(callback);
    }

    pub fn particles(&self) -> &[NameParticle] {
        &self.particles
    }

    pub fn is_complete(&self) -> bool {
        self.latch.is_completed()
    }

    pub fn style_for(&self, viewport: Viewport) -> TextStyle {
        let font_px = if viewport.width < self.cfg.breakpoint_px {
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

    /// Rasterize the name for `viewport` and scatter a fresh particle set.
    #[tracing::instrument(skip(self))]
    pub fn rebuild(&mut self, viewport: Viewport) {
        let style = self.style_for(viewport);
        let mask = match self.text.render(&style, viewport) {
            Ok(mask) => mask,
            Err(err) => {
                tracing::warn!(%err, "name mask unavailable, no particles");
                TextMask::empty(viewport.width, viewport.height)
            }
        };
        let homes = grid_homes(&mask, self.cfg.grid_stride, self.cfg.max_particles);
        self.rebuild_with_homes(viewport, &homes);
    }

    /// Same as [`ParticleName::rebuild`] with precomputed homes.
    pub fn rebuild_with_homes(&mut self, viewport: Viewport, homes: &[Point]) {
        self.viewport = viewport;
        self.particles = scatter(homes, viewport, &mut self.rng);
        self.elapsed_ms = 0.0;
        tracing::debug!(particles = self.particles.len(), "name particles regenerated");
    }

    /// Advance by `dt_ms`. Returns `true` on the frame the completion callback fired.
    pub fn update(&mut self, dt_ms: f64) -> bool {
        self.elapsed_ms += dt_ms;
        let factor = smoothing_factor(self.cfg.smoothing, dt_ms, REFERENCE_FRAME_MS);
        ease_home(&mut self.particles, factor);

        let settled = all_within(&self.particles, self.cfg.settle_epsilon_px)
            || self.elapsed_ms >= self.cfg.formation_limit_ms;
        if settled && self.latch.trigger() {
            tracing::debug!(elapsed_ms = self.elapsed_ms, "name formation complete");
            if let Some(cb) = self.on_complete.as_mut() {
                cb();
            }
            return true;
        }
        false
    }

    /// Draw the particles shifted vertically by `offset_y`.
    pub fn draw(&self, p: &mut Painter<'_>, offset_y: f64) {
        let size = self.cfg.particle_size;
        for particle in &self.particles {
            let origin = Point::new(particle.pos.x, particle.pos.y + offset_y);
            p.fill_rect(Rect::from_origin_size(origin, (size, size)), Rgba::WHITE);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/particle_name.rs"]
mod tests;
