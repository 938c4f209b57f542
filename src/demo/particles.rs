use crate::assets::mask::{TextMask, sample_home};
use crate::config::DemoConfig;
use crate::foundation::core::{Point, Rgba, Vec2, Viewport};
use crate::foundation::math::Rng64;

/// Viewport the base particle count is defined for.
const REFERENCE_AREA: f64 = 1920.0 * 1080.0;

/// A particle that lives on the text and shies away from the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoParticle {
    pub pos: Point,
    pub home: Point,
    pub size: f64,
    /// Remaining lifetime in frames.
    pub life: f64,
    pub glitter_phase: f64,
    /// Colour chosen by the most recent step.
    pub color: Rgba,
}

/// Particle count for `viewport`, scaled with the square root of its area.
pub fn target_count(viewport: Viewport, base: u32) -> usize {
    (f64::from(base) * (viewport.area() / REFERENCE_AREA).sqrt()).floor() as usize
}

/// New particle at a rejection-sampled home, or `None` if no opaque pixel was hit.
pub fn spawn_particle(mask: &TextMask, rng: &mut Rng64, attempts: u32) -> Option<DemoParticle> {
    let home = sample_home(mask, rng, attempts)?;
    Some(DemoParticle {
        pos: home,
        home,
        size: rng.range(0.5, 2.0),
        life: rng.range(50.0, 150.0),
        glitter_phase: rng.angle(),
        color: Rgba::WHITE,
    })
}

/// Where a particle at `pos` is pushed to when the pointer is near.
///
/// Returns `None` when the pointer is at or beyond `radius`. Otherwise the particle is placed at
/// `home`, offset away from the pointer by `push * (radius - d) / radius`.
pub fn repelled_position(
    home: Point,
    pos: Point,
    pointer: Point,
    radius: f64,
    push: f64,
) -> Option<Point> {
    let delta = pointer - pos;
    let d = delta.hypot();
    if d >= radius {
        return None;
    }
    let force = (radius - d) / radius;
    let angle = delta.atan2();
    Some(home - Vec2::from_angle(angle) * (force * push))
}

/// Flicker colour for a repelled particle: light blue or near white, depending on the phase.
pub fn glitter_color(phase: f64) -> Rgba {
    let g = (phase.sin() + 1.0) / 2.0;
    if (phase * 2.0).sin() > 0.0 {
        let i = (135.0 + g * 120.0).floor();
        Rgba::rgb((i * 0.6).floor() as u8, (i * 0.8).floor() as u8, i as u8)
    } else {
        let w = (200.0 + g * 55.0).floor() as u8;
        Rgba::rgb(w, w, w)
    }
}

/// Advance one particle: glitter, repulsion or easing home, and one frame of lifetime.
pub fn step_particle(p: &mut DemoParticle, pointer: Option<Point>, cfg: &DemoConfig) {
    p.glitter_phase += cfg.glitter_step;

    let repelled = pointer.and_then(|ptr| {
        repelled_position(p.home, p.pos, ptr, cfg.repel_radius, cfg.push_strength)
    });
    match repelled {
        Some(pos) => {
            p.pos = pos;
            p.color = glitter_color(p.glitter_phase);
        }
        None => {
            p.pos += (p.home - p.pos) * cfg.return_rate;
            p.color = Rgba::WHITE;
        }
    }

    p.life -= 1.0;
}

/// Step every particle, respawning expired ones at fresh homes and dropping those that cannot
/// be resampled.
pub fn step_particles(
    particles: &mut Vec<DemoParticle>,
    pointer: Option<Point>,
    mask: &TextMask,
    rng: &mut Rng64,
    cfg: &DemoConfig,
) {
    particles.retain_mut(|p| {
        step_particle(p, pointer, cfg);
        if p.life > 0.0 {
            return true;
        }
        match spawn_particle(mask, rng, cfg.sample_attempts) {
            Some(fresh) => {
                *p = fresh;
                true
            }
            None => false,
        }
    });
}

/// Refill up to `target`. Stops early when the mask has nothing to sample or sampling keeps
/// failing.
pub fn top_up(
    particles: &mut Vec<DemoParticle>,
    target: usize,
    mask: &TextMask,
    rng: &mut Rng64,
    cfg: &DemoConfig,
) {
    if !mask.has_opaque() {
        return;
    }
    let mut failures_left = target.saturating_sub(particles.len());
    while particles.len() < target {
        match spawn_particle(mask, rng, cfg.sample_attempts) {
            Some(p) => particles.push(p),
            None => {
                if failures_left == 0 {
                    tracing::trace!(missing = target - particles.len(), "top-up gave up");
                    break;
                }
                failures_left -= 1;
            }
        }
    }
}

/// Initial population: `target` sampling rounds, failures skipped.
pub fn populate(
    mask: &TextMask,
    target: usize,
    rng: &mut Rng64,
    cfg: &DemoConfig,
) -> Vec<DemoParticle> {
    (0..target)
        .filter_map(|_| spawn_particle(mask, rng, cfg.sample_attempts))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/demo/particles.rs"]
mod tests;
