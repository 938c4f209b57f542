use crate::config::StarfieldConfig;
use crate::foundation::core::{Point, Viewport};
use crate::foundation::math::Rng64;

/// One background star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: Point,
    /// Depth in `[0, 1]`; nearer stars are larger and brighter.
    pub z: f64,
    pub size: f64,
    pub brightness: f64,
    pub twinkle_speed: f64,
    pub twinkle_offset: f64,
}

/// How a star is drawn at a given time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarLook {
    pub brightness: f64,
    pub alpha: f64,
    pub size: f64,
    /// Draw as a disc instead of a square.
    pub disc: bool,
    /// Draw a soft halo around the disc.
    pub glow: bool,
}

impl Star {
    pub fn spawn(rng: &mut Rng64, viewport: Viewport) -> Self {
        Self {
            pos: Point::new(
                rng.range(0.0, f64::from(viewport.width)),
                rng.range(0.0, f64::from(viewport.height)),
            ),
            z: rng.next_f64_01(),
            size: rng.range(0.0, 2.0),
            brightness: rng.next_f64_01(),
            twinkle_speed: 0.0005 + rng.range(0.0, 0.003),
            twinkle_offset: rng.angle(),
        }
    }

    pub fn look(&self, time_ms: f64) -> StarLook {
        let twinkle = ((time_ms * self.twinkle_speed + self.twinkle_offset).sin() + 1.0) / 2.0;
        let brightness = self.brightness * 0.3 + twinkle * 0.7;
        let alpha = brightness * (0.3 + self.z * 0.7);
        let size = self.size * (0.5 + self.z * 1.5);
        let disc = size > 1.5;
        StarLook {
            brightness,
            alpha,
            size,
            disc,
            glow: disc && brightness > 0.8 && self.z > 0.7,
        }
    }
}

/// A large, faint colour blob drifting across the sky.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nebula {
    pub pos: Point,
    pub radius: f64,
    pub color: [u8; 3],
    pub opacity: f64,
    pub speed: f64,
    pub angle: f64,
}

impl Nebula {
    pub fn spawn(rng: &mut Rng64, viewport: Viewport, palette: &[[u8; 3]]) -> Self {
        Self {
            pos: Point::new(
                rng.range(0.0, f64::from(viewport.width)),
                rng.range(0.0, f64::from(viewport.height)),
            ),
            radius: 200.0 + rng.range(0.0, 400.0),
            color: rng.pick(palette).copied().unwrap_or([147, 112, 219]),
            opacity: 0.03 + rng.range(0.0, 0.05),
            speed: 0.00005 + rng.range(0.0, 0.00015),
            angle: rng.angle(),
        }
    }

    /// Move one frame along the drift angle, wrapping to the opposite edge once the blob is
    /// entirely off screen.
    pub fn drift(&mut self, viewport: Viewport) {
        let w = f64::from(viewport.width);
        let h = f64::from(viewport.height);
        let r = self.radius;

        self.pos.x += self.angle.cos() * self.speed * 10.0;
        self.pos.y += self.angle.sin() * self.speed * 10.0;

        if self.pos.x < -r {
            self.pos.x = w + r;
        }
        if self.pos.x > w + r {
            self.pos.x = -r;
        }
        if self.pos.y < -r {
            self.pos.y = h + r;
        }
        if self.pos.y > h + r {
            self.pos.y = -r;
        }
    }

    /// Centre opacity including the slow pulse.
    pub fn opacity_at(&self, time_ms: f64) -> f64 {
        self.opacity + (time_ms * self.speed * 10.0 + self.angle).sin() * 0.02
    }
}

/// Alpha of the galaxy glow centre at `time_ms`.
pub fn galaxy_pulse(time_ms: f64) -> f64 {
    (time_ms * 0.0003).sin() * 0.02 + 0.1
}

/// Number of stars for `viewport`.
pub fn star_count(viewport: Viewport, px_per_star: f64) -> usize {
    if px_per_star <= 0.0 {
        return 0;
    }
    (viewport.area() / px_per_star).floor() as usize
}

/// Whole simulation state of the background.
#[derive(Clone, Debug)]
pub struct StarfieldState {
    pub viewport: Viewport,
    pub time_ms: f64,
    pub stars: Vec<Star>,
    pub nebulae: Vec<Nebula>,
}

impl StarfieldState {
    /// Fresh stars and nebulae for `viewport`. Time restarts at zero.
    pub fn generate(viewport: Viewport, cfg: &StarfieldConfig, rng: &mut Rng64) -> Self {
        let stars = (0..star_count(viewport, cfg.px_per_star))
            .map(|_| Star::spawn(rng, viewport))
            .collect();
        let nebulae = (0..cfg.nebula_count)
            .map(|_| Nebula::spawn(rng, viewport, &cfg.nebula_palette))
            .collect();
        Self {
            viewport,
            time_ms: 0.0,
            stars,
            nebulae,
        }
    }

    /// Advance one frame: fixed time step plus nebula drift.
    pub fn step(&mut self, cfg: &StarfieldConfig) {
        self.time_ms += cfg.time_step_ms;
        for n in &mut self.nebulae {
            n.drift(self.viewport);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/starfield/model.rs"]
mod tests;
