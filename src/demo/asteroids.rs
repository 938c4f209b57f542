use std::f64::consts::TAU;

use crate::foundation::core::{Affine, Point, Vec2, Viewport};
use crate::foundation::math::Rng64;

/// Vertices of an asteroid outline.
pub const OUTLINE_POINTS: usize = 6;

/// Grey rock drifting down through the demo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    pub pos: Point,
    pub vel: Vec2,
    pub size: f64,
    pub rotation: f64,
    pub rotation_speed: f64,
    pub opacity: f64,
    /// Per-vertex radius factors in `[0.8, 1.2)`, fixed for the asteroid's life.
    pub jag: [f64; OUTLINE_POINTS],
}

impl Asteroid {
    /// New asteroid just above the top edge.
    pub fn spawn(rng: &mut Rng64, viewport: Viewport) -> Self {
        let x = rng.range(0.0, f64::from(viewport.width));
        let vx = rng.range(-1.0, 1.0);
        let vy = rng.range(1.0, 3.0);
        let size = rng.range(2.0, 6.0);
        let rotation_speed = rng.range(-0.05, 0.05);
        let opacity = rng.range(0.2, 0.5);
        let jag = std::array::from_fn(|_| rng.range(0.8, 1.2));
        Self {
            pos: Point::new(x, -20.0),
            vel: Vec2::new(vx, vy),
            size,
            rotation: 0.0,
            rotation_speed,
            opacity,
            jag,
        }
    }

    pub fn step(&mut self) {
        self.pos += self.vel;
        self.rotation += self.rotation_speed;
    }

    /// Return `true` once the asteroid has fallen past the bottom margin.
    pub fn is_gone(&self, viewport: Viewport) -> bool {
        self.pos.y > f64::from(viewport.height) + 50.0
    }

    /// Outline in viewport coordinates.
    pub fn outline(&self) -> [Point; OUTLINE_POINTS] {
        let placement = Affine::translate(self.pos.to_vec2()) * Affine::rotate(self.rotation);
        std::array::from_fn(|i| {
            let angle = i as f64 / OUTLINE_POINTS as f64 * TAU;
            let r = self.size * self.jag[i];
            placement * Point::new(angle.cos() * r, angle.sin() * r)
        })
    }
}

/// Maybe spawn one asteroid, move all of them and drop the ones that left the viewport.
pub fn step_asteroids(
    asteroids: &mut Vec<Asteroid>,
    viewport: Viewport,
    chance: f64,
    rng: &mut Rng64,
) {
    if rng.chance(chance) {
        asteroids.push(Asteroid::spawn(rng, viewport));
    }
    for a in asteroids.iter_mut() {
        a.step();
    }
    asteroids.retain(|a| !a.is_gone(viewport));
}

#[cfg(test)]
#[path = "../../tests/unit/demo/asteroids.rs"]
mod tests;
