use std::f64::consts::TAU;

/// Deterministic SplitMix64 generator.
///
/// Every random draw in the simulations goes through this type so a seed fully determines a run.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from `seed`.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform float in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }

    /// Uniform angle in `[0, 2π)`.
    pub fn angle(&mut self) -> f64 {
        self.next_f64_01() * TAU
    }

    /// Uniform integer in `[0, n)`; `n == 0` yields 0.
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        (self.next_f64_01() * f64::from(n)).floor().min(f64::from(n - 1)) as u32
    }

    /// Return `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64_01() < p
    }

    /// Pick one element of a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let n = u32::try_from(items.len()).ok()?;
        items.get(self.below(n) as usize)
    }
}

/// Frame-rate independent exponential smoothing factor.
///
/// `per_frame` is the fraction covered in one reference frame of `reference_ms`; the result is the
/// fraction covered after `dt_ms`.
pub fn smoothing_factor(per_frame: f64, dt_ms: f64, reference_ms: f64) -> f64 {
    if dt_ms <= 0.0 || reference_ms <= 0.0 {
        return 0.0;
    }
    let keep = (1.0 - per_frame.clamp(0.0, 1.0)).powf(dt_ms / reference_ms);
    1.0 - keep
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
