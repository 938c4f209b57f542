use crate::animation::ease::{Ease, lerp};

/// Time-based scalar tween that stays parked at `from` until started.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    ease: Ease,
    started_at_ms: Option<f64>,
}

impl Tween {
    /// Create an unstarted tween.
    pub fn new(from: f64, to: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            ease,
            started_at_ms: None,
        }
    }

    /// Start the tween at `now_ms`. Only the first call has an effect.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if self.started_at_ms.is_some() {
            return false;
        }
        self.started_at_ms = Some(now_ms);
        true
    }

    /// Return `true` once [`Tween::start`] has been called.
    pub fn is_started(&self) -> bool {
        self.started_at_ms.is_some()
    }

    /// Normalized (un-eased) progress at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        let Some(start) = self.started_at_ms else {
            return 0.0;
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased value at `now_ms`.
    pub fn value(&self, now_ms: f64) -> f64 {
        lerp(self.from, self.to, self.ease.apply(self.progress(now_ms)))
    }

    /// Return `true` when the tween was started and has run its full duration.
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.is_started() && self.progress(now_ms) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
