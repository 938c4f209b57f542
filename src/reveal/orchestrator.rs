use crate::animation::latch::OneShot;
use crate::animation::tween::Tween;
use crate::config::NameConfig;
use crate::foundation::core::Viewport;

/// Where the page is in the name-to-profile hand-off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Waiting for the formation-complete signal.
    Forming,
    /// Particle layer sliding up.
    Sliding,
    /// Profile fading in.
    Revealing,
    /// Both transitions finished.
    Revealed,
}

/// Turns the one formation-complete signal into the slide-out and fade-in transitions.
///
/// The slide starts on the first signal; the fade starts when the slide finishes. Repeated
/// signals are ignored.
#[derive(Clone, Debug)]
pub struct RevealOrchestrator {
    latch: OneShot,
    slide: Tween,
    fade: Tween,
    profile_top: Tween,
    show_profile: bool,
}

impl RevealOrchestrator {
    pub fn new(cfg: &NameConfig) -> Self {
        Self {
            latch: OneShot::new(),
            slide: Tween::new(0.0, cfg.slide_fraction, cfg.slide_ms, cfg.slide_ease),
            fade: Tween::new(0.0, 1.0, cfg.fade_ms, cfg.fade_ease),
            profile_top: Tween::new(
                cfg.profile_top_from,
                cfg.profile_top_to,
                cfg.fade_ms,
                cfg.fade_ease,
            ),
            show_profile: false,
        }
    }

    /// Handle a formation-complete signal. Returns `true` if it started the slide.
    pub fn on_formation_complete(&mut self, now_ms: f64) -> bool {
        if !self.latch.trigger() {
            return false;
        }
        tracing::debug!(now_ms, "reveal: slide started");
        self.slide.start(now_ms)
    }

    /// Start the fade once the slide has finished.
    pub fn update(&mut self, now_ms: f64) {
        if !self.show_profile && self.slide.is_finished(now_ms) {
            self.show_profile = true;
            self.fade.start(now_ms);
            self.profile_top.start(now_ms);
            tracing::debug!(now_ms, "reveal: profile shown");
        }
    }

    pub fn phase(&self, now_ms: f64) -> RevealPhase {
        if !self.slide.is_started() {
            RevealPhase::Forming
        } else if !self.show_profile {
            RevealPhase::Sliding
        } else if !self.fade.is_finished(now_ms) {
            RevealPhase::Revealing
        } else {
            RevealPhase::Revealed
        }
    }

    /// The `show` flag handed to the profile section.
    pub fn show_profile(&self) -> bool {
        self.show_profile
    }

    /// Vertical offset of the particle layer in pixels.
    pub fn particle_offset_y(&self, now_ms: f64, viewport: Viewport) -> f64 {
        self.slide.value(now_ms) * f64::from(viewport.height)
    }

    pub fn profile_opacity(&self, now_ms: f64) -> f64 {
        self.fade.value(now_ms)
    }

    /// Top edge of the profile section in pixels.
    pub fn profile_top(&self, now_ms: f64, viewport: Viewport) -> f64 {
        self.profile_top.value(now_ms) * f64::from(viewport.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/orchestrator.rs"]
mod tests;
