use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context as _;

use crate::animation::ease::Ease;
use crate::foundation::core::Fps;
use crate::foundation::error::{StardriftError, StardriftResult};

/// Tunables for all three scenes.
///
/// Every section is optional in JSON; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Seed for every random draw in a run.
    pub seed: u64,
    /// Frame rate of the frame loop clock.
    pub fps: Fps,
    pub starfield: StarfieldConfig,
    pub name: NameConfig,
    pub demo: DemoConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED_0F_57A2,
            fps: Fps::default(),
            starfield: StarfieldConfig::default(),
            name: NameConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> StardriftResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate JSON from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> StardriftResult<Self> {
        let cfg: Self = serde_json::from_reader(reader)
            .map_err(|e| StardriftError::serde(format!("parse scene config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> StardriftResult<()> {
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(StardriftError::validation("fps must have num>0 and den>0"));
        }
        self.starfield.validate()?;
        self.name.validate()?;
        self.demo.validate()
    }
}

/// Starfield and nebula background.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarfieldConfig {
    /// Viewport pixels per star (`count = floor(area / px_per_star)`).
    pub px_per_star: f64,
    pub nebula_count: u32,
    /// Simulation time added per frame, independent of the wall clock.
    pub time_step_ms: f64,
    /// Galaxy glow radius as a fraction of the longer viewport side.
    pub galaxy_radius_factor: f64,
    /// Rotation of the galaxy glow in radians.
    pub galaxy_rotation: f64,
    pub nebula_palette: Vec<[u8; 3]>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            px_per_star: 1000.0,
            nebula_count: 8,
            time_step_ms: 16.0,
            galaxy_radius_factor: 0.8,
            galaxy_rotation: std::f64::consts::FRAC_PI_6,
            nebula_palette: vec![
                [102, 126, 234],
                [147, 51, 234],
                [234, 51, 153],
                [51, 153, 234],
                [147, 112, 219],
            ],
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> StardriftResult<()> {
        if !(self.px_per_star > 0.0) {
            return Err(StardriftError::validation("starfield.px_per_star must be > 0"));
        }
        if !(self.time_step_ms > 0.0) {
            return Err(StardriftError::validation("starfield.time_step_ms must be > 0"));
        }
        if !(self.galaxy_radius_factor > 0.0) {
            return Err(StardriftError::validation(
                "starfield.galaxy_radius_factor must be > 0",
            ));
        }
        if self.nebula_count > 0 && self.nebula_palette.is_empty() {
            return Err(StardriftError::validation(
                "starfield.nebula_palette must not be empty when nebulae are enabled",
            ));
        }
        Ok(())
    }
}

/// Particle name formation and the profile reveal that follows it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameConfig {
    pub text: String,
    pub family: String,
    pub weight: u16,
    /// Font size on viewports at least `breakpoint_px` wide.
    pub font_px: f64,
    /// Font size below the breakpoint.
    pub mobile_font_px: f64,
    pub breakpoint_px: u32,
    /// Mask sampling grid stride in pixels.
    pub grid_stride: u32,
    pub max_particles: usize,
    pub particle_size: f64,
    /// Fraction of the remaining distance covered per reference frame.
    pub smoothing: f64,
    /// Distance from home under which a particle counts as settled.
    pub settle_epsilon_px: f64,
    /// Formation is declared complete after this long even if not settled.
    pub formation_limit_ms: f64,
    /// Particle layer slide, as a fraction of viewport height (negative is up).
    pub slide_fraction: f64,
    pub slide_ms: f64,
    pub slide_ease: Ease,
    /// Profile top position before and after the fade, as fractions of viewport height.
    pub profile_top_from: f64,
    pub profile_top_to: f64,
    pub fade_ms: f64,
    pub fade_ease: Ease,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            text: "Stardrift".to_owned(),
            family: "Arial, sans-serif".to_owned(),
            weight: 700,
            font_px: 140.0,
            mobile_font_px: 64.0,
            breakpoint_px: 768,
            grid_stride: 4,
            max_particles: 6000,
            particle_size: 2.0,
            smoothing: 0.06,
            settle_epsilon_px: 0.5,
            formation_limit_ms: 4000.0,
            slide_fraction: -0.2,
            slide_ms: 1000.0,
            slide_ease: Ease::EaseInOut,
            profile_top_from: 0.5,
            profile_top_to: 0.48,
            fade_ms: 1200.0,
            fade_ease: Ease::EaseOut,
        }
    }
}

impl NameConfig {
    pub fn validate(&self) -> StardriftResult<()> {
        if self.text.trim().is_empty() {
            return Err(StardriftError::validation("name.text must be non-empty"));
        }
        if !(self.font_px > 0.0) || !(self.mobile_font_px > 0.0) {
            return Err(StardriftError::validation("name font sizes must be > 0"));
        }
        if self.grid_stride == 0 {
            return Err(StardriftError::validation("name.grid_stride must be > 0"));
        }
        if self.max_particles == 0 {
            return Err(StardriftError::validation("name.max_particles must be > 0"));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(StardriftError::validation("name.smoothing must be in (0, 1]"));
        }
        if !(self.settle_epsilon_px > 0.0) {
            return Err(StardriftError::validation(
                "name.settle_epsilon_px must be > 0",
            ));
        }
        if !(self.formation_limit_ms > 0.0) || !(self.slide_ms > 0.0) || !(self.fade_ms > 0.0) {
            return Err(StardriftError::validation("name durations must be > 0"));
        }
        Ok(())
    }
}

/// Pointer-reactive particle text demo.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub text: String,
    pub family: String,
    pub weight: u16,
    pub font_px: f64,
    pub mobile_font_px: f64,
    /// Viewports narrower than this use `mobile_font_px`.
    pub breakpoint_px: u32,
    /// Particle count at the reference 1920x1080 viewport.
    pub base_particles: u32,
    pub sample_attempts: u32,
    pub repel_radius: f64,
    pub push_strength: f64,
    /// Fraction of the distance home covered per frame when not repelled.
    pub return_rate: f64,
    pub glitter_step: f64,
    pub asteroid_chance: f64,
    /// Opacity of the black overlay drawn over the background image.
    pub background_dim: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            text: "GPT-5".to_owned(),
            family: "Arial, sans-serif".to_owned(),
            weight: 700,
            font_px: 160.0,
            mobile_font_px: 80.0,
            breakpoint_px: 768,
            base_particles: 8000,
            sample_attempts: 100,
            repel_radius: 240.0,
            push_strength: 60.0,
            return_rate: 0.1,
            glitter_step: 0.1,
            asteroid_chance: 0.02,
            background_dim: 0.3,
        }
    }
}

impl DemoConfig {
    pub fn validate(&self) -> StardriftResult<()> {
        if self.text.trim().is_empty() {
            return Err(StardriftError::validation("demo.text must be non-empty"));
        }
        if !(self.font_px > 0.0) || !(self.mobile_font_px > 0.0) {
            return Err(StardriftError::validation("demo font sizes must be > 0"));
        }
        if self.sample_attempts == 0 {
            return Err(StardriftError::validation("demo.sample_attempts must be > 0"));
        }
        if !(self.repel_radius > 0.0) {
            return Err(StardriftError::validation("demo.repel_radius must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.return_rate) {
            return Err(StardriftError::validation("demo.return_rate must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.asteroid_chance) {
            return Err(StardriftError::validation(
                "demo.asteroid_chance must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
