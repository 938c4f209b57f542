use std::sync::mpsc::{self, Receiver};

use crate::assets::fonts::FontLibrary;
use crate::config::NameConfig;
use crate::foundation::core::Viewport;
use crate::host::component::{Component, FrameClock, FramePlan, HostEnv};
use crate::host::events::{EventKind, EventResponse, InputEvent};
use crate::render::surface::Surface;
use crate::reveal::orchestrator::{RevealOrchestrator, RevealPhase};
use crate::reveal::particle_name::ParticleName;
use crate::reveal::profile::{ProfileCard, ProfileLayout, ProfileSection};

/// The page foreground: the forming name and, once it has formed, the profile section.
///
/// The name reports completion through its callback; the page picks the signal up on the next
/// frame and hands it to the [`RevealOrchestrator`].
pub struct LandingPage<P: ProfileSection = ProfileCard> {
    name: ParticleName,
    orchestrator: RevealOrchestrator,
    profile: P,
    completions: Receiver<()>,
    viewport: Viewport,
    now_ms: f64,
    surface: Option<Surface>,
}

impl LandingPage<ProfileCard> {
    /// Landing page with the default profile card.
    pub fn new(cfg: NameConfig, fonts: FontLibrary, seed: u64) -> Self {
        Self::with_profile(cfg, fonts, seed, ProfileCard::default())
    }
}

impl<P: ProfileSection> LandingPage<P> {
    pub fn with_profile(cfg: NameConfig, fonts: FontLibrary, seed: u64, profile: P) -> Self {
        let orchestrator = RevealOrchestrator::new(&cfg);
        let mut name = ParticleName::new(cfg, fonts, seed);
        let (tx, completions) = mpsc::channel();
        name.set_on_complete(Box::new(move || {
            let _ = tx.send(());
        }));
        Self {
            name,
            orchestrator,
            profile,
            completions,
            viewport: Viewport::new(0, 0),
            now_ms: 0.0,
            surface: None,
        }
    }

    pub fn particle_name(&self) -> &ParticleName {
        &self.name
    }

    /// Mutable access to the name, e.g. to seed it with precomputed homes.
    pub fn particle_name_mut(&mut self) -> &mut ParticleName {
        &mut self.name
    }

    pub fn orchestrator(&self) -> &RevealOrchestrator {
        &self.orchestrator
    }

    pub fn profile(&self) -> &P {
        &self.profile
    }

    pub fn phase(&self) -> RevealPhase {
        self.orchestrator.phase(self.now_ms)
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.name.rebuild(viewport);
        self.surface = Surface::new(viewport);
    }

    /// Advance to `now_ms` and redraw.
    pub fn step(&mut self, now_ms: f64, dt_ms: f64) {
        self.now_ms = now_ms;
        self.name.update(dt_ms);
        for () in self.completions.try_iter() {
            self.orchestrator.on_formation_complete(now_ms);
        }
        self.orchestrator.update(now_ms);
        self.profile.set_show(self.orchestrator.show_profile());

        let Some(surface) = self.surface.as_mut() else {
            tracing::trace!("landing page has no surface, frame skipped");
            return;
        };
        let vp = self.viewport;
        let offset_y = self.orchestrator.particle_offset_y(now_ms, vp);
        let layout = ProfileLayout {
            viewport: vp,
            top: self.orchestrator.profile_top(now_ms, vp),
            opacity: self.orchestrator.profile_opacity(now_ms),
        };
        let name = &self.name;
        let profile = &self.profile;
        surface.render(|p| {
            name.draw(p, offset_y);
            profile.draw(p, layout);
        });
    }
}

impl<P: ProfileSection + 'static> Component for LandingPage<P> {
    fn name(&self) -> &'static str {
        "landing"
    }

    fn listens_to(&self) -> &'static [EventKind] {
        &[EventKind::Resize]
    }

    fn mount(&mut self, env: &HostEnv) {
        self.resize(env.viewport);
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        if let InputEvent::Resize(vp) = event {
            self.resize(*vp);
        }
        EventResponse::default()
    }

    fn frame(&mut self, clock: &FrameClock) -> FramePlan {
        self.step(clock.now_ms, clock.dt_ms);
        FramePlan::Continue
    }

    fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/landing.rs"]
mod tests;
