use std::path::PathBuf;

use crate::assets::background::BackgroundImage;
use crate::assets::fonts::FontLibrary;
use crate::config::SceneConfig;
use crate::demo::ParticleTextDemo;
use crate::host::component::HostEnv;
use crate::host::frame_loop::FrameLoop;
use crate::reveal::LandingPage;
use crate::starfield::StarfieldBackground;

/// Which page to mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    /// Starfield background with the particle name and profile reveal on top.
    Landing,
    /// The pointer-reactive particle text demo.
    Demo,
    /// The starfield background on its own.
    Starfield,
}

/// Host-side inputs that are not part of [`SceneConfig`].
#[derive(Clone)]
pub struct SceneOptions {
    pub env: HostEnv,
    pub fonts: FontLibrary,
    /// Demo background image, loaded in the background.
    pub background: Option<PathBuf>,
}

/// Mount `scene` into a fresh frame loop.
///
/// Each component gets its own seed derived from `cfg.seed`, so adding a component to a page
/// does not change the others.
#[tracing::instrument(skip(cfg, opts))]
pub fn build_scene(scene: Scene, cfg: &SceneConfig, opts: SceneOptions) -> FrameLoop {
    let mut host = FrameLoop::new(opts.env, cfg.fps);
    let seed = |salt: u64| cfg.seed ^ salt.wrapping_mul(0x9E37_79B9_7F4A_7C15);

    match scene {
        Scene::Landing => {
            host.mount(Box::new(StarfieldBackground::new(
                cfg.starfield.clone(),
                seed(1),
            )));
            host.mount(Box::new(LandingPage::new(
                cfg.name.clone(),
                opts.fonts,
                seed(2),
            )));
        }
        Scene::Demo => {
            let background = match opts.background {
                Some(path) => BackgroundImage::spawn_load(path),
                None => BackgroundImage::none(),
            };
            host.mount(Box::new(
                ParticleTextDemo::new(cfg.demo.clone(), opts.fonts, seed(3))
                    .with_background(background),
            ));
        }
        Scene::Starfield => {
            host.mount(Box::new(StarfieldBackground::new(
                cfg.starfield.clone(),
                seed(1),
            )));
        }
    }
    host
}
