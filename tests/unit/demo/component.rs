use std::sync::Arc;

use super::*;
use crate::assets::decode::PreparedImage;

fn block_mask(vp: Viewport) -> TextMask {
    // Opaque centre block covering a quarter of the viewport.
    let (w, h) = (vp.width, vp.height);
    let mut alpha = vec![0u8; (w * h) as usize];
    for y in h / 4..h * 3 / 4 {
        for x in w / 4..w * 3 / 4 {
            alpha[(y * w + x) as usize] = 255;
        }
    }
    TextMask::from_alpha(w, h, alpha).unwrap()
}

fn demo(vp: Viewport, touch_device: bool) -> ParticleTextDemo {
    let mut d = ParticleTextDemo::new(DemoConfig::default(), FontLibrary::empty(), 12);
    d.mount(&HostEnv::new(vp).with_touch(touch_device));
    d.rebuild_with_mask(vp, block_mask(vp));
    d
}

#[test]
fn population_matches_target() {
    let d = demo(Viewport::new(960, 540), false);
    let st = d.state().unwrap();
    assert_eq!(st.target, 4000);
    assert_eq!(st.particles.len(), 4000);
    assert!(!st.mobile);
}

#[test]
fn breakpoint_switches_font_size() {
    let d = ParticleTextDemo::new(DemoConfig::default(), FontLibrary::empty(), 0);
    assert_eq!(d.style_for(Viewport::new(767, 900)).font_px, 80.0);
    assert_eq!(d.style_for(Viewport::new(768, 900)).font_px, 160.0);
    assert!(d.is_mobile(Viewport::new(400, 800)));
}

#[test]
fn pointer_near_particle_displaces_it() {
    let mut d = demo(Viewport::new(320, 200), false);
    let home = d.state().unwrap().particles[0].home;
    d.handle_event(&InputEvent::PointerMove(Point::new(home.x + 100.0, home.y)));
    d.step();

    let p = d.state().unwrap().particles[0];
    assert!((p.pos.distance(home) - 35.0).abs() < 1e-6);
    assert!(p.pos.x < home.x);
}

#[test]
fn touch_end_makes_repulsion_inert() {
    let mut d = demo(Viewport::new(320, 200), true);
    let home = d.state().unwrap().particles[0].home;
    let near = Point::new(home.x + 50.0, home.y);

    // Without contact a touch device does not repel.
    d.handle_event(&InputEvent::PointerMove(near));
    d.step();
    assert_eq!(d.state().unwrap().particles[0].pos, home);

    d.handle_event(&InputEvent::TouchStart(near));
    let r = d.handle_event(&InputEvent::TouchMove(vec![near]));
    assert!(r.prevent_default);
    d.step();
    let pushed = d.state().unwrap().particles[0].pos.distance(home);
    assert!(pushed > 1.0);

    d.handle_event(&InputEvent::TouchEnd);
    assert_eq!(d.pointer().active(), None);
    let mut last = pushed;
    for _ in 0..5 {
        d.step();
        let p = d.state().unwrap().particles[0];
        let dist = p.pos.distance(p.home);
        assert!(dist < last || dist == 0.0);
        assert_eq!(p.color, Rgba::WHITE);
        last = dist;
    }
}

#[test]
fn resize_regenerates_population() {
    let mut d = demo(Viewport::new(320, 200), false);
    for _ in 0..200 {
        d.step();
    }
    let vp = Viewport::new(160, 100);
    d.handle_event(&InputEvent::Resize(vp));
    let st = d.state().unwrap();
    assert_eq!(st.viewport, vp);
    assert!(st.asteroids.is_empty());
    assert_eq!(st.target, target_count(vp, 8000));
    assert_eq!(d.surface().unwrap().viewport(), vp);

    let mask = block_mask(vp);
    d.rebuild_with_mask(vp, mask.clone());
    let st = d.state().unwrap();
    assert!(st.target > 0);
    assert_eq!(st.particles.len(), st.target);
    for p in &st.particles {
        assert!(p.home.x >= 0.0 && p.home.x < f64::from(vp.width));
        assert!(p.home.y >= 0.0 && p.home.y < f64::from(vp.height));
        assert!(mask.is_opaque(p.home.x as u32, p.home.y as u32));
        assert_eq!(p.pos, p.home);
    }
}

#[test]
fn flat_black_without_background_image() {
    let mut d = demo(Viewport::new(64, 64), false);
    d.step();
    let data = d.surface().unwrap().data();
    assert_eq!(&data[..4], &[0, 0, 0, 255]);
}

#[test]
fn background_image_is_dimmed() {
    let img = PreparedImage {
        width: 2,
        height: 2,
        rgba8_premul: Arc::new([200u8, 0, 0, 255].repeat(4)),
    };
    let mut d = ParticleTextDemo::new(DemoConfig::default(), FontLibrary::empty(), 1)
        .with_background(BackgroundImage::ready(&img).unwrap());
    let vp = Viewport::new(64, 64);
    d.mount(&HostEnv::new(vp));
    d.rebuild_with_mask(vp, TextMask::empty(64, 64));
    d.step();

    let data = d.surface().unwrap().data();
    let red = data[0];
    assert!((130..=150).contains(&red), "red channel {red}");
    assert_eq!(data[3], 255);
}
