use super::*;
use crate::foundation::core::Point;

const DT: f64 = 1000.0 / 60.0;

fn page(vp: Viewport) -> LandingPage {
    let mut page = LandingPage::new(NameConfig::default(), FontLibrary::empty(), 1);
    page.mount(&HostEnv::new(vp));
    let homes: Vec<Point> = (0..20)
        .map(|i| Point::new(10.0 + f64::from(i) * 4.0, 40.0))
        .collect();
    page.particle_name_mut().rebuild_with_homes(vp, &homes);
    page
}

#[test]
fn profile_appears_only_after_formation_and_slide() {
    let vp = Viewport::new(120, 80);
    let mut page = page(vp);

    let mut t = 0.0;
    let mut completed_at = None;
    let mut shown_at = None;
    for _ in 0..1200 {
        page.step(t, DT);
        if completed_at.is_none() && page.particle_name().is_complete() {
            completed_at = Some(t);
            assert!(!page.profile().is_shown());
        }
        if shown_at.is_none() && page.profile().is_shown() {
            shown_at = Some(t);
        }
        t += DT;
    }

    let completed_at = completed_at.unwrap();
    let shown_at = shown_at.unwrap();
    assert!(shown_at - completed_at >= 1000.0 - 1e-9);
    assert_eq!(page.phase(), RevealPhase::Revealed);
}

#[test]
fn resize_after_reveal_does_not_restart_transitions() {
    let vp = Viewport::new(120, 80);
    let mut page = page(vp);
    let mut t = 0.0;
    for _ in 0..1200 {
        page.step(t, DT);
        t += DT;
    }
    assert_eq!(page.phase(), RevealPhase::Revealed);

    page.handle_event(&InputEvent::Resize(Viewport::new(60, 40)));
    page.step(t, DT);
    assert_eq!(page.phase(), RevealPhase::Revealed);
    assert!(page.profile().is_shown());
    assert_eq!(page.surface().unwrap().viewport(), Viewport::new(60, 40));
}

#[test]
fn particles_are_drawn_into_the_surface() {
    let vp = Viewport::new(120, 80);
    let mut page = page(vp);
    page.step(0.0, DT);
    let drawn = page
        .surface()
        .unwrap()
        .data()
        .chunks_exact(4)
        .filter(|px| px[3] > 0)
        .count();
    assert!(drawn > 0);
}
