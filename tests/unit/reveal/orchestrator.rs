use super::*;

fn orch() -> RevealOrchestrator {
    RevealOrchestrator::new(&NameConfig::default())
}

#[test]
fn nothing_moves_before_the_signal() {
    let mut o = orch();
    let vp = Viewport::new(800, 1000);
    for t in [0.0, 500.0, 5000.0] {
        o.update(t);
        assert_eq!(o.phase(t), RevealPhase::Forming);
        assert_eq!(o.particle_offset_y(t, vp), 0.0);
        assert_eq!(o.profile_opacity(t), 0.0);
        assert_eq!(o.profile_top(t, vp), 500.0);
        assert!(!o.show_profile());
    }
}

#[test]
fn slide_then_fade() {
    let mut o = orch();
    let vp = Viewport::new(800, 1000);

    assert!(o.on_formation_complete(1000.0));
    o.update(1000.0);
    assert_eq!(o.phase(1000.0), RevealPhase::Sliding);

    o.update(1500.0);
    let mid = o.particle_offset_y(1500.0, vp);
    assert!((mid + 100.0).abs() < 1e-9, "ease-in-out midpoint is half way: {mid}");
    assert!(!o.show_profile());

    o.update(2000.0);
    assert!(o.show_profile());
    assert!((o.particle_offset_y(2000.0, vp) + 200.0).abs() < 1e-9);
    assert_eq!(o.phase(2000.0), RevealPhase::Revealing);
    assert_eq!(o.profile_opacity(2000.0), 0.0);

    o.update(3200.0);
    assert_eq!(o.phase(3200.0), RevealPhase::Revealed);
    assert!((o.profile_opacity(3200.0) - 1.0).abs() < 1e-12);
    assert!((o.profile_top(3200.0, vp) - 480.0).abs() < 1e-9);
}

#[test]
fn repeated_signals_collapse_to_one_transition() {
    let mut o = orch();
    assert!(o.on_formation_complete(0.0));
    o.update(600.0);
    assert!(!o.on_formation_complete(600.0));
    assert!(!o.on_formation_complete(900.0));

    // The slide keeps its original start time.
    o.update(1000.0);
    assert!(o.show_profile());
}
