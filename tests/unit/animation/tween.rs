use super::*;

#[test]
fn unstarted_tween_parks_at_from() {
    let t = Tween::new(0.0, -200.0, 1000.0, Ease::EaseInOut);
    assert_eq!(t.value(5_000.0), 0.0);
    assert!(!t.is_finished(5_000.0));
}

#[test]
fn runs_from_start_time_and_finishes() {
    let mut t = Tween::new(0.0, 1.0, 1200.0, Ease::EaseOut);
    assert!(t.start(100.0));
    assert!(!t.start(900.0), "restarting must be ignored");
    assert_eq!(t.value(100.0), 0.0);
    assert!(t.value(700.0) > 0.5);
    assert!(!t.is_finished(1299.0));
    assert!(t.is_finished(1300.0));
    assert_eq!(t.value(10_000.0), 1.0);
}

#[test]
fn zero_duration_completes_immediately() {
    let mut t = Tween::new(2.0, 4.0, 0.0, Ease::Linear);
    t.start(0.0);
    assert_eq!(t.value(0.0), 4.0);
    assert!(t.is_finished(0.0));
}
