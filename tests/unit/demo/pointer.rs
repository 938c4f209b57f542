use super::*;

#[test]
fn mouse_device_is_always_active() {
    let mut s = PointerState::new(false);
    assert_eq!(s.active(), Some(Point::ZERO));
    s.apply(&InputEvent::PointerMove(Point::new(10.0, 20.0)));
    assert_eq!(s.active(), Some(Point::new(10.0, 20.0)));
    s.apply(&InputEvent::PointerLeave);
    assert_eq!(s.pos, Point::ZERO);
}

#[test]
fn touch_device_needs_contact() {
    let mut s = PointerState::new(true);
    s.apply(&InputEvent::PointerMove(Point::new(5.0, 5.0)));
    assert_eq!(s.active(), None);

    s.apply(&InputEvent::TouchStart(Point::new(5.0, 5.0)));
    let r = s.apply(&InputEvent::TouchMove(vec![Point::new(7.0, 8.0)]));
    assert!(r.prevent_default);
    assert_eq!(s.active(), Some(Point::new(7.0, 8.0)));

    // Leaving does not reset the pointer on touch devices.
    s.apply(&InputEvent::PointerLeave);
    assert_eq!(s.pos, Point::new(7.0, 8.0));

    s.apply(&InputEvent::TouchEnd);
    assert!(!s.touching);
    assert_eq!(s.pos, Point::ZERO);
    assert_eq!(s.active(), None);
}

#[test]
fn empty_touch_move_is_ignored() {
    let mut s = PointerState::new(true);
    let r = s.apply(&InputEvent::TouchMove(Vec::new()));
    assert!(!r.prevent_default);
    assert_eq!(s.pos, Point::ZERO);
}
