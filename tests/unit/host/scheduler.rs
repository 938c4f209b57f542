use super::*;

#[test]
fn requests_are_delivered_once_in_order() {
    let mut s = FrameScheduler::new();
    let a = s.request(ComponentId(1));
    let b = s.request(ComponentId(2));
    assert_eq!(s.pending_count(), 2);

    let due = s.take_due();
    assert_eq!(due, vec![(a, ComponentId(1)), (b, ComponentId(2))]);
    assert!(s.take_due().is_empty());
}

#[test]
fn cancelled_request_is_not_delivered() {
    let mut s = FrameScheduler::new();
    let a = s.request(ComponentId(1));
    assert!(s.is_pending(a));
    assert!(s.cancel(a));
    assert!(!s.cancel(a));
    assert!(!s.is_pending(a));
    assert!(s.take_due().is_empty());
}

#[test]
fn handles_are_unique() {
    let mut s = FrameScheduler::new();
    let a = s.request(ComponentId(1));
    s.take_due();
    let b = s.request(ComponentId(1));
    assert_ne!(a, b);
}
