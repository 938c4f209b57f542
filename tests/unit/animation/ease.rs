use super::*;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::OutQuad,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn deserializes_snake_case_names() {
    let e: Ease = serde_json::from_str("\"ease_in_out\"").unwrap();
    assert_eq!(e, Ease::EaseInOut);
}
