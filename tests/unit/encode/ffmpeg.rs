use super::*;
use crate::foundation::core::Fps;

#[test]
fn odd_or_empty_sizes_are_rejected() {
    let fps = Fps::default();
    for (width, height) in [(0, 10), (11, 10), (10, 7)] {
        assert!(validate_size(&SinkConfig { width, height, fps }).is_err());
    }
    assert!(validate_size(&SinkConfig {
        width: 10,
        height: 10,
        fps
    })
    .is_ok());
}

#[test]
fn flatten_premul_over_black_produces_expected_rgb() {
    let src = vec![128u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128, 0, 0, 255]);
}

#[test]
fn flatten_straight_over_white() {
    let src = vec![0u8, 0, 0, 128];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [255, 255, 255, 255]).unwrap();
    assert_eq!(dst, vec![127, 127, 127, 255]);
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(std::env::temp_dir().join("never.mp4"), [0, 0, 0, 255]);
    assert!(
        sink.push_frame(FrameIndex(0), &FrameRGBA::transparent(2, 2))
            .is_err()
    );
    assert!(sink.end().is_ok());
}
