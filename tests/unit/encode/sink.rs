use super::*;
use crate::foundation::core::Viewport;
use crate::host::component::HostEnv;
use crate::starfield::StarfieldBackground;

#[test]
fn render_frames_streams_in_order() {
    let mut host = FrameLoop::new(HostEnv::new(Viewport::new(16, 8)), Fps::default());
    host.mount(Box::new(StarfieldBackground::new(Default::default(), 1)));

    let mut sink = InMemorySink::new();
    render_frames(&mut host, 3, &mut sink).unwrap();

    assert_eq!(
        sink.config(),
        Some(SinkConfig {
            width: 16,
            height: 8,
            fps: Fps::default()
        })
    );
    let idx: Vec<u64> = sink.frames.iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
    assert!(sink.frames.iter().all(|(_, f)| f.data.len() == 16 * 8 * 4));
}

#[test]
fn render_frames_rejects_empty_viewport() {
    let mut host = FrameLoop::new(HostEnv::new(Viewport::new(0, 8)), Fps::default());
    let mut sink = InMemorySink::new();
    let err = render_frames(&mut host, 1, &mut sink).unwrap_err();
    assert!(err.to_string().starts_with("validation error:"));
}
