use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{StardriftError, StardriftResult};
use crate::host::frame_loop::FrameLoop;
use crate::render::frame::FrameRGBA;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order between
/// one `begin` and one `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> StardriftResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StardriftResult<()>;
    fn end(&mut self) -> StardriftResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    /// Frames in order.
    pub frames: Vec<(FrameIndex, FrameRGBA)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> StardriftResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StardriftResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> StardriftResult<()> {
        Ok(())
    }
}

/// Tick `host` `frames` times and stream every composited frame into `sink`.
#[tracing::instrument(skip(host, sink))]
pub fn render_frames(
    host: &mut FrameLoop,
    frames: u64,
    sink: &mut dyn FrameSink,
) -> StardriftResult<()> {
    let vp = host.env().viewport;
    if vp.is_empty() {
        return Err(StardriftError::validation("viewport must be non-empty"));
    }
    sink.begin(SinkConfig {
        width: vp.width,
        height: vp.height,
        fps: host.fps(),
    })?;
    for _ in 0..frames {
        let idx = host.frame_index();
        let frame = host.tick()?;
        sink.push_frame(idx, &frame)?;
    }
    sink.end()
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
