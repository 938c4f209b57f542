use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{StardriftError, StardriftResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::frame::FrameRGBA;

pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

fn ensure_parent_dir(path: &Path) -> StardriftResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

fn validate_size(cfg: &SinkConfig) -> StardriftResult<()> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(StardriftError::validation(
            "encode width/height must be non-zero",
        ));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        // yuv420p needs even dimensions.
        return Err(StardriftError::validation(
            "encode width/height must be even (required for yuv420p mp4 output)",
        ));
    }
    Ok(())
}

struct Running {
    cfg: SinkConfig,
    child: Child,
    stdin: Option<ChildStdin>,
    scratch: Vec<u8>,
}

/// Streams frames to the system `ffmpeg` as raw RGBA and encodes an H.264 MP4.
///
/// Frames are flattened over `bg_rgba` first, since the output has no alpha.
pub struct FfmpegSink {
    out_path: PathBuf,
    bg_rgba: [u8; 4],
    running: Option<Running>,
}

impl FfmpegSink {
    pub fn new(out_path: impl Into<PathBuf>, bg_rgba: [u8; 4]) -> Self {
        Self {
            out_path: out_path.into(),
            bg_rgba,
            running: None,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> StardriftResult<()> {
        validate_size(&cfg)?;
        ensure_parent_dir(&self.out_path)?;

        if !is_ffmpeg_on_path() {
            return Err(StardriftError::render(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.arg("-y");
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ])
        .arg(&self.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            StardriftError::render(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| StardriftError::render("failed to open ffmpeg stdin"))?;

        tracing::debug!(out = %self.out_path.display(), "ffmpeg started");
        self.running = Some(Running {
            scratch: vec![0u8; cfg.width as usize * cfg.height as usize * 4],
            cfg,
            child,
            stdin: Some(stdin),
        });
        Ok(())
    }

    fn push_frame(&mut self, _idx: FrameIndex, frame: &FrameRGBA) -> StardriftResult<()> {
        let Some(run) = self.running.as_mut() else {
            return Err(StardriftError::validation("ffmpeg sink used before begin"));
        };
        if frame.width != run.cfg.width || frame.height != run.cfg.height {
            return Err(StardriftError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, run.cfg.width, run.cfg.height
            )));
        }

        flatten_to_opaque_rgba8(&mut run.scratch, &frame.data, frame.premultiplied, self.bg_rgba)?;

        let Some(stdin) = run.stdin.as_mut() else {
            return Err(StardriftError::render("ffmpeg encoder is already finalized"));
        };
        stdin.write_all(&run.scratch).map_err(|e| {
            StardriftError::render(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> StardriftResult<()> {
        let Some(mut run) = self.running.take() else {
            return Ok(());
        };
        drop(run.stdin.take());

        let output = run.child.wait_with_output().map_err(|e| {
            StardriftError::render(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StardriftError::render(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        tracing::info!(out = %self.out_path.display(), "mp4 written");
        Ok(())
    }
}

/// Composite a frame over an opaque background colour.
pub fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    bg_rgba: [u8; 4],
) -> StardriftResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(StardriftError::validation(
            "flatten_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg = [
        u16::from(bg_rgba[0]),
        u16::from(bg_rgba[1]),
        u16::from(bg_rgba[2]),
    ];

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u16::from(s[3]);
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }
        let inv = 255 - a;
        for i in 0..3 {
            let c = if src_is_premul {
                u16::from(s[i])
            } else {
                mul_div255_u16(u16::from(s[i]), a)
            };
            d[i] = (c + mul_div255_u16(bg[i], inv)).min(255) as u8;
        }
        d[3] = 255;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
