use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::assets::decode::{PreparedImage, load_image};
use crate::foundation::error::StardriftResult;
use crate::render::surface::ImagePaint;

enum LoadState {
    None,
    Pending(Receiver<StardriftResult<PreparedImage>>),
    Ready(ImagePaint),
    Unavailable,
}

/// Best-effort background image, loaded off the frame thread.
///
/// The frame loop polls it once per frame; until the image arrives (or if it never does) callers
/// draw their flat fallback fill. There is no retry.
pub struct BackgroundImage {
    state: LoadState,
}

impl BackgroundImage {
    /// No background image configured.
    pub fn none() -> Self {
        Self {
            state: LoadState::None,
        }
    }

    /// Start decoding `path` on a helper thread.
    pub fn spawn_load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            // The receiver may be gone if the component was torn down first.
            let _ = tx.send(load_image(&path));
        });
        Self {
            state: LoadState::Pending(rx),
        }
    }

    /// Wrap an already decoded image.
    pub fn ready(img: &PreparedImage) -> StardriftResult<Self> {
        Ok(Self {
            state: LoadState::Ready(ImagePaint::from_prepared(img)?),
        })
    }

    /// Advance the load state and return the image if it is available.
    pub fn poll(&mut self) -> Option<&ImagePaint> {
        let next = match &self.state {
            LoadState::Pending(rx) => match rx.try_recv() {
                Ok(Ok(img)) => match ImagePaint::from_prepared(&img) {
                    Ok(paint) => Some(LoadState::Ready(paint)),
                    Err(err) => {
                        tracing::warn!(%err, "background image unusable, using flat fill");
                        Some(LoadState::Unavailable)
                    }
                },
                Ok(Err(err)) => {
                    tracing::warn!(%err, "background image failed to load, using flat fill");
                    Some(LoadState::Unavailable)
                }
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(LoadState::Unavailable),
            },
            LoadState::None | LoadState::Ready(_) | LoadState::Unavailable => None,
        };
        if let Some(next) = next {
            self.state = next;
        }

        match &self.state {
            LoadState::Ready(paint) => Some(paint),
            LoadState::None | LoadState::Pending(_) | LoadState::Unavailable => None,
        }
    }

    /// Return `true` while a load is still in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, LoadState::Pending(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/background.rs"]
mod tests;
