//! Frame acquisition from the game window.

use thiserror::Error;
use tracing::warn;

/// Raw frame of the game window, RGBA.
pub type Frame = image::RgbaImage;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("no window matching \"{0}\"")]
    WindowNotFound(String),
    #[error("capture backend: {0}")]
    Backend(String),
    #[error("captured frame had inconsistent dimensions")]
    BadFrame,
}

/// On-demand frame producer. `None` means "no frame this time" — window
/// gone, capture failed — and callers treat it as no new information.
pub trait FrameSource {
    fn capture(&mut self) -> Option<Frame>;
}

/// Captures the first window whose title contains the configured keyword.
pub struct WindowFrameSource {
    title_keyword: String,
}

impl WindowFrameSource {
    pub fn new(title_keyword: impl Into<String>) -> Self {
        Self { title_keyword: title_keyword.into() }
    }

    fn try_capture(&self) -> Result<Frame, CaptureError> {
        let windows = xcap::Window::all().map_err(|e| CaptureError::Backend(e.to_string()))?;
        let window = windows
            .into_iter()
            .find(|w| w.title().contains(&self.title_keyword))
            .ok_or_else(|| CaptureError::WindowNotFound(self.title_keyword.clone()))?;

        let shot = window
            .capture_image()
            .map_err(|e| CaptureError::Backend(e.to_string()))?;

        // Rebuild through the raw buffer so the backend's image version
        // never leaks into our types.
        let (width, height) = (shot.width(), shot.height());
        Frame::from_raw(width, height, shot.into_raw()).ok_or(CaptureError::BadFrame)
    }
}

impl FrameSource for WindowFrameSource {
    fn capture(&mut self) -> Option<Frame> {
        match self.try_capture() {
            Ok(frame) => Some(frame),
            Err(err) => {
                warn!("frame capture failed: {err}");
                None
            }
        }
    }
}
