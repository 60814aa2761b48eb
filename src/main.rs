//! Observer mode: watch the game window and log what perception sees,
//! without touching the controls. Useful for checking capture and HUD
//! region calibration before letting an agent loose.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use overmind::capture::{FrameSource, WindowFrameSource};
use overmind::perception::{Perceptor, ScreenPerceptor, StubDetector, StubRecognizer};
use overmind::state::GameState;

const DEFAULT_WINDOW_TITLE: &str = "Age of Empires IV";
const CADENCE: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let title = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_WINDOW_TITLE.to_string());
    info!("observer starting, watching windows titled \"{title}\"");
    warn!("no detector/recognizer backend wired; detections and HUD reads will be empty");

    let mut frames = WindowFrameSource::new(title);
    let mut perceptor = ScreenPerceptor::new(Box::new(StubDetector), Box::new(StubRecognizer));
    let mut state = GameState::new();

    loop {
        match frames.capture() {
            Some(frame) => {
                state.update(perceptor.extract(&frame));
                info!("{state}");
            }
            None => {
                // Window gone or capture failed; back off and retry.
                thread::sleep(Duration::from_secs(1));
                continue;
            }
        }
        thread::sleep(CADENCE);
    }
}
