use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::input::Point;
use crate::reward::RewardWeights;

/// Physical screen geometry the game runs on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
    /// Safe margin for drags: endpoints are clamped this many pixels away
    /// from every screen edge so a gesture never trips OS edge handling.
    pub drag_margin: u32,
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self { width: 2560, height: 1440, drag_margin: 50 }
    }
}

impl ScreenGeometry {
    pub fn center(&self) -> Point {
        Point::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Clamp a point into [margin, dim - margin] on both axes. Accepts any
    /// input, including coordinates far outside the screen.
    pub fn clamp_inside(&self, point: Point) -> Point {
        let mx = self.drag_margin as i32;
        Point::new(
            point.x.clamp(mx, self.width as i32 - mx),
            point.y.clamp(mx, self.height as i32 - mx),
        )
    }
}

/// How directional panning is realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanMode {
    /// Nudge the pointer to the screen edge, then recenter it.
    EdgeNudge,
    /// Brief hold of the matching arrow key.
    KeyHold,
}

/// Game keybindings consumed by macro sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotkeys {
    pub ungarrison: char,
    pub build_menu: char,
    pub house: char,
    pub mill: char,
    pub queue_villager: char,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            ungarrison: 'f',
            build_menu: 'q',
            house: 'q',
            mill: 'w',
            queue_villager: 'q',
        }
    }
}

/// Environment tunables. Everything the control loop treats as a magic
/// number lives here with the known-good values as defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvConfig {
    pub screen: ScreenGeometry,
    /// Observation frames are resized to this resolution before being
    /// handed to the training harness.
    pub observation_width: u32,
    pub observation_height: u32,
    /// Pause after dispatching an action, letting the game UI react before
    /// the post-action sense.
    pub settle: Duration,
    /// Consecutive non-positive-reward steps before the episode ends.
    pub no_progress_threshold: u32,
    pub pan_mode: PanMode,
    pub hotkeys: Hotkeys,
    pub reward: RewardWeights,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            screen: ScreenGeometry::default(),
            observation_width: 1280,
            observation_height: 720,
            settle: Duration::from_millis(500),
            no_progress_threshold: 30,
            pan_mode: PanMode::EdgeNudge,
            hotkeys: Hotkeys::default(),
            reward: RewardWeights::default(),
        }
    }
}
