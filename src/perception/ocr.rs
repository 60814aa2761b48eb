//! HUD text regions and the number parsing applied to recognized text.
//!
//! Parsing is deliberately forgiving: anything that fails to parse
//! degrades to zero, matching the snapshot's default-to-zero contract.

use serde::{Deserialize, Serialize};

/// A rectangular crop of the frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Where each HUD counter sits on screen. Calibrated for a 2560x1440
/// layout; recalibrate per resolution and UI scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiRegions {
    pub population: Region,
    pub idle_workers: Region,
    pub food_count: Region,
    pub food_workers: Region,
    pub wood_count: Region,
    pub wood_workers: Region,
    pub gold_count: Region,
    pub gold_workers: Region,
    pub stone_count: Region,
    pub stone_workers: Region,
}

impl Default for UiRegions {
    fn default() -> Self {
        Self {
            population: Region::new(48, 1139, 103, 39),
            idle_workers: Region::new(186, 1132, 56, 45),
            food_count: Region::new(51, 1210, 104, 48),
            food_workers: Region::new(186, 1210, 62, 44),
            wood_count: Region::new(51, 1265, 101, 43),
            wood_workers: Region::new(189, 1261, 63, 43),
            gold_count: Region::new(52, 1319, 105, 39),
            gold_workers: Region::new(187, 1317, 62, 38),
            stone_count: Region::new(50, 1370, 104, 38),
            stone_workers: Region::new(186, 1367, 63, 39),
        }
    }
}

/// Keep only the digits of `text` and parse them; 0 on anything else.
pub fn parse_count(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse "a/b" into (a, b); (0, 0) on anything that is not exactly two
/// digit groups around one slash.
pub fn parse_fraction(text: &str) -> (u32, u32) {
    let trimmed = text.trim();
    let mut parts = trimmed.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => {
            match (a.trim().parse(), b.trim().parse()) {
                (Ok(a), Ok(b)) => (a, b),
                _ => (0, 0),
            }
        }
        _ => (0, 0),
    }
}
