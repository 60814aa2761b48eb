use serde::{Deserialize, Serialize};

use crate::input::Point;

/// Object categories the detection model is trained on. Labels outside the
/// known set are carried through as `Other` so queries on them still work.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    Villager,
    Scout,
    TownCenter,
    Sheep,
    House,
    Mill,
    Other(String),
}

impl ObjectClass {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Villager" => ObjectClass::Villager,
            "Scout" => ObjectClass::Scout,
            "TownCenter" => ObjectClass::TownCenter,
            "Sheep" => ObjectClass::Sheep,
            "House" => ObjectClass::House,
            "Mill" => ObjectClass::Mill,
            other => ObjectClass::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ObjectClass::Villager => "Villager",
            ObjectClass::Scout => "Scout",
            ObjectClass::TownCenter => "TownCenter",
            ObjectClass::Sheep => "Sheep",
            ObjectClass::House => "House",
            ObjectClass::Mill => "Mill",
            ObjectClass::Other(label) => label,
        }
    }

    /// The fixed subset that counts as battlefield awareness for reward
    /// shaping: workers, scouts, town centers, huntable resources.
    pub fn is_battlefield_presence(&self) -> bool {
        matches!(
            self,
            ObjectClass::Villager | ObjectClass::Scout | ObjectClass::TownCenter | ObjectClass::Sheep
        )
    }
}

impl std::fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Axis-aligned box in frame pixel space, (x1, y1) top-left inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }
}

/// One recognized on-screen object. Ephemeral: detections are recreated
/// from scratch every perception cycle and carry no identity across frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub class: ObjectClass,
    pub bounds: BoundingBox,
    pub confidence: f32,
}

/// Economic and population state read off the game HUD.
///
/// All fields default to 0 and a failed text read also yields 0, so a true
/// zero and a recognition failure are indistinguishable to callers. That is
/// a known precision loss of the HUD-reading approach, accepted rather than
/// papered over with sentinels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub food: u32,
    pub wood: u32,
    pub gold: u32,
    pub stone: u32,
    pub food_workers: u32,
    pub wood_workers: u32,
    pub gold_workers: u32,
    pub stone_workers: u32,
    pub idle_workers: u32,
    pub current_population: u32,
    pub max_population: u32,
}

/// Everything one perception cycle produces.
#[derive(Debug, Clone, Default)]
pub struct PerceptionResult {
    pub detections: Vec<Detection>,
    pub resources: ResourceSnapshot,
}
