//! Latest structured view of the game, replaced wholesale every cycle.

use std::time::Instant;

use crate::perception::{Detection, ObjectClass, PerceptionResult, ResourceSnapshot};

/// The most recent perception snapshot plus its capture time.
///
/// There is exactly one mutator (the environment controller); updates
/// replace resources and detections atomically, no incremental merging.
#[derive(Debug, Clone)]
pub struct GameState {
    captured_at: Instant,
    pub resources: ResourceSnapshot,
    pub detections: Vec<Detection>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            captured_at: Instant::now(),
            resources: ResourceSnapshot::default(),
            detections: Vec::new(),
        }
    }

    /// Replace the whole snapshot and stamp the (monotonic) capture time.
    pub fn update(&mut self, result: PerceptionResult) {
        self.captured_at = Instant::now();
        self.resources = result.resources;
        self.detections = result.detections;
    }

    pub fn captured_at(&self) -> Instant {
        self.captured_at
    }

    /// All detections of one class, in detection order. Empty when absent.
    pub fn query(&self, class: &ObjectClass) -> Vec<&Detection> {
        self.detections.iter().filter(|d| &d.class == class).collect()
    }

    /// How many detections count as battlefield awareness.
    pub fn battlefield_presence(&self) -> u32 {
        self.detections
            .iter()
            .filter(|d| d.class.is_battlefield_presence())
            .count() as u32
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = &self.resources;
        write!(
            f,
            "pop {}/{} | idle {} | food {} ({}) | wood {} ({}) | gold {} ({}) | stone {} ({}) | {} objects",
            r.current_population,
            r.max_population,
            r.idle_workers,
            r.food,
            r.food_workers,
            r.wood,
            r.wood_workers,
            r.gold,
            r.gold_workers,
            r.stone,
            r.stone_workers,
            self.detections.len(),
        )
    }
}
