//! Shaped reward from consecutive game-state snapshots, plus the
//! no-progress counter that terminates idle episodes.

use serde::{Deserialize, Serialize};

use crate::perception::ResourceSnapshot;
use crate::state::GameState;

/// Linear reward coefficients. The values are the empirically-chosen
/// shaping constants of the original agent; nothing here second-guesses
/// them, they are configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardWeights {
    pub food: f32,
    pub wood: f32,
    pub gold: f32,
    pub stone: f32,
    pub population: f32,
    /// Applied to (previous idle workers - current idle workers): putting
    /// idle hands to work is rewarded, letting them idle is penalized.
    pub idle_recovery: f32,
    /// Applied to the change in visible battlefield-presence detections.
    pub visibility: f32,
    /// Flat penalty whenever zero battlefield-presence units are visible
    /// (the camera is lost in fog or staring at nothing).
    pub fog_penalty: f32,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            food: 1.0,
            wood: 0.8,
            gold: 0.8,
            stone: 0.8,
            population: 2.0,
            idle_recovery: 0.5,
            visibility: 0.2,
            fog_penalty: 5.0,
        }
    }
}

/// Computes per-step reward deltas and tracks episode progress.
#[derive(Debug, Clone)]
pub struct RewardEngine {
    weights: RewardWeights,
    no_progress_threshold: u32,
    prev: ResourceSnapshot,
    prev_visible: u32,
    no_progress_steps: u32,
    episode_total: f32,
}

impl RewardEngine {
    pub fn new(weights: RewardWeights, no_progress_threshold: u32) -> Self {
        Self {
            weights,
            no_progress_threshold,
            prev: ResourceSnapshot::default(),
            prev_visible: 0,
            no_progress_steps: 0,
            episode_total: 0.0,
        }
    }

    /// Prime every previous-value field from a fresh snapshot and zero the
    /// episode counters. Called on environment reset.
    pub fn seed(&mut self, state: &GameState) {
        self.prev = state.resources.clone();
        self.prev_visible = state.battlefield_presence();
        self.no_progress_steps = 0;
        self.episode_total = 0.0;
    }

    /// Score the transition from the remembered snapshot to `state`, then
    /// remember `state`. Resets the no-progress counter on any positive
    /// reward, increments it otherwise.
    pub fn evaluate(&mut self, state: &GameState) -> f32 {
        let r = &state.resources;
        let visible = state.battlefield_presence();
        let w = &self.weights;

        let mut reward = 0.0;
        reward += delta(r.food, self.prev.food) * w.food;
        reward += delta(r.wood, self.prev.wood) * w.wood;
        reward += delta(r.gold, self.prev.gold) * w.gold;
        reward += delta(r.stone, self.prev.stone) * w.stone;
        reward += delta(r.current_population, self.prev.current_population) * w.population;
        reward += delta(self.prev.idle_workers, r.idle_workers) * w.idle_recovery;
        reward += delta(visible, self.prev_visible) * w.visibility;

        if visible == 0 {
            reward -= w.fog_penalty;
        }

        self.prev = r.clone();
        self.prev_visible = visible;

        if reward > 0.0 {
            self.no_progress_steps = 0;
        } else {
            self.no_progress_steps += 1;
        }
        self.episode_total += reward;

        reward
    }

    /// True once the no-progress counter has reached the threshold.
    pub fn exhausted(&self) -> bool {
        self.no_progress_steps >= self.no_progress_threshold
    }

    pub fn no_progress_steps(&self) -> u32 {
        self.no_progress_steps
    }

    /// Running reward total for the episode. Diagnostic only; it feeds no
    /// reward term.
    pub fn episode_total(&self) -> f32 {
        self.episode_total
    }
}

// Signed difference of two unsigned counters. Both arguments are u32 so
// the i64 widening is always exact.
fn delta(current: u32, previous: u32) -> f32 {
    (current as i64 - previous as i64) as f32
}
