//! The environment controller: one perception-to-action step at a time.

use std::collections::HashMap;
use std::thread;

use image::imageops::{self, FilterType};
use tracing::{debug, info, warn};

use crate::actions::{Action, Dispatcher};
use crate::capture::{Frame, FrameSource};
use crate::config::EnvConfig;
use crate::perception::Perceptor;
use crate::render::{Hud, OverlayRenderer};
use crate::reward::RewardEngine;
use crate::state::GameState;

/// What one `step` returns to the training harness: always well-formed,
/// whatever went wrong underneath.
pub struct StepOutcome {
    pub observation: Frame,
    pub reward: f32,
    pub done: bool,
    pub info: HashMap<String, String>,
}

/// Gym-style environment over a live game window.
///
/// Single-threaded and blocking by design: each step runs its gestures,
/// waits for the UI to settle, and re-senses before returning. There is no
/// cancellation mid-step and no fixed step cap — an agent that stops making
/// measurable progress terminates itself via the no-progress counter.
///
/// Two environments must never share one physical input/display target;
/// their gestures would corrupt each other's perception and control.
pub struct Env {
    frames: Box<dyn FrameSource>,
    perceptor: Box<dyn Perceptor>,
    dispatcher: Dispatcher,
    renderer: Box<dyn OverlayRenderer>,
    reward: RewardEngine,
    state: GameState,
    config: EnvConfig,
    last_frame: Option<Frame>,
}

impl Env {
    pub fn new(
        frames: Box<dyn FrameSource>,
        perceptor: Box<dyn Perceptor>,
        dispatcher: Dispatcher,
        renderer: Box<dyn OverlayRenderer>,
        config: EnvConfig,
    ) -> Self {
        let reward = RewardEngine::new(config.reward.clone(), config.no_progress_threshold);
        Self {
            frames,
            perceptor,
            dispatcher,
            renderer,
            reward,
            state: GameState::new(),
            config,
            last_frame: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn reward_engine(&self) -> &RewardEngine {
        &self.reward
    }

    /// Re-sense, seed all previous-value reward fields from the fresh
    /// snapshot, zero the progress counter, return the first observation.
    pub fn reset(&mut self) -> Frame {
        info!("resetting environment");
        self.sense();
        self.reward.seed(&self.state);
        self.observation()
    }

    /// Dispatch the action, let the UI settle, re-sense, score the
    /// transition and decide termination.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        // Fresh detections for target resolution; the pre-action state is
        // not what the reward compares against.
        self.sense();
        self.dispatcher.dispatch(&action, &self.state.detections);

        if !self.config.settle.is_zero() {
            thread::sleep(self.config.settle);
        }

        self.sense();
        let reward = self.reward.evaluate(&self.state);
        let done = self.reward.exhausted();

        if let Some(frame) = &self.last_frame {
            let hud = Hud { action, reward, no_progress_steps: self.reward.no_progress_steps() };
            self.renderer.render(frame, &hud);
        }

        if done {
            warn!(
                "no measurable progress for {} steps, ending episode (total reward {:.2})",
                self.config.no_progress_threshold,
                self.reward.episode_total()
            );
        }

        StepOutcome { observation: self.observation(), reward, done, info: HashMap::new() }
    }

    /// Capture and perceive. A failed capture is "no new information": the
    /// previous state stands and the loop retries on the next call.
    fn sense(&mut self) {
        match self.frames.capture() {
            Some(frame) => {
                let result = self.perceptor.extract(&frame);
                self.state.update(result);
                self.last_frame = Some(frame);
            }
            None => debug!("no frame this cycle, keeping previous state"),
        }
    }

    /// The latest frame resized to the observation resolution; solid black
    /// until a first frame has ever been captured.
    fn observation(&self) -> Frame {
        let (w, h) = (self.config.observation_width, self.config.observation_height);
        match &self.last_frame {
            Some(frame) => imageops::resize(frame, w, h, FilterType::Triangle),
            None => Frame::new(w, h),
        }
    }
}
