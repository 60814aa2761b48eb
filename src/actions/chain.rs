//! Ordered gesture sequences backing macro actions.

use std::time::Duration;
use tracing::info;

use crate::input::{InputDriver, Key, MouseButton, Point};

/// One primitive gesture inside a chain.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureStep {
    MoveClick { point: Point, clicks: u8, button: MouseButton },
    KeyPress(Key),
    Wait(Duration),
}

/// A gesture sequence that is atomic from the caller's side but not
/// transactional inside: a mid-sequence failure in the game UI is neither
/// detected nor rolled back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionChain {
    steps: Vec<GestureStep>,
}

impl ActionChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_click(&mut self, point: Point) {
        self.add_move_click(point, 1, MouseButton::Left);
    }

    pub fn add_move_click(&mut self, point: Point, clicks: u8, button: MouseButton) {
        self.steps.push(GestureStep::MoveClick { point, clicks, button });
    }

    pub fn add_key(&mut self, key: Key) {
        self.steps.push(GestureStep::KeyPress(key));
    }

    pub fn add_wait(&mut self, duration: Duration) {
        self.steps.push(GestureStep::Wait(duration));
    }

    pub fn steps(&self) -> &[GestureStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Execute every step in order, synchronously, to completion.
    pub fn run(&self, driver: &mut dyn InputDriver) {
        for step in &self.steps {
            match step {
                GestureStep::MoveClick { point, clicks, button } => {
                    driver.move_and_click(*point, *clicks, *button);
                    info!("{button:?} click x{clicks} at {point}");
                }
                GestureStep::KeyPress(key) => {
                    driver.key_press(*key);
                    info!("pressed {key:?}");
                }
                GestureStep::Wait(duration) => {
                    driver.wait(*duration);
                    info!("waited {duration:?}");
                }
            }
        }
    }
}
