#![allow(dead_code)]

//! Shared test doubles: a gesture-recording input driver, a scripted
//! perceptor, and canned frame sources.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use overmind::capture::{Frame, FrameSource};
use overmind::config::EnvConfig;
use overmind::input::{InputDriver, Key, MouseButton, Point};
use overmind::perception::{
    BoundingBox, Detection, ObjectClass, PerceptionResult, Perceptor, ResourceSnapshot,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    MoveTo(Point),
    Click { point: Point, clicks: u8, button: MouseButton },
    KeyDown(Key),
    KeyUp(Key),
    KeyPress(Key),
    Drag { from: Point, to: Point },
    Wait(Duration),
}

/// Shared handle onto everything a `RecordingInput` was asked to do.
#[derive(Clone, Default)]
pub struct GestureLog(Rc<RefCell<Vec<Recorded>>>);

impl GestureLog {
    pub fn snapshot(&self) -> Vec<Recorded> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, record: Recorded) {
        self.0.borrow_mut().push(record);
    }
}

/// Input driver that records every gesture and performs none of them.
/// Waits are recorded, not slept.
pub struct RecordingInput {
    log: GestureLog,
    cursor: Point,
}

impl RecordingInput {
    pub fn new() -> (Self, GestureLog) {
        let log = GestureLog::default();
        (Self { log: log.clone(), cursor: Point::default() }, log)
    }
}

impl InputDriver for RecordingInput {
    fn move_to(&mut self, point: Point) {
        self.cursor = point;
        self.log.push(Recorded::MoveTo(point));
    }

    fn cursor(&self) -> Point {
        self.cursor
    }

    fn move_and_click(&mut self, point: Point, clicks: u8, button: MouseButton) {
        self.cursor = point;
        self.log.push(Recorded::Click { point, clicks, button });
    }

    fn key_down(&mut self, key: Key) {
        self.log.push(Recorded::KeyDown(key));
    }

    fn key_up(&mut self, key: Key) {
        self.log.push(Recorded::KeyUp(key));
    }

    fn key_press(&mut self, key: Key) {
        self.log.push(Recorded::KeyPress(key));
    }

    fn drag(&mut self, from: Point, to: Point, _duration: Duration) {
        self.cursor = to;
        self.log.push(Recorded::Drag { from, to });
    }

    fn wait(&mut self, duration: Duration) {
        self.log.push(Recorded::Wait(duration));
    }
}

/// Plays back a fixed sequence of perception results, one per `extract`
/// call, repeating the final entry once the script runs out. An empty
/// script yields default (empty) results forever.
pub struct ScriptedPerceptor {
    script: VecDeque<PerceptionResult>,
}

impl ScriptedPerceptor {
    pub fn new(script: Vec<PerceptionResult>) -> Self {
        Self { script: script.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Perceptor for ScriptedPerceptor {
    fn extract(&mut self, _frame: &Frame) -> PerceptionResult {
        if self.script.len() > 1 {
            self.script.pop_front().unwrap()
        } else {
            self.script.front().cloned().unwrap_or_default()
        }
    }
}

/// Always captures a blank frame of the given size.
pub struct FixedFrames {
    pub width: u32,
    pub height: u32,
}

impl FrameSource for FixedFrames {
    fn capture(&mut self) -> Option<Frame> {
        Some(Frame::new(self.width, self.height))
    }
}

/// Never captures anything (window not found, capture broken).
pub struct NoFrames;

impl FrameSource for NoFrames {
    fn capture(&mut self) -> Option<Frame> {
        None
    }
}

pub fn detection(class: ObjectClass, x1: i32, y1: i32, x2: i32, y2: i32) -> Detection {
    Detection { class, bounds: BoundingBox::new(x1, y1, x2, y2), confidence: 0.9 }
}

pub fn result_with(resources: ResourceSnapshot, detections: Vec<Detection>) -> PerceptionResult {
    PerceptionResult { detections, resources }
}

/// Env config suitable for tests: no settle sleep, tiny observations.
pub fn test_config(no_progress_threshold: u32) -> EnvConfig {
    EnvConfig {
        settle: Duration::ZERO,
        observation_width: 64,
        observation_height: 36,
        no_progress_threshold,
        ..EnvConfig::default()
    }
}
