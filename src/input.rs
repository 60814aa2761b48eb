use std::time::Duration;
use tracing::debug;

/// A position in physical screen space (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Alt,
    Up,
    Down,
    Left,
    Right,
}

/// Capability boundary over the OS input subsystem.
///
/// Every primitive is best-effort and fire-and-forget: the underlying
/// system reports no success or failure, so none is invented here. The
/// driver is the single place gesture timing (travel, holds, waits) is
/// realized, which lets test doubles skip real sleeps entirely.
pub trait InputDriver {
    fn move_to(&mut self, point: Point);

    /// Current pointer position. Camera rotation anchors its displacement
    /// on wherever the cursor already is.
    fn cursor(&self) -> Point;

    fn move_and_click(&mut self, point: Point, clicks: u8, button: MouseButton);

    fn key_down(&mut self, key: Key);

    fn key_up(&mut self, key: Key);

    fn key_press(&mut self, key: Key);

    fn drag(&mut self, from: Point, to: Point, duration: Duration);

    fn wait(&mut self, duration: Duration);
}

/// Dry-run backend: tracks the cursor, performs nothing, logs at debug.
/// Useful when no real input backend is wired (observer mode, demos).
#[derive(Debug, Default)]
pub struct NullInput {
    cursor: Point,
}

impl NullInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDriver for NullInput {
    fn move_to(&mut self, point: Point) {
        debug!("null input: move to {point}");
        self.cursor = point;
    }

    fn cursor(&self) -> Point {
        self.cursor
    }

    fn move_and_click(&mut self, point: Point, clicks: u8, button: MouseButton) {
        debug!("null input: {button:?} click x{clicks} at {point}");
        self.cursor = point;
    }

    fn key_down(&mut self, key: Key) {
        debug!("null input: key down {key:?}");
    }

    fn key_up(&mut self, key: Key) {
        debug!("null input: key up {key:?}");
    }

    fn key_press(&mut self, key: Key) {
        debug!("null input: key press {key:?}");
    }

    fn drag(&mut self, from: Point, to: Point, _duration: Duration) {
        debug!("null input: drag {from} -> {to}");
        self.cursor = to;
    }

    fn wait(&mut self, _duration: Duration) {}
}
