//! The discrete action surface exposed to the training harness.

pub mod chain;
pub mod dispatch;
pub mod macros;

pub use chain::{ActionChain, GestureStep};
pub use dispatch::Dispatcher;
pub use macros::MacroCommand;

use crate::input::Point;

/// Size of the discrete action-id range. Ids 0..4 are macros, the rest
/// primitives; anything >= this is rejected as a logged no-op.
pub const ACTION_SPACE: u32 = 14;

/// One action as the harness emits it: a discrete id plus up to two screen
/// coordinates. Some ids consume neither, some one, the drag both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub id: u32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Action {
    /// An action that uses no coordinates.
    pub fn bare(id: u32) -> Self {
        Self { id, x1: 0, y1: 0, x2: 0, y2: 0 }
    }

    /// An action with a single target coordinate.
    pub fn at(id: u32, x1: i32, y1: i32) -> Self {
        Self { id, x1, y1, x2: 0, y2: 0 }
    }

    pub fn first_point(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn second_point(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Map the id onto its semantic form; `None` for out-of-range ids.
    pub fn decode(&self) -> Option<ActionKind> {
        let p1 = self.first_point();
        let p2 = self.second_point();
        let kind = match self.id {
            0 => ActionKind::Macro(MacroCommand::UngarrisonTownCenter),
            1 => ActionKind::Macro(MacroCommand::BuildHouse { at: p1 }),
            2 => ActionKind::Macro(MacroCommand::BuildMill { at: p1 }),
            3 => ActionKind::Macro(MacroCommand::QueueVillager),
            4 => ActionKind::LeftClick(p1),
            5 => ActionKind::DoubleClick(p1),
            6 => ActionKind::RightClick(p1),
            7 => ActionKind::Drag(p1, p2),
            8 => ActionKind::Pan(PanDirection::Up),
            9 => ActionKind::Pan(PanDirection::Down),
            10 => ActionKind::Pan(PanDirection::Left),
            11 => ActionKind::Pan(PanDirection::Right),
            12 => ActionKind::Rotate(SpinDirection::Left),
            13 => ActionKind::Rotate(SpinDirection::Right),
            _ => return None,
        };
        Some(kind)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} {} {} {} {}]", self.id, self.x1, self.y1, self.x2, self.y2)
    }
}

/// Decoded action semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Macro(MacroCommand),
    LeftClick(Point),
    DoubleClick(Point),
    RightClick(Point),
    Drag(Point, Point),
    Pan(PanDirection),
    Rotate(SpinDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl std::fmt::Display for PanDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PanDirection::Up => "up",
            PanDirection::Down => "down",
            PanDirection::Left => "left",
            PanDirection::Right => "right",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    Left,
    Right,
}
