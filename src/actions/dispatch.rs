//! Translates one decoded action into observable game effects.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::{EnvConfig, Hotkeys, PanMode, ScreenGeometry};
use crate::input::{InputDriver, Key, MouseButton, Point};
use crate::perception::Detection;

use super::{macros, Action, ActionKind, MacroCommand, PanDirection, SpinDirection};

const DRAG_DURATION: Duration = Duration::from_millis(500);
const PAN_HOLD: Duration = Duration::from_millis(10);
const ROTATE_HOLD: Duration = Duration::from_millis(50);
const ROTATE_DISTANCE: i32 = 27;

/// Owns the input driver and turns actions into gestures, consulting the
/// most recent detections to resolve macro targets. Missing targets and
/// out-of-range ids are logged no-ops; nothing here raises.
pub struct Dispatcher {
    driver: Box<dyn InputDriver>,
    screen: ScreenGeometry,
    hotkeys: Hotkeys,
    pan_mode: PanMode,
    rng: StdRng,
}

impl Dispatcher {
    pub fn new(driver: Box<dyn InputDriver>, config: &EnvConfig) -> Self {
        Self::with_seed(driver, config, rand::random())
    }

    /// Deterministic target selection for tests and replayable runs.
    pub fn with_seed(driver: Box<dyn InputDriver>, config: &EnvConfig, seed: u64) -> Self {
        Self {
            driver,
            screen: config.screen.clone(),
            hotkeys: config.hotkeys.clone(),
            pan_mode: config.pan_mode,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn dispatch(&mut self, action: &Action, detections: &[Detection]) {
        let Some(kind) = action.decode() else {
            warn!("action id {} outside the discrete range, ignoring", action.id);
            return;
        };

        match kind {
            ActionKind::Macro(command) => self.run_macro(command, detections),
            ActionKind::LeftClick(p) => self.click(p, 1, MouseButton::Left),
            ActionKind::DoubleClick(p) => self.click(p, 2, MouseButton::Left),
            ActionKind::RightClick(p) => self.click(p, 1, MouseButton::Right),
            ActionKind::Drag(from, to) => self.drag(from, to),
            ActionKind::Pan(direction) => match self.pan_mode {
                PanMode::EdgeNudge => self.pan_by_edge(direction),
                PanMode::KeyHold => self.pan_by_key(direction),
            },
            ActionKind::Rotate(direction) => self.rotate_camera(direction),
        }
    }

    fn run_macro(&mut self, command: MacroCommand, detections: &[Detection]) {
        match macros::plan(command, detections, &self.hotkeys, &mut self.rng) {
            Some(chain) => {
                info!("macro '{}': {} gestures", command.name(), chain.len());
                chain.run(self.driver.as_mut());
            }
            None => {
                warn!(
                    "macro '{}' skipped: no {} on screen",
                    command.name(),
                    command.required_class()
                );
            }
        }
    }

    fn click(&mut self, point: Point, clicks: u8, button: MouseButton) {
        self.driver.move_and_click(point, clicks, button);
        info!("{button:?} click x{clicks} at {point}");
    }

    /// Drag with both endpoints clamped inside the safe margin so the
    /// gesture can never trip OS screen-edge handling.
    fn drag(&mut self, from: Point, to: Point) {
        let from = self.screen.clamp_inside(from);
        let to = self.screen.clamp_inside(to);
        self.driver.drag(from, to, DRAG_DURATION);
        info!("drag {from} -> {to}");
    }

    fn pan_by_key(&mut self, direction: PanDirection) {
        let key = match direction {
            PanDirection::Up => Key::Up,
            PanDirection::Down => Key::Down,
            PanDirection::Left => Key::Left,
            PanDirection::Right => Key::Right,
        };
        self.driver.key_down(key);
        self.driver.wait(PAN_HOLD);
        self.driver.key_up(key);
        info!("panned {direction} (key hold)");
    }

    /// Nudge the pointer to the screen edge, pause, then recenter it so
    /// the next gesture starts from a known position.
    fn pan_by_edge(&mut self, direction: PanDirection) {
        let w = self.screen.width as i32;
        let h = self.screen.height as i32;
        let edge = match direction {
            PanDirection::Up => Point::new(w / 2, 1),
            PanDirection::Down => Point::new(w / 2, h - 1),
            PanDirection::Left => Point::new(1, h / 2),
            PanDirection::Right => Point::new(w - 1, h / 2),
        };
        self.driver.move_to(edge);
        self.driver.wait(PAN_HOLD);
        self.driver.move_to(self.screen.center());
        info!("panned {direction} (edge nudge)");
    }

    /// Held Alt plus a small horizontal cursor displacement; the sign of
    /// the displacement picks the rotation direction.
    fn rotate_camera(&mut self, direction: SpinDirection) {
        let origin = self.driver.cursor();
        let target = match direction {
            SpinDirection::Left => origin.offset(ROTATE_DISTANCE, 0),
            SpinDirection::Right => origin.offset(-ROTATE_DISTANCE, 0),
        };
        self.driver.key_down(Key::Alt);
        self.driver.wait(ROTATE_HOLD);
        self.driver.move_to(target);
        self.driver.key_up(Key::Alt);
        info!("rotated camera {direction:?}");
    }
}
