pub mod actions;
pub mod capture;
pub mod config;
pub mod env;
pub mod input;
pub mod perception;
pub mod render;
pub mod reward;
pub mod state;

// Re-export the surfaces a training harness touches.
pub use actions::{Action, ACTION_SPACE};
pub use capture::{Frame, FrameSource};
pub use config::EnvConfig;
pub use env::{Env, StepOutcome};
