//! Diagnostic overlay boundary. What a step did, drawn or logged for a
//! human watching the run; never consulted for correctness.

use tracing::{info, warn};

use crate::actions::Action;
use crate::capture::Frame;

/// The per-step diagnostics handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Hud {
    pub action: Action,
    pub reward: f32,
    pub no_progress_steps: u32,
}

/// Visualization collaborator. A real implementation might draw onto a
/// preview window; the environment only promises to call it once per step.
pub trait OverlayRenderer {
    fn render(&mut self, frame: &Frame, hud: &Hud);
}

/// Renders the HUD into the log stream instead of onto the screen.
#[derive(Debug, Default)]
pub struct TraceRenderer;

impl OverlayRenderer for TraceRenderer {
    fn render(&mut self, _frame: &Frame, hud: &Hud) {
        info!("action {} | reward {:.2}", hud.action, hud.reward);
        if hud.no_progress_steps > 0 {
            warn!("no progress for {} steps", hud.no_progress_steps);
        }
    }
}
