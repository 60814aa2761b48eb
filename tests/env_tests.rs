mod common;

use common::{
    detection, result_with, test_config, FixedFrames, GestureLog, NoFrames, Recorded,
    RecordingInput, ScriptedPerceptor,
};
use overmind::actions::{Action, Dispatcher};
use overmind::config::EnvConfig;
use overmind::env::Env;
use overmind::perception::{ObjectClass, PerceptionResult, Perceptor, ResourceSnapshot};
use overmind::render::TraceRenderer;

fn build_env(perceptor: ScriptedPerceptor, config: EnvConfig) -> (Env, GestureLog) {
    let (driver, log) = RecordingInput::new();
    let dispatcher = Dispatcher::with_seed(Box::new(driver), &config, 7);
    let env = Env::new(
        Box::new(FixedFrames { width: 128, height: 72 }),
        Box::new(perceptor),
        dispatcher,
        Box::new(TraceRenderer),
        config,
    );
    (env, log)
}

/// An action id with no coordinates and no macro target on an empty
/// screen: dispatching it moves the camera, nothing else.
fn noop_action() -> Action {
    Action::bare(3) // queue villager with no town center visible
}

#[test]
fn reset_then_noop_step_yields_fog_penalty_and_not_done() {
    // Nothing on screen, all resources zero, forever.
    let (mut env, _log) = build_env(ScriptedPerceptor::empty(), test_config(30));

    let observation = env.reset();
    assert_eq!((observation.width(), observation.height()), (64, 36));

    let outcome = env.step(noop_action());
    // Zero deltas; only the fog penalty applies with nothing visible.
    assert_eq!(outcome.reward, -5.0);
    assert!(!outcome.done);
    assert!(outcome.info.is_empty());
}

#[test]
fn reset_then_noop_step_with_units_visible_is_zero_reward() {
    // One villager visible in every sense, no resource movement.
    let scene = result_with(
        ResourceSnapshot::default(),
        vec![detection(ObjectClass::Villager, 10, 10, 30, 30)],
    );
    let (mut env, _log) = build_env(ScriptedPerceptor::new(vec![scene]), test_config(30));

    env.reset();
    let outcome = env.step(noop_action());
    assert_eq!(outcome.reward, 0.0);
    assert!(!outcome.done);
}

#[test]
fn episode_ends_exactly_when_the_counter_reaches_the_threshold() {
    let (mut env, _log) = build_env(ScriptedPerceptor::empty(), test_config(3));

    env.reset();
    assert!(!env.step(noop_action()).done); // counter 1
    assert!(!env.step(noop_action()).done); // counter 2
    assert!(env.step(noop_action()).done); // counter 3 = threshold
}

#[test]
fn resource_growth_is_rewarded_and_resets_the_cutoff() {
    // Sense order: reset, then (pre-dispatch, post-dispatch) per step.
    let zero = result_with(ResourceSnapshot::default(), Vec::new());
    let grown = result_with(ResourceSnapshot { food: 10, ..Default::default() }, Vec::new());
    let script = ScriptedPerceptor::new(vec![zero.clone(), zero, grown]);
    let (mut env, _log) = build_env(script, test_config(3));

    env.reset();
    let outcome = env.step(noop_action());
    // Δfood +10 minus the fog penalty (still nothing visible).
    assert_eq!(outcome.reward, 5.0);
    assert!(!outcome.done);
    assert_eq!(env.reward_engine().no_progress_steps(), 0);
}

#[test]
fn step_dispatches_against_the_pre_action_detections() {
    // The town center is only on screen for the pre-dispatch sense; the
    // post-action sense sees nothing. The macro must still fire.
    let with_tc = result_with(
        ResourceSnapshot::default(),
        vec![detection(ObjectClass::TownCenter, 100, 100, 300, 300)],
    );
    let empty = result_with(ResourceSnapshot::default(), Vec::new());
    let script = ScriptedPerceptor::new(vec![with_tc.clone(), with_tc, empty]);
    let (mut env, log) = build_env(script, test_config(30));

    env.reset();
    env.step(Action::bare(3));

    // Selection click plus the queue hotkey.
    assert_eq!(log.len(), 2);
    assert!(matches!(log.snapshot()[0], Recorded::Click { .. }));
}

#[test]
fn capture_failure_still_returns_a_well_formed_outcome() {
    struct PanickingPerceptor;
    impl Perceptor for PanickingPerceptor {
        fn extract(&mut self, _frame: &overmind::Frame) -> PerceptionResult {
            panic!("perceptor must not run without a frame");
        }
    }

    let config = test_config(30);
    let (driver, _log) = RecordingInput::new();
    let dispatcher = Dispatcher::with_seed(Box::new(driver), &config, 7);
    let mut env = Env::new(
        Box::new(NoFrames),
        Box::new(PanickingPerceptor),
        dispatcher,
        Box::new(TraceRenderer),
        config,
    );

    // Blank observation until a frame ever arrives.
    let observation = env.reset();
    assert_eq!((observation.width(), observation.height()), (64, 36));

    let outcome = env.step(noop_action());
    assert_eq!((outcome.observation.width(), outcome.observation.height()), (64, 36));
    // State never changed: zero deltas, nothing visible, fog penalty.
    assert_eq!(outcome.reward, -5.0);
    assert!(!outcome.done);
}

#[test]
fn invalid_action_id_steps_without_gestures() {
    let (mut env, log) = build_env(ScriptedPerceptor::empty(), test_config(30));

    env.reset();
    let outcome = env.step(Action::bare(99));

    assert!(log.is_empty());
    assert_eq!(outcome.reward, -5.0);
    assert!(!outcome.done);
}

#[test]
fn timestamps_increase_across_senses() {
    let (mut env, _log) = build_env(ScriptedPerceptor::empty(), test_config(30));

    env.reset();
    let first = env.state().captured_at();
    env.step(noop_action());
    let second = env.state().captured_at();
    assert!(second > first);
}
