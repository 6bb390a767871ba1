//! Scenario tests for the timer engine.
//!
//! These tests drive the engine through whole Pomodoro cycles using only
//! the public API:
//! - Countdown length and completion
//! - Long break scheduling
//! - Auto-start policy
//! - Idempotent commands and mode switches

use tokio::sync::mpsc;

use focusflow::engine::{SessionScheduler, TimerEngine, TimerEvent};
use focusflow::types::{CompletionEvent, Mode, TimerConfig};

// ============================================================================
// Test Helpers
// ============================================================================

fn create_engine(config: TimerConfig) -> (TimerEngine, mpsc::UnboundedReceiver<TimerEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (TimerEngine::new(config, tx), rx)
}

/// Config with one-minute sessions so cycles finish in 60 ticks.
fn create_fast_config() -> TimerConfig {
    TimerConfig::default()
        .with_focus_minutes(1)
        .with_short_break_minutes(1)
        .with_long_break_minutes(1)
}

/// Starts the current session and ticks until it completes.
fn run_to_completion(engine: &mut TimerEngine) -> CompletionEvent {
    engine.start();
    let limit = engine.get_state().seconds_remaining + 1;
    for _ in 0..limit {
        if let Some(event) = engine.tick() {
            return event;
        }
    }
    panic!("session did not complete within {} ticks", limit);
}

fn completions(rx: &mut mpsc::UnboundedReceiver<TimerEvent>) -> Vec<CompletionEvent> {
    let mut found = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let TimerEvent::Completed(completion) = event {
            found.push(completion);
        }
    }
    found
}

// ============================================================================
// Countdown
// ============================================================================

#[test]
fn reset_then_countdown_takes_duration_ticks() {
    for (mode, minutes) in [(Mode::Focus, 2), (Mode::ShortBreak, 1), (Mode::LongBreak, 3)] {
        let config = TimerConfig::default()
            .with_focus_minutes(2)
            .with_short_break_minutes(1)
            .with_long_break_minutes(3);
        let (mut engine, _rx) = create_engine(config);
        engine.switch_mode(mode);
        engine.reset();
        engine.start();

        let mut ticks = 0;
        while engine.tick().is_none() {
            ticks += 1;
        }
        ticks += 1;

        assert_eq!(ticks, minutes * 60, "mode {:?}", mode);
    }
}

#[test]
fn one_second_left_transitions_in_one_tick() {
    let (mut engine, mut rx) = create_engine(TimerConfig::default());
    engine.start();
    // Burn the countdown down to the last second.
    for _ in 0..(25 * 60 - 1) {
        assert!(engine.tick().is_none());
    }
    assert_eq!(engine.get_state().seconds_remaining, 1);

    let completion = engine.tick().unwrap();

    assert_eq!(completion.completed_mode, Mode::Focus);
    let state = engine.get_state();
    assert_eq!(state.mode, Mode::ShortBreak);
    assert_eq!(state.seconds_remaining, 5 * 60);
    assert!(state.running);
    assert_eq!(completions(&mut rx), vec![completion]);
}

// ============================================================================
// Scheduling
// ============================================================================

#[test]
fn default_cycle_reaches_long_break_on_fourth_focus() {
    let config = create_fast_config().with_auto_start(false, false);
    let (mut engine, _rx) = create_engine(config);

    let first = run_to_completion(&mut engine);
    assert_eq!(first.next_mode, Mode::ShortBreak);
    run_to_completion(&mut engine);
    let third = run_to_completion(&mut engine);
    assert_eq!(third.completed_mode, Mode::Focus);
    assert_eq!(third.next_mode, Mode::ShortBreak);
    assert_eq!(engine.get_state().completed_focus_sessions, 2);

    run_to_completion(&mut engine);
    run_to_completion(&mut engine);
    run_to_completion(&mut engine);
    let fourth_focus = run_to_completion(&mut engine);

    assert_eq!(fourth_focus.completed_mode, Mode::Focus);
    assert_eq!(fourth_focus.completed_focus_sessions, 4);
    assert_eq!(fourth_focus.next_mode, Mode::LongBreak);
    assert!(fourth_focus.is_long_break_next());
    assert_eq!(engine.get_state().mode, Mode::LongBreak);
}

#[test]
fn scheduler_agrees_with_engine() {
    let config = create_fast_config()
        .with_long_break_interval(3)
        .with_auto_start(false, false);
    let (mut engine, _rx) = create_engine(config.clone());

    for _ in 0..12 {
        let completion = run_to_completion(&mut engine);
        let expected = SessionScheduler::next_mode(
            completion.completed_mode,
            completion.completed_focus_sessions,
            &config,
        );
        assert_eq!(completion.next_mode, expected);
        assert_eq!(engine.get_state().mode, expected);
    }
    assert_eq!(engine.get_state().completed_focus_sessions, 6);
}

// ============================================================================
// Auto-start
// ============================================================================

#[test]
fn auto_breaks_on_auto_focus_off() {
    let config = create_fast_config().with_auto_start(true, false);
    let (mut engine, _rx) = create_engine(config);

    run_to_completion(&mut engine);
    assert_eq!(engine.get_state().mode, Mode::ShortBreak);
    assert!(engine.get_state().running);

    // The break is already running; keep ticking without calling start.
    let mut completion = None;
    for _ in 0..60 {
        completion = engine.tick();
    }
    assert_eq!(completion.unwrap().completed_mode, Mode::ShortBreak);
    assert_eq!(engine.get_state().mode, Mode::Focus);
    assert!(!engine.get_state().running);
}

#[test]
fn auto_focus_on_chains_sessions() {
    let config = create_fast_config().with_auto_start(true, true);
    let (mut engine, mut rx) = create_engine(config);
    engine.start();

    for _ in 0..(60 * 4) {
        engine.tick();
    }

    assert_eq!(completions(&mut rx).len(), 4);
    assert_eq!(engine.get_state().completed_focus_sessions, 2);
    assert!(engine.get_state().running);
}

#[test]
fn next_session_event_reports_auto_start() {
    let config = create_fast_config().with_auto_start(false, false);
    let (mut engine, mut rx) = create_engine(config);
    run_to_completion(&mut engine);

    let mut next = None;
    while let Ok(event) = rx.try_recv() {
        if let TimerEvent::NextSession { mode, auto_started } = event {
            next = Some((mode, auto_started));
        }
    }
    assert_eq!(next, Some((Mode::ShortBreak, false)));
}

// ============================================================================
// Idempotence and cancellation
// ============================================================================

#[test]
fn pause_twice_changes_nothing() {
    let (mut engine, _rx) = create_engine(TimerConfig::default());
    engine.start();
    engine.tick();
    engine.pause();
    let once = *engine.get_state();

    engine.pause();

    assert_eq!(*engine.get_state(), once);
}

#[test]
fn extra_tick_after_transition_into_paused_mode_changes_nothing() {
    let config = create_fast_config().with_auto_start(false, false);
    let (mut engine, _rx) = create_engine(config);
    run_to_completion(&mut engine);
    let after = *engine.get_state();

    assert!(engine.tick().is_none());

    assert_eq!(*engine.get_state(), after);
}

#[test]
fn mode_switch_mid_countdown_never_counts() {
    let (mut engine, mut rx) = create_engine(create_fast_config());
    engine.start();
    for _ in 0..59 {
        engine.tick();
    }

    engine.switch_mode(Mode::ShortBreak);
    engine.switch_mode(Mode::Focus);

    assert_eq!(engine.get_state().completed_focus_sessions, 0);
    assert!(completions(&mut rx).is_empty());
    assert_eq!(engine.get_state().seconds_remaining, 60);
}

#[test]
fn reset_while_running_cancels_without_completion() {
    let (mut engine, mut rx) = create_engine(create_fast_config());
    engine.start();
    for _ in 0..30 {
        engine.tick();
    }

    engine.reset();

    assert!(!engine.get_state().running);
    assert_eq!(engine.get_state().seconds_remaining, 60);
    assert!(completions(&mut rx).is_empty());
}
