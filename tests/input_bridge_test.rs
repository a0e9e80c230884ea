//! Closed-loop input tests - scripted pad frames travel through watcher,
//! bridge, and intent queue into the game.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use joycab::bridge::StackerListener;
use joycab::core::{intent_queue, IntentRx, StackGame, MOVE_BURST};
use joycab::pad::ScriptedPad;
use joycab::types::{Button, PadState, StackMove, StickDir};
use joycab::watch::{PadWatcher, WatcherConfig};

fn stick1(dir: StickDir) -> PadState {
    let mut state = PadState::idle();
    state.stick1 = dir;
    state
}

fn menu_held() -> PadState {
    let mut state = PadState::idle();
    state.buttons.insert(Button::Menu);
    state
}

fn fast() -> WatcherConfig {
    WatcherConfig::default().with_poll_interval(Duration::from_millis(2))
}

/// Drain the queue until `want` moves arrived or a second passed.
fn collect_moves(rx: &IntentRx, want: usize) -> Vec<StackMove> {
    let deadline = Instant::now() + Duration::from_secs(1);
    let mut got = Vec::new();
    while got.len() < want && Instant::now() < deadline {
        let mut burst: ArrayVec<StackMove, MOVE_BURST> = ArrayVec::new();
        rx.drain_into(&mut burst);
        got.extend(burst);
        std::thread::sleep(Duration::from_millis(2));
    }
    got
}

fn drain_now(rx: &IntentRx) -> Vec<StackMove> {
    let mut burst: ArrayVec<StackMove, MOVE_BURST> = ArrayVec::new();
    rx.drain_into(&mut burst);
    burst.to_vec()
}

#[test]
fn test_scripted_session_reaches_the_game() {
    // Left, release, left, release, rotate: two shifts and one turn.
    let script = vec![
        stick1(StickDir::Left),
        PadState::idle(),
        stick1(StickDir::Left),
        PadState::idle(),
        stick1(StickDir::Up),
        PadState::idle(),
    ];
    let (tx, rx) = intent_queue(MOVE_BURST);
    let watcher = PadWatcher::spawn_with(ScriptedPad::new(script), StackerListener::new(tx), fast());

    let moves = collect_moves(&rx, 3);
    watcher.shutdown();
    assert_eq!(
        moves,
        vec![StackMove::Left, StackMove::Left, StackMove::RotateCw]
    );
    assert!(drain_now(&rx).is_empty());

    // Feed them to a game exactly as the scheduler would.
    let mut game = StackGame::new(21);
    let start_col = game.active().col;
    for mv in moves {
        game.apply(mv);
    }
    assert_eq!(game.active().col, start_col - 2);
}

#[test]
fn test_held_direction_does_not_repeat() {
    let (tx, rx) = intent_queue(MOVE_BURST);
    let watcher = PadWatcher::spawn_with(
        ScriptedPad::new(vec![stick1(StickDir::Right)]),
        StackerListener::new(tx),
        fast(),
    );

    let moves = collect_moves(&rx, 1);
    assert_eq!(moves, vec![StackMove::Right]);

    // Dozens more polls of the same held state add nothing.
    std::thread::sleep(Duration::from_millis(60));
    watcher.shutdown();
    assert!(drain_now(&rx).is_empty());
}

#[test]
fn test_menu_edge_crosses_the_queue_once() {
    let script = vec![menu_held(), PadState::idle()];
    let (tx, rx) = intent_queue(MOVE_BURST);
    let watcher = PadWatcher::spawn_with(ScriptedPad::new(script), StackerListener::new(tx), fast());

    let deadline = Instant::now() + Duration::from_secs(1);
    let mut seen = false;
    while !seen && Instant::now() < deadline {
        seen = rx.take_menu();
        std::thread::sleep(Duration::from_millis(2));
    }
    watcher.shutdown();

    assert!(seen, "menu edge never arrived");
    // The release produced no second edge.
    assert!(!rx.take_menu());
    assert!(drain_now(&rx).is_empty());
}
