//! Cabinet game runner (default binary).
//!
//! Three threads, one direction of flow. The watcher thread samples the
//! keyboard pad and pushes intents through the bridge; the scheduler
//! thread (a [`Ticker`] at `STACK_TICK_MS`) drains those intents, steps
//! the game, and publishes snapshots; the main thread pumps terminal
//! events into the [`KeyFeed`](joycab::pad::KeyFeed) and renders the
//! latest snapshot it has seen.

use std::env;
use std::sync::mpsc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use joycab::bridge::StackerListener;
use joycab::clock::Ticker;
use joycab::core::{intent_queue, StackGame, StackSnapshot, MOVE_BURST};
use joycab::pad::KeyPad;
use joycab::scores::{ScoreEntry, Scoreboard};
use joycab::term::{StackView, TerminalRenderer, Viewport};
use joycab::types::{StackMove, STACK_TICK_MS};
use joycab::watch::PadWatcher;

/// Runtime settings picked up from the environment.
struct Config {
    scores_path: String,
    player: String,
}

impl Config {
    fn from_env() -> Config {
        Config {
            scores_path: env::var("JOYCAB_SCORES")
                .unwrap_or_else(|_| "joycab_scores.jsonl".to_string()),
            player: env::var("JOYCAB_PLAYER").unwrap_or_else(|_| "PLAYER1".to_string()),
        }
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = Config::from_env();

    let (pad, feed) = KeyPad::new();
    let (intent_tx, intent_rx) = intent_queue(MOVE_BURST);
    let watcher = PadWatcher::spawn(pad, StackerListener::new(intent_tx));

    let mut game = StackGame::new(clock_seed());
    let mut snap = game.snapshot();

    // Latest-wins handoff: the scheduler drops a frame when the renderer
    // has not picked up the previous one yet.
    let (snap_tx, snap_rx) = mpsc::sync_channel::<StackSnapshot>(1);

    let ticker = Ticker::spawn(Duration::from_millis(STACK_TICK_MS as u64), {
        let mut moves: ArrayVec<StackMove, MOVE_BURST> = ArrayVec::new();
        let mut out = StackSnapshot::default();
        let mut last = Instant::now();
        let mut was_over = game.game_over();
        move || {
            // Menu edge first: restart a finished game, pause a running
            // one.
            if intent_rx.take_menu() {
                if game.game_over() {
                    game.restart();
                } else {
                    game.toggle_pause();
                }
            }

            moves.clear();
            intent_rx.drain_into(&mut moves);
            for mv in moves.drain(..) {
                game.apply(mv);
            }

            let now = Instant::now();
            let elapsed = now.duration_since(last);
            last = now;
            game.tick(elapsed.as_millis() as u32);

            // Record the score once, on the tick the game ends.
            if game.game_over() && !was_over {
                let entry = ScoreEntry::new(config.player.clone(), game.score());
                if let Err(err) = Scoreboard::append(&config.scores_path, &entry) {
                    warn!(path = %config.scores_path, %err, "score not recorded");
                }
            }
            was_over = game.game_over();

            game.snapshot_into(&mut out);
            let _ = snap_tx.try_send(out);
        }
    });

    let view = StackView::default();

    loop {
        while let Ok(next) = snap_rx.try_recv() {
            snap = next;
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        if event::poll(Duration::from_millis(STACK_TICK_MS as u64))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(&key) {
                        break;
                    }
                    feed.push(&key);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }
    }

    ticker.cancel();
    watcher.shutdown();
    Ok(())
}

/// `q` or Ctrl-C leaves the program. Esc is the cabinet menu button and
/// must reach the pad instead.
fn should_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
