//! Pad diagnostics binary.
//!
//! Echoes every edge the watcher dispatches, one line per event, so a
//! cabinet build can be checked without starting the game. Runs in raw
//! mode but keeps the normal screen; `RUST_LOG=debug` also shows the
//! watcher's own lifecycle logs.

use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use joycab::pad::{KeyFeed, KeyPad};
use joycab::watch::{PadEdge, PadWatcher, TapListener};

fn main() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (pad, feed) = KeyPad::new();

    // Edges arrive on the watcher thread; print them from here instead.
    let (edge_tx, edge_rx) = mpsc::channel();
    let watcher = PadWatcher::spawn(
        pad,
        TapListener::new(move |edge| {
            let _ = edge_tx.send(edge);
        }),
    );

    terminal::enable_raw_mode()?;
    print!("pad-test: W/S/A/D stick 1, arrows stick 2, h/j/k/u and 1-4 buttons, Esc menu.\r\n");
    print!("q or Ctrl-C quits.\r\n");

    let result = pump(&feed, &edge_rx);

    let _ = terminal::disable_raw_mode();
    watcher.shutdown();
    result
}

fn pump(feed: &KeyFeed, edges: &mpsc::Receiver<PadEdge>) -> Result<()> {
    loop {
        while let Ok(edge) = edges.try_recv() {
            print!("{edge}\r\n");
        }

        if event::poll(Duration::from_millis(20))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && is_quit(&key) {
                    return Ok(());
                }
                feed.push(&key);
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
