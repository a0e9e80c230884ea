//! Keyboard-backed pad emulation for terminal environments.
//!
//! The terminal event pump pushes key events through a [`KeyFeed`]; the
//! watcher thread drains them on each [`KeyPad::sample`]. Terminals that
//! never emit key-release events are handled with a hold timeout: a key
//! not refreshed by a press or repeat within the timeout counts as
//! released.
//!
//! Layout: `W`/`S`/`A`/`D` drive stick 1, the arrow keys drive stick 2,
//! `h`/`j`/`k`/`u` are the player-1 action buttons, `1`-`4` the player-2
//! row, and `Esc` is the menu button.

use std::collections::HashMap;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use joycab_types::{Button, ButtonSet, PadState, StickDir, KEY_HOLD_TIMEOUT_MS};

use crate::Gamepad;

#[derive(Debug, Clone, Copy)]
enum KeyMessage {
    Down(KeyCode),
    Up(KeyCode),
}

/// Sender half handed to the terminal event pump.
#[derive(Debug, Clone)]
pub struct KeyFeed {
    tx: mpsc::Sender<KeyMessage>,
}

impl KeyFeed {
    /// Forward a terminal key event. Repeats refresh the held state the
    /// same way presses do.
    pub fn push(&self, event: &KeyEvent) {
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(event.code),
            KeyEventKind::Release => self.release(event.code),
        }
    }

    pub fn press(&self, code: KeyCode) {
        let _ = self.tx.send(KeyMessage::Down(normalize(code)));
    }

    pub fn release(&self, code: KeyCode) {
        let _ = self.tx.send(KeyMessage::Up(normalize(code)));
    }
}

/// Keyboard emulation of the cabinet pad.
///
/// Owned by the watcher thread; fed from the terminal thread through the
/// [`KeyFeed`] returned by [`KeyPad::new`].
#[derive(Debug)]
pub struct KeyPad {
    rx: mpsc::Receiver<KeyMessage>,
    held: HashMap<KeyCode, Instant>,
    hold_timeout: Duration,
}

impl KeyPad {
    pub fn new() -> (KeyPad, KeyFeed) {
        let (tx, rx) = mpsc::channel();
        let pad = KeyPad {
            rx,
            held: HashMap::new(),
            hold_timeout: Duration::from_millis(KEY_HOLD_TIMEOUT_MS as u64),
        };
        (pad, KeyFeed { tx })
    }

    /// Override the hold timeout used when the terminal emits no release
    /// events.
    pub fn with_hold_timeout(mut self, timeout: Duration) -> Self {
        self.hold_timeout = timeout;
        self
    }

    fn drain_feed(&mut self) {
        // Disconnected feed just means no more events; held keys will
        // expire on their own.
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                KeyMessage::Down(code) => {
                    self.held.insert(code, Instant::now());
                }
                KeyMessage::Up(code) => {
                    self.held.remove(&code);
                }
            }
        }
    }

    fn is_held(&self, code: KeyCode) -> bool {
        self.held.contains_key(&normalize(code))
    }
}

impl Gamepad for KeyPad {
    fn sample(&mut self) -> PadState {
        self.drain_feed();
        let timeout = self.hold_timeout;
        self.held.retain(|_, pressed_at| pressed_at.elapsed() <= timeout);

        let stick1 = StickDir::resolve(
            self.is_held(KeyCode::Char('w')),
            self.is_held(KeyCode::Char('s')),
            self.is_held(KeyCode::Char('a')),
            self.is_held(KeyCode::Char('d')),
        );
        let stick2 = StickDir::resolve(
            self.is_held(KeyCode::Up),
            self.is_held(KeyCode::Down),
            self.is_held(KeyCode::Left),
            self.is_held(KeyCode::Right),
        );

        let mut buttons = ButtonSet::empty();
        buttons.set(Button::A1, self.is_held(KeyCode::Char('h')));
        buttons.set(Button::B1, self.is_held(KeyCode::Char('j')));
        buttons.set(Button::X1, self.is_held(KeyCode::Char('k')));
        buttons.set(Button::Y1, self.is_held(KeyCode::Char('u')));
        buttons.set(Button::A2, self.is_held(KeyCode::Char('1')));
        buttons.set(Button::B2, self.is_held(KeyCode::Char('2')));
        buttons.set(Button::X2, self.is_held(KeyCode::Char('3')));
        buttons.set(Button::Y2, self.is_held(KeyCode::Char('4')));
        buttons.set(Button::Menu, self.is_held(KeyCode::Esc));

        PadState {
            stick1,
            stick2,
            buttons,
        }
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}
