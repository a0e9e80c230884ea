//! Bounded handoff from watcher callbacks to the game thread.
//!
//! Listener callbacks run on the watcher thread and must not touch
//! game state directly. [`intent_queue`] splits the crossing into two
//! endpoints: the watcher side pushes [`StackMove`]s and never blocks
//! (a full queue drops the move), the scheduler side drains a bounded
//! burst once per beat. The menu button is an edge *flag* rather than
//! a queued move: however many presses land between beats, the game
//! observes one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, SyncSender};
use std::sync::{mpsc, Arc};

use arrayvec::ArrayVec;
use joycab_types::StackMove;

/// Most moves consumed per scheduler beat.
pub const MOVE_BURST: usize = 16;

/// Build a connected pair of intent endpoints with the given queue
/// capacity.
pub fn intent_queue(capacity: usize) -> (IntentTx, IntentRx) {
    let (moves_tx, moves_rx) = mpsc::sync_channel(capacity);
    let menu = Arc::new(AtomicBool::new(false));
    (
        IntentTx {
            moves: moves_tx,
            menu: Arc::clone(&menu),
        },
        IntentRx {
            moves: moves_rx,
            menu,
        },
    )
}

/// Watcher-side endpoint.
pub struct IntentTx {
    moves: SyncSender<StackMove>,
    menu: Arc<AtomicBool>,
}

impl IntentTx {
    /// Queue a move. A full queue or a gone receiver drops it; input
    /// must never stall the watcher thread.
    pub fn push(&self, mv: StackMove) {
        let _ = self.moves.try_send(mv);
    }

    /// Latch the menu edge until the game side takes it.
    pub fn press_menu(&self) {
        self.menu.store(true, Ordering::Relaxed);
    }
}

/// Game-side endpoint.
pub struct IntentRx {
    moves: Receiver<StackMove>,
    menu: Arc<AtomicBool>,
}

impl IntentRx {
    /// Drain queued moves into `out`, oldest first, stopping when `out`
    /// is full; anything left stays queued for the next beat.
    pub fn drain_into(&self, out: &mut ArrayVec<StackMove, MOVE_BURST>) {
        while !out.is_full() {
            match self.moves.try_recv() {
                Ok(mv) => out.push(mv),
                Err(_) => break,
            }
        }
    }

    /// Consume the menu edge; true at most once per press.
    pub fn take_menu(&self) -> bool {
        self.menu.swap(false, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_drain_in_push_order() {
        let (tx, rx) = intent_queue(8);
        tx.push(StackMove::Left);
        tx.push(StackMove::RotateCw);
        tx.push(StackMove::Down);
        let mut out = ArrayVec::new();
        rx.drain_into(&mut out);
        assert_eq!(
            out.as_slice(),
            &[StackMove::Left, StackMove::RotateCw, StackMove::Down]
        );
    }

    #[test]
    fn full_queue_drops_new_moves() {
        let (tx, rx) = intent_queue(2);
        tx.push(StackMove::Left);
        tx.push(StackMove::Left);
        tx.push(StackMove::Right);
        let mut out = ArrayVec::new();
        rx.drain_into(&mut out);
        assert_eq!(out.as_slice(), &[StackMove::Left, StackMove::Left]);
    }

    #[test]
    fn drain_stops_at_the_burst_and_keeps_the_rest() {
        let (tx, rx) = intent_queue(MOVE_BURST + 4);
        for _ in 0..MOVE_BURST + 2 {
            tx.push(StackMove::Down);
        }
        let mut out = ArrayVec::new();
        rx.drain_into(&mut out);
        assert_eq!(out.len(), MOVE_BURST);
        out.clear();
        rx.drain_into(&mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn menu_edge_reads_once() {
        let (tx, rx) = intent_queue(4);
        assert!(!rx.take_menu());
        tx.press_menu();
        tx.press_menu();
        assert!(rx.take_menu());
        assert!(!rx.take_menu());
    }

    #[test]
    fn push_after_receiver_dropped_is_silent() {
        let (tx, rx) = intent_queue(4);
        drop(rx);
        tx.push(StackMove::Left);
        tx.press_menu();
    }
}
