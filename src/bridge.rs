//! Wires pad edges into stacking-game intents.
//!
//! [`StackerListener`] runs on the watcher thread; it translates stick-1
//! entries into [`StackMove`]s and the menu button into the menu edge
//! flag, all through the non-blocking [`IntentTx`]. The scheduler thread
//! drains the other end once per tick. Every other pad event is ignored.

use joycab_core::IntentTx;
use joycab_types::StackMove;
use joycab_watch::PadListener;

/// Stick-1 bindings: left/right shift, up rotates, down soft-drops.
/// Menu raises the pause/restart edge flag.
pub struct StackerListener {
    intents: IntentTx,
}

impl StackerListener {
    pub fn new(intents: IntentTx) -> Self {
        StackerListener { intents }
    }
}

impl PadListener for StackerListener {
    fn on_stick1_left(&mut self) {
        self.intents.push(StackMove::Left);
    }

    fn on_stick1_right(&mut self) {
        self.intents.push(StackMove::Right);
    }

    fn on_stick1_up(&mut self) {
        self.intents.push(StackMove::RotateCw);
    }

    fn on_stick1_down(&mut self) {
        self.intents.push(StackMove::Down);
    }

    fn on_button_menu_pressed(&mut self) {
        self.intents.press_menu();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use arrayvec::ArrayVec;
    use joycab_core::{intent_queue, MOVE_BURST};

    fn drained(rx: &joycab_core::IntentRx) -> Vec<StackMove> {
        let mut moves: ArrayVec<StackMove, MOVE_BURST> = ArrayVec::new();
        rx.drain_into(&mut moves);
        moves.to_vec()
    }

    #[test]
    fn stick1_entries_become_moves_in_order() {
        let (tx, rx) = intent_queue(8);
        let mut listener = StackerListener::new(tx);

        listener.on_stick1_left();
        listener.on_stick1_right();
        listener.on_stick1_up();
        listener.on_stick1_down();

        assert_eq!(
            drained(&rx),
            vec![
                StackMove::Left,
                StackMove::Right,
                StackMove::RotateCw,
                StackMove::Down,
            ]
        );
    }

    #[test]
    fn menu_press_raises_the_edge_flag_once() {
        let (tx, rx) = intent_queue(8);
        let mut listener = StackerListener::new(tx);

        assert!(!rx.take_menu());
        listener.on_button_menu_pressed();
        assert!(rx.take_menu());
        assert!(!rx.take_menu());
    }

    #[test]
    fn unbound_events_do_nothing() {
        let (tx, rx) = intent_queue(8);
        let mut listener = StackerListener::new(tx);

        listener.on_button_a1_pressed();
        listener.on_button_menu_released();
        listener.on_stick2_left();
        listener.on_stick2_up();

        assert!(drained(&rx).is_empty());
        assert!(!rx.take_menu());
    }
}
