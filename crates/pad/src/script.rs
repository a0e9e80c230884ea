//! Deterministic pad for tests and demos.

use joycab_types::PadState;

use crate::Gamepad;

/// Replays a fixed sequence of snapshots, one per sample, then holds the
/// final snapshot forever. An empty script holds idle.
///
/// Because the watcher takes exactly one sample per poll cycle, each
/// scripted frame is observed for exactly one cycle, which makes edge
/// tests deterministic.
#[derive(Debug, Clone)]
pub struct ScriptedPad {
    frames: Vec<PadState>,
    cursor: usize,
}

impl ScriptedPad {
    pub fn new(frames: Vec<PadState>) -> Self {
        ScriptedPad { frames, cursor: 0 }
    }

    /// Number of frames not yet sampled.
    pub fn remaining(&self) -> usize {
        self.frames.len().saturating_sub(self.cursor)
    }
}

impl Gamepad for ScriptedPad {
    fn sample(&mut self) -> PadState {
        match self.frames.get(self.cursor) {
            Some(frame) => {
                self.cursor += 1;
                *frame
            }
            None => self.frames.last().copied().unwrap_or_else(PadState::idle),
        }
    }
}
