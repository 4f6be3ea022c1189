//! Audio cues.
//!
//! The terminal bell (BEL) is the only sound a terminal can make, and it has a
//! single fixed tone, so it cannot give correct and wrong clicks two distinct
//! sounds. Wrong clicks ring it. Correct clicks make no sound; they show up
//! only visually, as the tile turning white.

use std::io::{self, Write};

use crate::types::Cue;

const BEL: &[u8] = b"\x07";

/// Receiver of fire-and-forget gameplay cues.
pub trait AudioCues {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell on [`Cue::Incorrect`].
#[derive(Debug, Clone)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Bytes written to the terminal for `cue`, if any.
    pub fn signal(&self, cue: Cue) -> Option<&'static [u8]> {
        match cue {
            Cue::Incorrect if self.enabled => Some(BEL),
            Cue::Incorrect | Cue::Correct => None,
        }
    }
}

impl AudioCues for TerminalBell {
    fn play(&mut self, cue: Cue) {
        log::trace!("cue {cue:?}");
        let Some(bytes) = self.signal(cue) else {
            return;
        };
        let mut out = io::stdout();
        if let Err(e) = out.write_all(bytes).and_then(|_| out.flush()) {
            log::warn!("terminal bell failed: {e}");
        }
    }
}

/// Discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentCues;

impl AudioCues for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wrong_clicks_ring() {
        let bell = TerminalBell::new(true);
        assert_eq!(bell.signal(Cue::Incorrect), Some(BEL));
        assert_eq!(bell.signal(Cue::Correct), None);
    }

    #[test]
    fn disabled_bell_is_silent() {
        let bell = TerminalBell::new(false);
        assert!(!bell.enabled());
        assert_eq!(bell.signal(Cue::Incorrect), None);
        assert_eq!(bell.signal(Cue::Correct), None);
    }
}
