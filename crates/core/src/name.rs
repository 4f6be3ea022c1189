//! Bounded name entry buffer for the game over screen.

use arrayvec::ArrayVec;

use crate::types::NAME_MAX_LEN;

/// Up to [`NAME_MAX_LEN`] characters typed by the player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameBuffer {
    chars: ArrayVec<char, NAME_MAX_LEN>,
}

impl NameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character. Returns false when the character was rejected.
    ///
    /// Control characters and `:` (the leaderboard record separator) are never
    /// accepted. Input past the capacity is dropped.
    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_control() || ch == ':' {
            return false;
        }
        self.chars.try_push(ch).is_ok()
    }

    /// Remove the last character. No-op when empty.
    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}
