//! Session module - the round state machine
//!
//! A [`Session`] owns everything that changes during a game: the current
//! [`Phase`], progression (level and board size), lives, the timer, the board,
//! the name entry buffer and the random source. The presentation layer feeds it
//! input through [`Session::handle`] and advances it once per frame with
//! [`Session::tick`]; nothing else mutates it.
//!
//! # Transitions
//!
//! | From | To | Trigger |
//! |------|----|---------|
//! | Home | Reveal | any pointer-down |
//! | Reveal | Play | timer expired |
//! | Play | Reveal | every target found (level up) |
//! | Play | RoundEnd | lives exhausted |
//! | RoundEnd | GameOver | timer expired |
//! | GameOver | Reveal | Play Again control, or Enter with a name |

use crate::board::Board;
use crate::name::NameBuffer;
use crate::rng::TileRng;
use crate::snapshot::{CellView, GameSnapshot};
use crate::timer::Timer;
use crate::types::*;

/// Result of feeding one input event to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Input had no effect in the current phase.
    None,
    /// The first round started from the home screen.
    Started,
    /// An unfound target was clicked.
    Correct,
    /// A neutral cell was clicked and a life was lost.
    Incorrect,
    /// The name buffer changed.
    NameEdited,
    /// A name was committed; the entry should be persisted. The game restarted.
    Submitted(LeaderboardEntry),
    /// The Play Again control restarted the game.
    Restarted,
}

impl Effect {
    /// Audio cue to play for this effect, if any.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Effect::Correct => Some(Cue::Correct),
            Effect::Incorrect => Some(Cue::Incorrect),
            _ => None,
        }
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    level: u32,
    board_size: u32,
    lives: i32,
    timer: Timer,
    board: Board,
    name: NameBuffer,
    rng: TileRng,
}

impl Session {
    /// Create a new session on the home screen with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(TileRng::new(seed), 0, START_BOARD_SIZE)
    }

    /// Create a new session seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(TileRng::from_entropy(), 0, START_BOARD_SIZE)
    }

    /// Create a session whose first round starts at `level` on a
    /// `board_size` board. A restart still returns to level 0.
    pub fn with_progress(seed: u64, level: u32, board_size: u32) -> Self {
        Self::with_rng(TileRng::new(seed), level, board_size.max(1))
    }

    fn with_rng(rng: TileRng, level: u32, board_size: u32) -> Self {
        Self {
            phase: Phase::Home,
            level,
            board_size,
            lives: START_LIVES,
            timer: Timer::default(),
            board: Board::empty(),
            name: NameBuffer::new(),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Final score: the level reached.
    pub fn score(&self) -> u32 {
        self.level
    }

    pub fn board_size(&self) -> u32 {
        self.board_size
    }

    pub fn lives(&self) -> i32 {
        self.lives
    }

    /// Remaining time, never negative.
    pub fn time_left(&self) -> f64 {
        self.timer.display()
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn name(&self) -> String {
        self.name.as_string()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Advance one fixed frame.
    ///
    /// Returns the new phase when this tick caused a transition.
    pub fn tick(&mut self) -> Option<Phase> {
        match self.phase {
            Phase::Reveal => {
                self.timer.tick(self.board_size, self.level);
                if self.timer.expired() {
                    self.enter(Phase::Play);
                    return Some(Phase::Play);
                }
                None
            }
            Phase::RoundEnd => {
                self.timer.tick(self.board_size, self.level);
                if self.timer.expired() {
                    self.enter(Phase::GameOver);
                    return Some(Phase::GameOver);
                }
                None
            }
            // Catches boards with zero targets, which are complete before any click.
            Phase::Play => self.check_round_progress(),
            Phase::Home | Phase::GameOver => None,
        }
    }

    /// Apply one input event according to the current phase.
    pub fn handle(&mut self, event: InputEvent) -> Effect {
        match (self.phase, event) {
            (Phase::Home, InputEvent::PointerDown(_)) => {
                log::info!("game started at level {}", self.level);
                self.begin_round();
                Effect::Started
            }
            (Phase::Play, InputEvent::PointerDown(p)) => self.resolve_hit(p),
            (Phase::GameOver, InputEvent::PointerDown(p)) => {
                if PLAY_AGAIN_RECT.contains(p) {
                    self.restart();
                    Effect::Restarted
                } else {
                    Effect::None
                }
            }
            (Phase::GameOver, InputEvent::Key(key)) => self.resolve_key(key),
            _ => Effect::None,
        }
    }

    /// Reset progression and start a fresh round.
    pub fn restart(&mut self) {
        log::info!("restart after reaching level {}", self.level);
        self.level = 0;
        self.board_size = START_BOARD_SIZE;
        self.name.clear();
        self.begin_round();
    }

    /// What the player sees of cell `idx` in the current phase.
    pub fn cell_reveal(&self, idx: usize) -> Reveal {
        let Some(cell) = self.board.cell(idx) else {
            return Reveal::Hidden;
        };
        match (self.phase, cell.tag, cell.found) {
            (Phase::Reveal, TileTag::Target, _) => Reveal::Target,
            (Phase::Play | Phase::RoundEnd, TileTag::Target, true) => Reveal::Found,
            (Phase::Play | Phase::RoundEnd, TileTag::Wrong, _) => Reveal::Wrong,
            (Phase::RoundEnd, TileTag::Target, false) => Reveal::Missed,
            _ => Reveal::Hidden,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.level = self.level;
        out.board_size = self.board_size;
        out.lives = self.lives;
        out.score = self.score();
        out.time_left = self.timer.display();
        out.time_budget = self.timer.budget();
        out.name.clear();
        out.name.extend(self.name.chars());
        out.target_count = self.board.target_count();
        out.found_count = self.board.found_count();

        out.cells.clear();
        if matches!(self.phase, Phase::Home | Phase::GameOver) {
            return;
        }
        out.cells
            .extend(self.board.cells().iter().enumerate().map(|(i, c)| CellView {
                rect: c.rect,
                reveal: self.cell_reveal(i),
            }));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("phase {} -> {}", self.phase.as_str(), phase.as_str());
        self.phase = phase;
    }

    /// Generate a board for the current progression and show it.
    fn begin_round(&mut self) {
        self.board = Board::generate(self.level, self.board_size, DISPLAY_HEIGHT, &mut self.rng);
        self.lives = START_LIVES;
        self.timer.reset();
        self.enter(Phase::Reveal);
    }

    fn advance_round(&mut self) {
        self.level += 1;
        if self.level % 3 == 0 {
            self.board_size += 1;
        }
        log::info!(
            "level {} cleared, next board {}x{}",
            self.level - 1,
            self.board_size,
            self.board_size
        );
        self.begin_round();
    }

    fn check_round_progress(&mut self) -> Option<Phase> {
        if self.phase != Phase::Play {
            return None;
        }
        if self.board.all_found() {
            self.advance_round();
            return Some(Phase::Reveal);
        }
        if self.lives <= 0 {
            log::info!(
                "out of lives at level {} with {} targets missed",
                self.level,
                self.board.pending_count()
            );
            self.timer.reset();
            self.enter(Phase::RoundEnd);
            return Some(Phase::RoundEnd);
        }
        None
    }

    fn resolve_hit(&mut self, p: Point) -> Effect {
        let Some(cell) = self
            .board
            .cell_index_at(p)
            .and_then(|idx| self.board.cell_mut(idx))
        else {
            return Effect::None;
        };

        let effect = match (cell.tag, cell.found) {
            (TileTag::Target, false) => {
                cell.found = true;
                Effect::Correct
            }
            (TileTag::Neutral, _) => {
                cell.tag = TileTag::Wrong;
                self.lives -= 1;
                Effect::Incorrect
            }
            _ => Effect::None,
        };

        if effect != Effect::None {
            self.check_round_progress();
        }
        effect
    }

    fn resolve_key(&mut self, key: KeyInput) -> Effect {
        match key {
            KeyInput::Char(ch) => {
                if self.name.push(ch) {
                    Effect::NameEdited
                } else {
                    Effect::None
                }
            }
            KeyInput::Backspace => match self.name.pop() {
                Some(_) => Effect::NameEdited,
                None => Effect::None,
            },
            KeyInput::Enter => {
                if self.name.is_empty() {
                    return Effect::None;
                }
                let entry = LeaderboardEntry::new(self.name.as_string(), self.score());
                log::info!("submitting leaderboard entry {entry}");
                self.restart();
                Effect::Submitted(entry)
            }
        }
    }
}
