//! Terminal Tiles runner (default binary).
//!
//! Fixed-timestep loop: render, poll input until the next tick, tick the
//! session. Mouse clicks are mapped from terminal cells to the logical display
//! through the same transform the view draws with; on the home screen any
//! click starts the game.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use tui_tiles::config::AppConfig;
use tui_tiles::core::{Effect, GameSnapshot, Session};
use tui_tiles::input::{map_event, InputAction};
use tui_tiles::logging;
use tui_tiles::store::ScoreStore;
use tui_tiles::term::{
    AudioCues, FrameBuffer, GameView, RenderThrottle, TerminalBell, TerminalRenderer, Viewport,
};
use tui_tiles::types::{InputEvent, LeaderboardEntry, Phase, LEADERBOARD_TOP_N, TICK_MS};

/// Static screens are repainted at least this often.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("runner failed: {e:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = Session::from_entropy();
    let mut store = config.open_store();
    let mut cues = TerminalBell::new(config.bell);
    let mut leaders = store.top_n(LEADERBOARD_TOP_N);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render_snapshot(now_ms, &snap) {
            view.render_into(&snap, &leaders, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let ev = event::read()?;
            let input = match map_event(&ev, session.phase()) {
                InputAction::Quit => {
                    log::info!("quit at level {}", session.level());
                    return Ok(());
                }
                InputAction::Resize => {
                    term.invalidate();
                    throttle.reset();
                    None
                }
                InputAction::Pointer { col, row } => {
                    view.pointer_event(viewport, session.phase(), col, row)
                }
                InputAction::Key(key) => Some(InputEvent::Key(key)),
                InputAction::Ignore => None,
            };

            if let Some(input) = input {
                let effect = session.handle(input);
                apply_effect(&effect, store.as_mut(), &mut cues, &mut leaders);
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if session.tick() == Some(Phase::GameOver) {
                leaders = store.top_n(LEADERBOARD_TOP_N);
            }
        }
    }
}

fn apply_effect(
    effect: &Effect,
    store: &mut dyn ScoreStore,
    cues: &mut dyn AudioCues,
    leaders: &mut Vec<LeaderboardEntry>,
) {
    if let Some(cue) = effect.cue() {
        cues.play(cue);
    }
    if let Effect::Submitted(entry) = effect {
        if let Err(e) = store.append(&entry.name, entry.score) {
            log::error!("failed to record {entry}: {e}");
        }
        *leaders = store.top_n(LEADERBOARD_TOP_N);
    }
}
