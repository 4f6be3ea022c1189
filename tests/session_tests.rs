use tui_tiles::core::{Effect, Session};
use tui_tiles::types::{
    InputEvent, KeyInput, LeaderboardEntry, Phase, Point, Reveal, NAME_MAX_LEN, PLAY_AGAIN_RECT,
    START_BOARD_SIZE, START_LIVES,
};

fn click(session: &mut Session, p: Point) -> Effect {
    session.handle(InputEvent::PointerDown(p))
}

fn key(session: &mut Session, k: KeyInput) -> Effect {
    session.handle(InputEvent::Key(k))
}

fn tick_while(session: &mut Session, phase: Phase) {
    for _ in 0..100_000 {
        if session.phase() != phase {
            return;
        }
        session.tick();
    }
    panic!("stuck in {phase:?}");
}

fn points(session: &Session, targets: bool) -> Vec<Point> {
    session
        .board()
        .cells()
        .iter()
        .filter(|c| c.is_target() == targets)
        .map(|c| c.rect.center())
        .collect()
}

fn start_playing(session: &mut Session) {
    assert_eq!(click(session, Point::new(300, 300)), Effect::Started);
    tick_while(session, Phase::Reveal);
    assert_eq!(session.phase(), Phase::Play);
}

fn lose_round(session: &mut Session) {
    for p in points(session, false).into_iter().take(START_LIVES as usize) {
        assert_eq!(click(session, p), Effect::Incorrect);
    }
    assert_eq!(session.phase(), Phase::RoundEnd);
    tick_while(session, Phase::RoundEnd);
    assert_eq!(session.phase(), Phase::GameOver);
}

#[test]
fn test_full_round_levels_up_with_lives_intact() {
    let mut s = Session::new(3);
    start_playing(&mut s);

    let wrong = points(&s, false)[0];
    assert_eq!(click(&mut s, wrong), Effect::Incorrect);
    assert_eq!(s.lives(), START_LIVES - 1);

    let targets = points(&s, true);
    let last = targets.len() - 1;
    for (i, p) in targets.into_iter().enumerate() {
        assert_eq!(click(&mut s, p), Effect::Correct);
        if i < last {
            assert_eq!(s.phase(), Phase::Play);
        }
    }
    assert_eq!(s.phase(), Phase::Reveal);
    assert_eq!(s.level(), 1);
    assert_eq!(s.lives(), START_LIVES);
}

#[test]
fn test_wrong_hit_costs_exactly_one_life() {
    let mut s = Session::new(8);
    start_playing(&mut s);
    let wrong = points(&s, false)[0];
    assert_eq!(click(&mut s, wrong), Effect::Incorrect);
    assert_eq!(click(&mut s, wrong), Effect::None);
    assert_eq!(click(&mut s, wrong), Effect::None);
    assert_eq!(s.lives(), START_LIVES - 1);
}

#[test]
fn test_gap_click_is_ignored() {
    let mut s = Session::new(8);
    start_playing(&mut s);
    assert_eq!(click(&mut s, Point::new(199, 10)), Effect::None);
    assert_eq!(s.lives(), START_LIVES);
}

#[test]
fn test_lives_exhausted_shows_missed_targets_then_game_over() {
    let mut s = Session::new(11);
    start_playing(&mut s);
    let found = points(&s, true)[0];
    click(&mut s, found);

    for p in points(&s, false).into_iter().take(START_LIVES as usize) {
        click(&mut s, p);
    }
    assert_eq!(s.phase(), Phase::RoundEnd);
    let snap = s.snapshot();
    let missed = snap
        .cells
        .iter()
        .filter(|c| c.reveal == Reveal::Missed)
        .count();
    assert_eq!(missed, snap.target_count - 1);
    assert_eq!(
        snap.cells.iter().filter(|c| c.reveal == Reveal::Found).count(),
        1
    );

    tick_while(&mut s, Phase::RoundEnd);
    assert_eq!(s.phase(), Phase::GameOver);
    assert_eq!(s.score(), 0);
    assert!(s.snapshot().cells.is_empty());
}

#[test]
fn test_restart_resets_progression() {
    let mut s = Session::with_progress(5, 7, 5);
    start_playing(&mut s);
    for p in points(&s, false).into_iter().take(2) {
        click(&mut s, p);
    }
    assert_eq!(s.lives(), 1);

    s.restart();
    assert_eq!(s.level(), 0);
    assert_eq!(s.board_size(), START_BOARD_SIZE);
    assert_eq!(s.lives(), START_LIVES);
    assert_eq!(s.phase(), Phase::Reveal);
}

#[test]
fn test_play_again_button_restarts() {
    let mut s = Session::with_progress(5, 7, 5);
    start_playing(&mut s);
    lose_round(&mut s);
    assert_eq!(s.score(), 7);

    assert_eq!(click(&mut s, Point::new(10, 10)), Effect::None);
    assert_eq!(click(&mut s, PLAY_AGAIN_RECT.center()), Effect::Restarted);
    assert_eq!(s.phase(), Phase::Reveal);
    assert_eq!((s.level(), s.board_size(), s.lives()), (0, 3, 3));
}

#[test]
fn test_name_entry_is_bounded() {
    let mut s = Session::new(1);
    start_playing(&mut s);
    lose_round(&mut s);

    assert_eq!(key(&mut s, KeyInput::Backspace), Effect::None);
    for ch in "abcdefghijklmnopqrst".chars() {
        key(&mut s, KeyInput::Char(ch));
    }
    assert_eq!(s.name(), "abcdefghijklmnop");
    assert_eq!(s.name().chars().count(), NAME_MAX_LEN);

    assert_eq!(key(&mut s, KeyInput::Backspace), Effect::NameEdited);
    assert_eq!(s.name(), "abcdefghijklmno");
    assert_eq!(key(&mut s, KeyInput::Char(':')), Effect::None);
}

#[test]
fn test_enter_submits_and_restarts() {
    let mut s = Session::with_progress(9, 4, 4);
    start_playing(&mut s);
    lose_round(&mut s);

    assert_eq!(key(&mut s, KeyInput::Enter), Effect::None);
    assert_eq!(s.phase(), Phase::GameOver);

    for ch in "ada".chars() {
        assert_eq!(key(&mut s, KeyInput::Char(ch)), Effect::NameEdited);
    }
    assert_eq!(
        key(&mut s, KeyInput::Enter),
        Effect::Submitted(LeaderboardEntry::new("ada", 4))
    );
    assert_eq!(s.phase(), Phase::Reveal);
    assert_eq!(s.level(), 0);
    assert!(s.name().is_empty());
}

#[test]
fn test_timer_display_never_negative() {
    let mut s = Session::with_progress(2, 0, 1);
    click(&mut s, Point::new(0, 0));
    // A one-cell board drains the whole budget in one tick.
    s.tick();
    assert!(s.time_left() >= 0.0);
    assert_eq!(s.phase(), Phase::Play);
}
