//! Tests for the session state machine across several games.

use std::time::Duration;

use noughts::{Command, Flow, GameConfig, Mode, Scene, Session, SoundCue};
use noughts_engine::{Difficulty, GameStatus, Mark, MoveSelector, Position};

fn play(session: &mut Session, cells: &[u8]) {
    for &n in cells {
        session.apply(Command::PlayCell(Position::from_number(n).unwrap()));
    }
}

fn pvp() -> Session {
    let mut session = Session::new(MoveSelector::new(Mark::O, Difficulty::Medium).with_seed(1));
    session.apply(Command::ChooseMode(Mode::VsHuman));
    session
}

#[test]
fn test_streaks_across_games() {
    let mut session = pvp();

    // X wins twice, then O wins.
    play(&mut session, &[1, 4, 2, 5, 3]);
    session.apply(Command::Restart);
    play(&mut session, &[7, 1, 8, 2, 9]);
    session.apply(Command::Restart);
    play(&mut session, &[1, 4, 2, 5, 9, 6]);
    assert_eq!(session.game().status(), GameStatus::Won(Mark::O));
    assert_eq!(session.banner(), Some("O WINS!"));

    let stats = session.stats();
    assert_eq!(*stats.wins(), 2);
    assert_eq!(*stats.losses(), 1);
    assert_eq!(*stats.current_streak(), 0);
    assert_eq!(*stats.best_streak(), 2);
    assert!(stats.best_time().is_some());
}

#[test]
fn test_draw_is_recorded_once() {
    let mut session = pvp();
    // X O X / X O O / O X X
    play(&mut session, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);
    assert_eq!(session.game().status(), GameStatus::Draw);
    assert_eq!(session.banner(), Some("DRAW!"));

    // Further clicks do nothing and do not count again.
    play(&mut session, &[1, 2]);
    assert_eq!(*session.stats().draws(), 1);
    assert_eq!(session.stats().games(), 1);

    let cues = session.drain_cues();
    assert_eq!(cues.last(), Some(&SoundCue::Draw));
}

#[test]
fn test_elapsed_freezes_when_game_ends() {
    let mut session = pvp();
    play(&mut session, &[1, 4, 2, 5, 3]);
    let first = session.elapsed();
    std::thread::sleep(Duration::from_millis(5));
    assert_eq!(session.elapsed(), first);
}

#[test]
fn test_difficulty_persists_across_back() {
    let mut session = Session::new(MoveSelector::new(Mark::O, Difficulty::Medium).with_seed(2));
    session.apply(Command::ChooseMode(Mode::VsComputer));
    session.apply(Command::ChooseDifficulty(Difficulty::Easy));
    session.apply(Command::Back);
    assert_eq!(*session.scene(), Scene::Home);
    assert_eq!(*session.difficulty(), Difficulty::Easy);

    session.apply(Command::ChooseMode(Mode::VsComputer));
    assert_eq!(*session.scene(), Scene::Difficulty);
    assert_eq!(session.apply(Command::Quit), Flow::Quit);
}

#[test]
fn test_from_config_uses_configured_search() {
    let config = GameConfig::from_toml(
        r#"
        difficulty = "impossible"
        search = "minimax"
        seed = 3
        "#,
    )
    .unwrap();
    let mut session = Session::from_config(&config);
    assert_eq!(*session.difficulty(), Difficulty::Impossible);

    session.apply(Command::ChooseMode(Mode::VsComputer));
    session.apply(Command::ChooseDifficulty(Difficulty::Impossible));
    play(&mut session, &[1]);
    let decision = session.take_ai_turn().unwrap();
    // Only the center holds against a corner opening.
    assert_eq!(decision.position, Position::Center);
    assert!(decision.nodes > 0);
    assert_eq!(session.last_decision().map(|d| d.position), Some(Position::Center));
}

#[test]
fn test_pvp_second_player_clicks() {
    let mut session = pvp();
    play(&mut session, &[5]);
    assert!(!session.ai_pending());
    play(&mut session, &[1]);
    assert_eq!(session.game().board().count(Mark::O), 1);
    assert_eq!(session.take_ai_turn(), None);
}
