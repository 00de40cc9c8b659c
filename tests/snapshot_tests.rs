//! Render snapshot tests - interpolated positions and fades

mod common;

use std::time::Duration;

use tcrush::game::cascade::CascadeEvent;
use tcrush::game::sequencer::{AnimationSequencer, Phase, PhaseKind, SequencerState, Step, Timings};
use tcrush::game::snapshot::Snapshot;
use tcrush::game::{Board, Game, Pos, Token};

use common::{board, config, TWO_MOVES};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_snapshot_at_rest() {
    let mut game = Game::with_board(&config(), board(&TWO_MOVES));
    game.cell_clicked(Pos::new(2, 2));

    let snapshot = game.snapshot();
    assert_eq!(snapshot.cells.len(), 64);
    assert_eq!(snapshot.selected, Some(Pos::new(2, 2)));
    assert_eq!(snapshot.hint, None);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.state, SequencerState::Idle);

    let cell = snapshot.cell_at(Pos::new(5, 3)).unwrap();
    assert_eq!((cell.x, cell.y, cell.opacity), (5.0, 3.0, 1.0));
}

#[test]
fn test_swap_glide_interpolates_both_cells() {
    let mut game = Game::with_board(&config(), board(&TWO_MOVES));
    game.cell_clicked(Pos::new(0, 2));
    game.cell_clicked(Pos::new(1, 2));
    game.update(Duration::from_millis(25));

    let snapshot = game.snapshot();
    let left = snapshot.cell_at(Pos::new(0, 2)).unwrap();
    let right = snapshot.cell_at(Pos::new(1, 2)).unwrap();
    assert!(close(left.x, 0.5) && close(left.y, 2.0));
    assert!(close(right.x, 0.5) && close(right.y, 2.0));
    assert_eq!(left.token, Token::Think);
    assert_eq!(right.token, Token::Smile);
}

#[test]
fn test_fade_out_then_fade_in() {
    let mut game = Game::with_board(&config(), board(&TWO_MOVES));
    game.cell_clicked(Pos::new(0, 2));
    game.cell_clicked(Pos::new(1, 2));
    game.update(Duration::from_millis(50));
    game.update(Duration::from_millis(30));

    // 30 of 75 ms into the fade-out
    let snapshot = game.snapshot();
    for y in 0..3 {
        let cell = snapshot.cell_at(Pos::new(0, y)).unwrap();
        assert!(close(cell.opacity, 0.6), "opacity was {}", cell.opacity);
    }
    assert!(close(snapshot.cell_at(Pos::new(1, 2)).unwrap().opacity, 1.0));

    game.update(Duration::from_millis(45));
    game.update(Duration::from_millis(25));

    // Half way through the fade-in the spawned cells are drawn but not yet on the board
    let snapshot = game.snapshot();
    assert_eq!(snapshot.cells.len(), 64);
    assert_eq!(game.board().get(Pos::new(0, 0)), None);
    for y in 0..3 {
        let cell = snapshot.cell_at(Pos::new(0, y)).unwrap();
        assert!(close(cell.opacity, 0.5), "opacity was {}", cell.opacity);
    }
}

#[test]
fn test_fall_interpolates_rows() {
    let mut board = Board::empty();
    board.set(Pos::new(0, 0), Some(Token::Heart));

    let mut sequencer = AnimationSequencer::new(Timings::default());
    sequencer.play(vec![Phase {
        kind: PhaseKind::Fall,
        duration: Duration::from_millis(100),
        steps: vec![Step::Cascade(CascadeEvent::Fell {
            from: Pos::new(0, 0),
            to: Pos::new(0, 2),
            token: Token::Heart,
        })],
        points: 0,
    }]);
    sequencer.tick(Duration::from_millis(50), &mut board);

    let snapshot = Snapshot::capture(&board, &sequencer, None, 0);
    let cell = snapshot.cell_at(Pos::new(0, 0)).unwrap();
    assert!(close(cell.y, 1.0));
    assert_eq!(cell.nearest_slot(), Pos::new(0, 1));

    sequencer.tick(Duration::from_millis(50), &mut board);
    assert_eq!(board.token_at(Pos::new(0, 2)), Some(Token::Heart));
    assert_eq!(board.get(Pos::new(0, 0)), None);
    assert_eq!(sequencer.state(), SequencerState::Idle);
}
