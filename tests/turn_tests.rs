//! Turn structure and command validation tests.

use sword_shield::core::{Action, Direction, GameConfig, Phase, Position, Side};
use sword_shield::error::GameError;
use sword_shield::game::{Event, Game, GameBuilder};
use sword_shield::pieces::{Letter, Rotation};
use sword_shield::zones::Location;

fn letter(c: char) -> Letter {
    Letter::new(c)
}

fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

// =============================================================================
// Phase Machine
// =============================================================================

/// Test a full round: create, act, pass, then the other side.
#[test]
fn test_full_round() {
    let mut game = Game::new();

    game.create('L', 0).unwrap();
    assert_eq!(game.phase(), Phase::Action);

    game.move_piece('L', Direction::Down).unwrap();
    assert_eq!(game.phase(), Phase::Final);

    let summary = game.pass().unwrap();
    let advanced = Event::TurnAdvanced {
        turn: 1,
        side: Side::B,
    };
    assert!(summary.events().contains(&advanced));
    assert_eq!(game.current_side(), Side::B);
    assert_eq!(game.phase(), Phase::Creation);
    assert!(game.unacted().is_empty());

    game.create('l', 0).unwrap();
    assert_eq!(game.location(letter('l')), Location::Board(Side::B.creation_square()));
    assert_eq!(game.unacted().len(), 1);
}

/// Test that passing in Creation goes to Action when pieces are on board.
#[test]
fn test_pass_in_creation_enters_action() {
    let mut game = GameBuilder::new()
        .place('A', pos(5, 5), Rotation::R0)
        .place('B', pos(5, 7), Rotation::R0)
        .build()
        .unwrap();

    game.pass().unwrap();

    assert_eq!(game.phase(), Phase::Action);
    let unacted: Vec<_> = game.unacted().iter().map(|l| l.as_char()).collect();
    assert_eq!(unacted, vec!['A', 'B']);
}

/// Test that the phase only ends once every piece has acted.
#[test]
fn test_every_piece_acts_once() {
    let mut game = GameBuilder::new()
        .place('A', pos(4, 4), Rotation::R0)
        .place('B', pos(6, 6), Rotation::R0)
        .place('a', pos(8, 2), Rotation::R0)
        .phase(Phase::Action)
        .build()
        .unwrap();

    game.move_piece('A', Direction::Down).unwrap();
    assert_eq!(game.phase(), Phase::Action);
    assert_eq!(game.move_piece('A', Direction::Down), Err(GameError::AlreadyActed(letter('A'))));
    assert_eq!(game.rotate('A', 90), Err(GameError::AlreadyActed(letter('A'))));

    game.rotate('B', 180).unwrap();
    assert_eq!(game.phase(), Phase::Final);
}

/// Test that the Final phase can be skipped by configuration.
#[test]
fn test_without_final_phase_turn_advances() {
    let config = GameConfig::new().with_turn_end_phase(false);
    let mut game = Game::with_config(config);
    game.create('L', 0).unwrap();

    let summary = game.rotate('L', 90).unwrap();

    assert!(summary.turn_advanced());
    assert_eq!(game.current_side(), Side::B);
    assert_eq!(game.phase(), Phase::Creation);
}

/// Test that Final accepts only pass and undo.
#[test]
fn test_final_phase_rejects_actions() {
    let mut game = Game::new();
    game.create('L', 0).unwrap();
    game.move_piece('L', Direction::Down).unwrap();

    assert_eq!(
        game.rotate('L', 90),
        Err(GameError::WrongPhase {
            action: "rotate",
            phase: Phase::Final,
        })
    );
    assert_eq!(
        game.create('M', 0),
        Err(GameError::WrongPhase {
            action: "create",
            phase: Phase::Final,
        })
    );
    assert!(game.undo().is_ok());
}

/// Test that moves are rejected during Creation.
#[test]
fn test_move_during_creation() {
    let mut game = Game::new();
    assert_eq!(
        game.move_piece('L', Direction::Up),
        Err(GameError::WrongPhase {
            action: "move",
            phase: Phase::Creation,
        })
    );
}

// =============================================================================
// Move Validation
// =============================================================================

/// Test the scenario of moving a fresh piece twice in one turn.
#[test]
fn test_second_move_fails_and_board_is_unchanged() {
    let mut game = Game::new();
    game.create('L', 0).unwrap();
    game.move_piece('L', Direction::Up).unwrap();
    assert_eq!(game.location(letter('L')), Location::Board(pos(1, 2)));

    let before = game.state().clone();
    assert!(game.move_piece('L', Direction::Up).is_err());
    assert_eq!(game.state(), &before);
}

/// Test that a piece cannot step onto its own Home or a blank.
#[test]
fn test_own_home_and_blank_are_out_of_play() {
    let game = GameBuilder::new()
        .place('L', pos(1, 2), Rotation::R0)
        .place('S', pos(2, 0), Rotation::R0)
        .phase(Phase::Action)
        .build()
        .unwrap();

    let home = Action::Move {
        letter: letter('L'),
        direction: Direction::Left,
    };
    let blank = Action::Move {
        letter: letter('S'),
        direction: Direction::Up,
    };
    let edge = Action::Move {
        letter: letter('S'),
        direction: Direction::Left,
    };
    assert_eq!(game.validate(&home), Err(GameError::DestinationOutOfPlay(pos(1, 1))));
    assert_eq!(game.validate(&blank), Err(GameError::DestinationOutOfPlay(pos(1, 0))));
    assert_eq!(game.validate(&edge), Err(GameError::DestinationOutOfPlay(pos(2, -1))));
}

/// Test ownership and occupancy checks.
#[test]
fn test_move_ownership_and_occupancy() {
    let mut game = GameBuilder::new()
        .place('T', pos(4, 4), Rotation::R0)
        .place('X', pos(4, 5), Rotation::R0)
        .place('t', pos(6, 6), Rotation::R0)
        .phase(Phase::Action)
        .build()
        .unwrap();

    assert_eq!(
        game.move_piece('T', Direction::Right),
        Err(GameError::DestinationOccupied(pos(4, 5)))
    );
    assert_eq!(game.move_piece('t', Direction::Up), Err(GameError::NotYourPiece(letter('t'))));
    assert_eq!(game.move_piece('M', Direction::Up), Err(GameError::PieceNotOnBoard(letter('M'))));
    assert_eq!(game.move_piece('#', Direction::Up), Err(GameError::InvalidLetter('#')));
    assert_eq!(game.rotate('T', 30), Err(GameError::InvalidRotation(30)));
}

/// Test that stepping onto the opposing Home strikes it.
#[test]
fn test_move_into_opposing_home_wins() {
    // S carries nothing at all; the strike does not need a sword.
    let mut game = GameBuilder::new()
        .place('S', pos(7, 8), Rotation::R0)
        .phase(Phase::Action)
        .build()
        .unwrap();

    let summary = game.move_piece('S', Direction::Down).unwrap();

    assert!(summary.events().contains(&Event::Struck {
        letter: letter('S'),
        home: Side::B,
    }));
    assert_eq!(summary.winner(), Some(Side::A));
    assert_eq!(game.location(letter('S')), Location::Board(pos(7, 8)));
    assert!(game.is_over());
}

/// Test that nothing is accepted once the game is over.
#[test]
fn test_game_over_rejects_everything() {
    let mut game = GameBuilder::new()
        .place('S', pos(7, 8), Rotation::R0)
        .place('A', pos(4, 4), Rotation::R0)
        .phase(Phase::Action)
        .build()
        .unwrap();
    game.move_piece('S', Direction::Down).unwrap();

    assert_eq!(game.move_piece('A', Direction::Down), Err(GameError::GameOver));
    assert_eq!(game.create('C', 0), Err(GameError::GameOver));
    assert_eq!(game.pass(), Err(GameError::GameOver));
    assert_eq!(game.undo(), Err(GameError::GameOver));
    assert!(!game.can_undo());
    assert!(game.legal_actions().is_empty());
}

// =============================================================================
// Side B
// =============================================================================

/// Test that Side B plays from its own corner toward Side A.
#[test]
fn test_side_b_strikes_side_a() {
    // l is L turned half way round: its sword that pointed right now points left.
    let mut game = GameBuilder::new()
        .side_to_move(Side::B)
        .place('l', pos(1, 3), Rotation::R0)
        .phase(Phase::Action)
        .build()
        .unwrap();

    let summary = game.move_piece('l', Direction::Left).unwrap();

    assert_eq!(summary.winner(), Some(Side::B));
    assert_eq!(game.winner(), Some(Side::B));
}

/// Test that creating a piece of the other side is rejected.
#[test]
fn test_side_b_cannot_create_side_a_pieces() {
    let mut game = Game::new();
    game.pass().unwrap();
    assert_eq!(game.current_side(), Side::B);

    assert_eq!(game.create('L', 0), Err(GameError::NotInHand(letter('L'))));
    assert!(game.create('l', 180).is_ok());
    assert_eq!(game.piece(letter('l')).rotation(), Rotation::R180);
}

// =============================================================================
// Legal Actions and Replay
// =============================================================================

/// Test that every enumerated action is accepted.
#[test]
fn test_legal_actions_are_accepted() {
    let mut game = GameBuilder::new()
        .place('L', pos(4, 4), Rotation::R0)
        .place('W', pos(6, 3), Rotation::R0)
        .place('m', pos(4, 6), Rotation::R0)
        .phase(Phase::Action)
        .build()
        .unwrap();

    for action in game.legal_actions() {
        let mut copy = game.clone();
        assert!(copy.apply(&action).is_ok(), "{action} was enumerated but rejected");
    }
    assert!(game.apply(&Action::Pass).is_ok());
}

/// Test that replaying the recorded history reproduces a match.
#[test]
fn test_replay_from_history() {
    let mut game = Game::new();
    game.create('R', 0).unwrap();
    game.move_piece('R', Direction::Down).unwrap();
    game.pass().unwrap();
    game.create('s', 90).unwrap();
    game.pass().unwrap();
    game.pass().unwrap();
    game.pass().unwrap();

    let actions: Vec<Action> = game.history().iter().map(|r| r.action).collect();
    let replayed = Game::replay(GameConfig::default(), &actions).unwrap();

    assert_eq!(replayed.state(), game.state());
}

/// Test that a history fails to replay at the first rejected action.
#[test]
fn test_replay_stops_at_illegal_action() {
    let actions = [
        Action::Create {
            letter: letter('L'),
            rotation: Rotation::R0,
        },
        Action::Create {
            letter: letter('M'),
            rotation: Rotation::R0,
        },
    ];

    let result = Game::replay(GameConfig::default(), &actions);

    assert!(matches!(result, Err(GameError::WrongPhase { action: "create", .. })));
}

/// Test the rendered board.
#[test]
fn test_board_view_shows_pieces() {
    let mut game = Game::new();
    game.create('L', 0).unwrap();

    let text = game.board_view().to_string();
    let lines: Vec<&str> = text.lines().collect();

    // L sits on (2,2): rows 6..9, columns 6..9 of the text.
    assert_eq!(&lines[6][6..9], " | ");
    assert_eq!(&lines[7][6..9], "-L-");
    assert_eq!(&lines[8][6..9], " # ");
}
