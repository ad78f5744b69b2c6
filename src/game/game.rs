//! The game: phase machine, command execution and the reaction driver.

use im::{OrdSet, Vector};
use smallvec::SmallVec;
use tracing::{debug, info, instrument, trace};

use super::summary::{ChangeSummary, Event};
use crate::board::{Board, BoardView, Square};
use crate::core::{
    Action, ActionRecord, Direction, EdgePush, GameConfig, GameState, Phase, Player, Position, Side,
    Verb,
};
use crate::error::GameError;
use crate::history::{Command, CommandKind, CommandLog, Edit, Transaction};
use crate::pieces::{Letter, PlayerPiece, Rotation};
use crate::reactions::{Reaction, ReactionResolver};
use crate::zones::{Cemetery, Location};

/// A match in progress.
///
/// Every command validates first and only then mutates, so a rejected
/// command leaves the game untouched. Creates, moves and rotates are
/// recorded as undoable commands until the turn advances.
///
/// ## Example
///
/// ```
/// use sword_shield::core::{Direction, Phase, Position};
/// use sword_shield::game::Game;
///
/// let mut game = Game::new();
/// game.create('L', 0).unwrap();
/// assert_eq!(game.phase(), Phase::Action);
///
/// game.move_piece('L', Direction::Down).unwrap();
/// assert_eq!(game.piece_at(Position::new(3, 2)).map(|l| l.as_char()), Some('L'));
///
/// game.undo().unwrap();
/// assert_eq!(game.piece_at(Position::new(2, 2)).map(|l| l.as_char()), Some('L'));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    log: CommandLog,
    history: Vector<ActionRecord>,
}

impl Game {
    /// A fresh match under the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_state(config, GameState::new())
    }

    /// Continue a match from a saved state.
    ///
    /// The undo log and the action history start empty. Fails if the state
    /// breaks the piece bookkeeping invariants.
    pub fn resume(config: GameConfig, state: GameState) -> Result<Self, GameError> {
        state.check_invariants().map_err(GameError::Snapshot)?;
        Ok(Self::from_state(config, state))
    }

    pub(crate) fn from_state(config: GameConfig, state: GameState) -> Self {
        Self {
            config,
            state,
            log: CommandLog::new(),
            history: Vector::new(),
        }
    }

    /// Play `actions` in order against a fresh match.
    ///
    /// Stops at the first action that fails and returns its error.
    pub fn replay(config: GameConfig, actions: &[Action]) -> Result<Self, GameError> {
        let mut game = Self::with_config(config);
        for action in actions {
            game.apply(action)?;
        }
        Ok(game)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The complete state, for snapshots and structural comparison.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn current_side(&self) -> Side {
        self.state.current_side()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.state.turn
    }

    pub fn square_at(&self, pos: Position) -> Result<Square, GameError> {
        self.state.board.square_at(pos)
    }

    /// Piece standing on `pos`, if any. Off-board positions hold nothing.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Letter> {
        self.state.board.square_at(pos).ok().and_then(Square::piece)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Text rendering of the board.
    #[must_use]
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(&self.state.board, &self.state.pieces)
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.state.players[side]
    }

    #[must_use]
    pub fn piece(&self, letter: Letter) -> &PlayerPiece {
        self.state.pieces.get(letter)
    }

    #[must_use]
    pub fn location(&self, letter: Letter) -> Location {
        self.state.location(letter)
    }

    /// Pieces of the side to move that may still act this turn.
    #[must_use]
    pub fn unacted(&self) -> &OrdSet<Letter> {
        &self.state.unacted
    }

    #[must_use]
    pub fn cemetery(&self) -> &Cemetery {
        &self.state.cemetery
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.winner.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.state.winner
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.is_over() && !self.log.is_empty()
    }

    /// Every successful action so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Front-end commands ===

    /// Create the piece `letter` on the creation square, turned by
    /// `rotation` degrees.
    #[instrument(skip(self), fields(side = %self.current_side()))]
    pub fn create(&mut self, letter: char, rotation: u16) -> Result<ChangeSummary, GameError> {
        self.check_phase(Verb::Create)?;
        let letter = Letter::try_from(letter)?;
        let rotation = Rotation::try_from(rotation)?;
        self.apply(&Action::Create { letter, rotation })
    }

    #[instrument(skip(self), fields(side = %self.current_side()))]
    pub fn move_piece(
        &mut self,
        letter: char,
        direction: Direction,
    ) -> Result<ChangeSummary, GameError> {
        self.check_phase(Verb::Move)?;
        let letter = Letter::try_from(letter)?;
        self.apply(&Action::Move { letter, direction })
    }

    /// Turn an on-board piece in place by `rotation` degrees.
    #[instrument(skip(self), fields(side = %self.current_side()))]
    pub fn rotate(&mut self, letter: char, rotation: u16) -> Result<ChangeSummary, GameError> {
        self.check_phase(Verb::Rotate)?;
        let letter = Letter::try_from(letter)?;
        let rotation = Rotation::try_from(rotation)?;
        self.apply(&Action::Rotate { letter, rotation })
    }

    #[instrument(skip(self), fields(side = %self.current_side()))]
    pub fn pass(&mut self) -> Result<ChangeSummary, GameError> {
        self.apply(&Action::Pass)
    }

    /// Revert the most recent create, move or rotate of this turn.
    #[instrument(skip(self), fields(side = %self.current_side()))]
    pub fn undo(&mut self) -> Result<ChangeSummary, GameError> {
        self.apply(&Action::Undo)
    }

    // === Validation ===

    fn check_phase(&self, verb: Verb) -> Result<(), GameError> {
        let phase = self.state.phase;
        if phase == Phase::GameOver || self.is_over() {
            return Err(GameError::GameOver);
        }
        if verb.allowed_in(phase) {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                action: verb.as_str(),
                phase,
            })
        }
    }

    /// Check `action` against the current state without changing anything.
    pub fn validate(&self, action: &Action) -> Result<(), GameError> {
        self.check_phase(action.verb())?;
        match *action {
            Action::Create { letter, .. } => self.validate_create(letter),
            Action::Move { letter, direction } => {
                let from = self.validate_actor(letter)?;
                self.validate_destination(from.step(direction))
            }
            Action::Rotate { letter, .. } => self.validate_actor(letter).map(|_| ()),
            Action::Pass => Ok(()),
            Action::Undo => {
                if self.log.is_empty() {
                    Err(GameError::NoUndoAvailable)
                } else {
                    Ok(())
                }
            }
        }
    }

    fn validate_create(&self, letter: Letter) -> Result<(), GameError> {
        let side = self.current_side();
        if letter.side() != side || !self.state.players[side].hand.contains(letter) {
            return Err(GameError::NotInHand(letter));
        }
        let square = self.state.players[side].creation_square;
        if self.state.board.square_at(square)? != Square::Empty {
            return Err(GameError::CreationSquareOccupied(square));
        }
        Ok(())
    }

    /// Check that `letter` may act this turn and return where it stands.
    fn validate_actor(&self, letter: Letter) -> Result<Position, GameError> {
        let pos = self.state.pieces.get(letter).position.ok_or(GameError::PieceNotOnBoard(letter))?;
        if letter.side() != self.current_side() {
            return Err(GameError::NotYourPiece(letter));
        }
        if !self.state.unacted.contains(&letter) {
            return Err(GameError::AlreadyActed(letter));
        }
        Ok(pos)
    }

    fn validate_destination(&self, to: Position) -> Result<(), GameError> {
        let board = &self.state.board;
        if self.is_strike(to) {
            return Ok(());
        }
        if board.is_out_of_play(to) {
            return Err(GameError::DestinationOutOfPlay(to));
        }
        if board.square_at(to)? != Square::Empty {
            return Err(GameError::DestinationOccupied(to));
        }
        Ok(())
    }

    fn is_strike(&self, to: Position) -> bool {
        self.state.board.square_at(to) == Ok(Square::Home(self.current_side().opponent()))
    }

    // === Execution ===

    /// Validate and run `action`.
    pub fn apply(&mut self, action: &Action) -> Result<ChangeSummary, GameError> {
        if let Err(err) = self.validate(action) {
            trace!(%action, %err, "action rejected");
            return Err(err);
        }

        let side = self.current_side();
        let turn = self.state.turn;
        let summary = match *action {
            Action::Create { letter, rotation } => self.run_create(letter, rotation),
            Action::Move { letter, direction } => self.run_move(letter, direction),
            Action::Rotate { letter, rotation } => self.run_rotate(letter, rotation),
            Action::Pass => self.run_pass(),
            Action::Undo => self.run_undo(),
        };

        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(side, *action, turn, sequence));
        debug!(%action, phase = %self.state.phase, turn = self.state.turn, "action applied");
        Ok(summary)
    }

    fn run_create(&mut self, letter: Letter, rotation: Rotation) -> ChangeSummary {
        let side = self.current_side();
        let turn = self.state.turn;
        let pos = self.state.players[side].creation_square;

        let mut tx = Transaction::new(&mut self.state);
        tx.update_player(side, |player| {
            player.deploy(letter);
        });
        tx.update_piece(letter, |piece| {
            piece.rotate(rotation);
            piece.position = Some(pos);
        });
        tx.set_square(pos, Square::Piece(letter));
        tx.emit(Event::Created { letter, pos, rotation });

        resolve_reactions(&self.config, &mut tx, letter);
        if tx.state().winner.is_none() {
            enter_action(&mut tx);
        }

        let (edits, events) = tx.finish();
        self.commit(CommandKind::Create { letter, rotation }, side, turn, edits, events)
    }

    fn run_move(&mut self, letter: Letter, direction: Direction) -> ChangeSummary {
        let side = self.current_side();
        let turn = self.state.turn;
        let from = self.state.pieces.get(letter).position;
        let to = from.map(|pos| pos.step(direction));
        let strike = to.is_some_and(|to| self.is_strike(to));

        let mut tx = Transaction::new(&mut self.state);
        if strike {
            tx.emit(Event::Struck {
                letter,
                home: side.opponent(),
            });
            declare_winner(&mut tx, side);
        } else if let (Some(from), Some(to)) = (from, to) {
            tx.set_square(from, Square::Empty);
            tx.set_square(to, Square::Piece(letter));
            tx.update_piece(letter, |piece| piece.position = Some(to));
            tx.emit(Event::Moved { letter, from, to });
            finish_action(&self.config, &mut tx, letter);
        }

        let (edits, events) = tx.finish();
        self.commit(CommandKind::Move { letter, direction }, side, turn, edits, events)
    }

    fn run_rotate(&mut self, letter: Letter, rotation: Rotation) -> ChangeSummary {
        let side = self.current_side();
        let turn = self.state.turn;

        let mut tx = Transaction::new(&mut self.state);
        tx.update_piece(letter, |piece| piece.rotate(rotation));
        tx.emit(Event::Rotated { letter, rotation });
        finish_action(&self.config, &mut tx, letter);

        let (edits, events) = tx.finish();
        self.commit(CommandKind::Rotate { letter, rotation }, side, turn, edits, events)
    }

    fn run_pass(&mut self) -> ChangeSummary {
        let mut tx = Transaction::new(&mut self.state);
        match tx.state().phase {
            Phase::Creation => enter_action(&mut tx),
            Phase::Action | Phase::Final => advance_turn(&mut tx),
            Phase::GameOver => {}
        }

        let (_, events) = tx.finish();
        if events.iter().any(|e| matches!(e, Event::TurnAdvanced { .. })) {
            self.log.clear();
        }
        ChangeSummary::new(Action::Pass, events)
    }

    fn run_undo(&mut self) -> ChangeSummary {
        let mut events = SmallVec::new();
        if let Some(command) = self.log.pop() {
            let from = self.state.phase;
            let kind = command.kind;
            command.revert(&mut self.state);
            debug!(?kind, "command undone");

            events.push(Event::Undone(kind));
            let to = self.state.phase;
            if from != to {
                events.push(Event::PhaseChanged { from, to });
            }
        }
        ChangeSummary::new(Action::Undo, events)
    }

    /// Keep a finished transaction as an undoable command, unless the turn
    /// moved on while it ran.
    fn commit(
        &mut self,
        kind: CommandKind,
        side: Side,
        turn: u32,
        edits: Vec<Edit>,
        events: SmallVec<[Event; 4]>,
    ) -> ChangeSummary {
        if events.iter().any(|e| matches!(e, Event::TurnAdvanced { .. })) {
            self.log.clear();
        } else {
            self.log.push(Command::new(kind, side, turn, edits));
        }
        ChangeSummary::new(kind.into(), events)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// === Phase transitions ===

/// Enter `Action` with every on-board piece of the side to move unacted.
/// A side with nothing on the board has nothing to do, so its turn ends.
fn enter_action(tx: &mut Transaction<'_>) {
    let side = tx.state().current_side();
    let on_board = tx.state().players[side].on_board.clone();

    tx.set_phase(Phase::Action);
    if on_board.is_empty() {
        advance_turn(tx);
    } else {
        tx.update_unacted(|unacted| *unacted = on_board);
    }
}

fn advance_turn(tx: &mut Transaction<'_>) {
    let turn = tx.state().turn + 1;
    let side = Side::from_turn(turn);

    tx.set_turn(turn);
    if !tx.state().unacted.is_empty() {
        tx.update_unacted(|unacted| *unacted = OrdSet::new());
    }
    tx.set_phase(Phase::Creation);
    tx.emit(Event::TurnAdvanced { turn, side });
    debug!(turn, %side, "turn advanced");
}

/// Bookkeeping after a piece has moved or rotated: mark it acted, resolve
/// its reactions and end the action phase once nobody is left to act.
fn finish_action(config: &GameConfig, tx: &mut Transaction<'_>, letter: Letter) {
    tx.update_unacted(|unacted| {
        unacted.remove(&letter);
    });
    resolve_reactions(config, tx, letter);

    if tx.state().winner.is_some() || !tx.state().unacted.is_empty() {
        return;
    }
    if config.turn_end_phase {
        tx.set_phase(Phase::Final);
    } else {
        advance_turn(tx);
    }
}

fn declare_winner(tx: &mut Transaction<'_>, side: Side) {
    tx.set_winner(side);
    tx.emit(Event::Won(side));
    tx.set_phase(Phase::GameOver);
    info!(%side, "game won");
}

// === Reaction driver ===

/// Resolve `letter` against its neighbours in the configured order.
///
/// Stops once the piece has left its square or the game is decided.
/// Pieces that get pushed do not react at their new square.
fn resolve_reactions(config: &GameConfig, tx: &mut Transaction<'_>, letter: Letter) {
    let Some(origin) = tx.state().pieces.get(letter).position else {
        return;
    };

    for (direction, target) in origin.neighbours(config.reaction_order) {
        if tx.state().winner.is_some() || tx.state().pieces.get(letter).position != Some(origin) {
            break;
        }
        let Ok(neighbour) = tx.state().board.square_at(target) else {
            continue;
        };

        let reaction = ReactionResolver::resolve(&tx.state().pieces, letter, direction, neighbour);
        if !reaction.is_none() {
            debug!(%letter, %direction, ?reaction, "reaction");
        }
        apply_reaction(config, tx, reaction);
    }
}

fn apply_reaction(config: &GameConfig, tx: &mut Transaction<'_>, reaction: Reaction) {
    match reaction {
        Reaction::None => {}
        Reaction::Eliminate(letters) => {
            for letter in letters {
                eliminate(tx, letter);
            }
        }
        Reaction::Push { letter, direction } => push(config, tx, letter, direction),
        Reaction::Win(side) => declare_winner(tx, side),
    }
}

/// Send an on-board piece to the cemetery.
fn eliminate(tx: &mut Transaction<'_>, letter: Letter) {
    let Some(pos) = tx.state().pieces.get(letter).position else {
        return;
    };

    tx.set_square(pos, Square::Empty);
    tx.update_piece(letter, |piece| piece.position = None);
    tx.update_player(letter.side(), |player| {
        player.remove_from_board(letter);
    });
    if tx.state().unacted.contains(&letter) {
        tx.update_unacted(|unacted| {
            unacted.remove(&letter);
        });
    }
    tx.bury(letter);
    tx.emit(Event::Eliminated { letter, pos });
}

/// Push a piece one square. Only an Empty square accepts it; the board edge
/// follows `GameConfig::edge_push`.
fn push(config: &GameConfig, tx: &mut Transaction<'_>, letter: Letter, direction: Direction) {
    let Some(from) = tx.state().pieces.get(letter).position else {
        return;
    };
    let to = from.step(direction);

    match tx.state().board.square_at(to) {
        Ok(Square::Empty) => {
            tx.set_square(from, Square::Empty);
            tx.set_square(to, Square::Piece(letter));
            tx.update_piece(letter, |piece| piece.position = Some(to));
            tx.emit(Event::Pushed { letter, from, to });
        }
        Ok(_) => tx.emit(Event::PushBlocked { letter, direction }),
        Err(_) => match config.edge_push {
            EdgePush::Block => tx.emit(Event::PushBlocked { letter, direction }),
            EdgePush::Eliminate => eliminate(tx, letter),
        },
    }
}
