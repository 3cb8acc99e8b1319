//! Turn order, scoring and round lifecycle.

use super::invariants::{GameInvariants, InvariantSet};
use super::{
    Board, GameObserver, Outcome, Player, Position, ResumeError, SelectError, Square, Symbol,
    rules,
};
use crate::{DecidedRoundPolicy, EngineConfig};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// A `Game` lives across rounds. Each round starts from an empty (or
/// resumed) board and ends when a line is completed or the board fills up;
/// the outcome is reported to the observer `O` and the winner's score is
/// incremented.
///
/// ```
/// use tictactoe_engine::{Game, Outcome, Symbol};
///
/// let mut game = Game::new(Symbol::Circle);
/// for index in [0, 3, 1, 4, 2] {
///     assert_eq!(game.select(index), Ok(true));
/// }
/// assert_eq!(game.round_outcome(), Some(Outcome::Winner(Symbol::Circle)));
/// assert_eq!(game.player_one().score(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game<O = ()> {
    board: Board,
    player_one: Player,
    player_two: Player,
    player_to_start: Symbol,
    current_player: Symbol,
    outcome: Option<Outcome>,
    policy: DecidedRoundPolicy,
    observer: O,
}

impl Game {
    /// Creates a fresh game without an observer.
    pub fn new(starting_symbol: Symbol) -> Self {
        Self::with_observer(starting_symbol, ())
    }

    /// Resumes a game from a mid-game position without an observer.
    ///
    /// # Errors
    ///
    /// See [`Game::resume_with_observer`].
    pub fn resume(cells: &[Square], next_player: Symbol) -> Result<Self, ResumeError> {
        Self::resume_with_observer(cells, next_player, ())
    }
}

impl<O: GameObserver> Game<O> {
    /// Creates a fresh game reporting to `observer`.
    ///
    /// `starting_symbol` belongs to player one and moves first.
    #[instrument(skip(observer))]
    pub fn with_observer(starting_symbol: Symbol, observer: O) -> Self {
        Self {
            board: Board::new(),
            player_one: Player::new(starting_symbol),
            player_two: Player::new(starting_symbol.opposite()),
            player_to_start: starting_symbol,
            current_player: starting_symbol,
            outcome: None,
            policy: DecidedRoundPolicy::default(),
            observer,
        }
    }

    /// Creates a fresh game from engine configuration.
    #[instrument(skip_all, fields(starting_symbol = %config.starting_symbol()))]
    pub fn from_config(config: &EngineConfig, observer: O) -> Self {
        Self::with_observer(*config.starting_symbol(), observer)
            .with_policy(*config.decided_round_policy())
    }

    /// Resumes a game from externally supplied cells, with `next_player`
    /// due to move.
    ///
    /// `next_player` becomes player one. Scores start at zero.
    ///
    /// # Errors
    ///
    /// Checked in this order, first failure wins:
    /// - [`ResumeError::InvalidBoardSize`] unless exactly 9 cells are given,
    /// - [`ResumeError::InvalidInitialBoardState`] for a full board or
    ///   counts differing by more than one,
    /// - [`ResumeError::InvalidNextPlayer`] if `next_player` already has
    ///   more marks than the opponent.
    #[instrument(skip(cells, observer), fields(len = cells.len()))]
    pub fn resume_with_observer(
        cells: &[Square],
        next_player: Symbol,
        observer: O,
    ) -> Result<Self, ResumeError> {
        let board = Board::from_cells(cells)?;
        rules::validate_resume(&board, next_player)?;

        debug!(free = board.count_of(Square::Empty), "Resuming game");
        Ok(Self {
            board,
            ..Self::with_observer(next_player, observer)
        })
    }

    /// Sets what happens to moves made after a round is decided.
    pub fn with_policy(mut self, policy: DecidedRoundPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Places the current player's symbol at `index` (0-8).
    ///
    /// Returns `Ok(false)` and changes nothing if the square is occupied.
    /// On success the turn passes to the other symbol, the observer gets the
    /// new board, and then the round outcome if this move decided it.
    ///
    /// # Errors
    ///
    /// - [`SelectError::IndexOutOfRange`] for an index outside 0-8.
    /// - [`SelectError::RoundAlreadyDecided`] under
    ///   [`DecidedRoundPolicy::Reject`] once the round has an outcome.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select(&mut self, index: usize) -> Result<bool, SelectError> {
        let pos = Position::from_index(index).ok_or(SelectError::IndexOutOfRange { index })?;

        if let (DecidedRoundPolicy::Reject, Some(outcome)) = (self.policy, self.outcome) {
            warn!(%outcome, "Move after round was decided");
            return Err(SelectError::RoundAlreadyDecided);
        }

        let symbol = self.current_player;
        if !self.board.place(pos, symbol) {
            return Ok(false);
        }

        debug!(position = %pos, %symbol, "Move accepted");
        self.current_player = symbol.opposite();
        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "Game invariants violated"
        );

        self.observer.board_updated(&self.board);
        if let Some(outcome) = rules::evaluate(&self.board) {
            self.conclude(outcome);
        }
        Ok(true)
    }

    fn conclude(&mut self, outcome: Outcome) {
        if let Some(symbol) = outcome.winner() {
            self.player_mut(symbol).record_win();
        }
        info!(%outcome, "Round decided");
        self.outcome = Some(outcome);
        self.observer.winner_found(outcome);
    }

    /// Starts the next round: the other symbol starts, scores carry over.
    #[instrument(skip(self))]
    pub fn new_round(&mut self) {
        self.player_to_start = self.player_to_start.opposite();
        self.current_player = self.player_to_start;
        self.clear_board();
    }

    /// Resets everything: empty board, both scores zero, `starting_symbol`
    /// moves first.
    #[instrument(skip(self))]
    pub fn restart(&mut self, starting_symbol: Symbol) {
        self.player_one = Player::new(starting_symbol);
        self.player_two = Player::new(starting_symbol.opposite());
        self.player_to_start = starting_symbol;
        self.current_player = starting_symbol;
        self.clear_board();
    }

    fn clear_board(&mut self) {
        self.board.clean();
        self.outcome = None;
        debug!(player_to_start = %self.player_to_start, "Board cleared");
        self.observer.board_updated(&self.board);
    }

    /// Who, if anyone, has a complete line on `board`.
    ///
    /// Pure query: no notification, no score change.
    pub fn winner_on(board: &Board) -> Option<Symbol> {
        rules::check_winner(board)
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Indices of the empty squares, ascending.
    pub fn free_indices(&self) -> Vec<usize> {
        self.board.free_indices()
    }

    /// The symbol due to move.
    pub fn current_player(&self) -> Symbol {
        self.current_player
    }

    /// The symbol that started the current round.
    pub fn player_to_start(&self) -> Symbol {
        self.player_to_start
    }

    /// The player who started the game (or resumed it) with the first move.
    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    /// The other player.
    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// Score of the player holding `symbol`.
    pub fn score_of(&self, symbol: Symbol) -> u32 {
        if self.player_one.symbol() == symbol {
            self.player_one.score()
        } else {
            self.player_two.score()
        }
    }

    fn player_mut(&mut self, symbol: Symbol) -> &mut Player {
        if self.player_one.symbol() == symbol {
            &mut self.player_one
        } else {
            &mut self.player_two
        }
    }

    /// Outcome of the current round, `None` while undecided.
    pub fn round_outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Policy for moves after a decided round.
    pub fn policy(&self) -> DecidedRoundPolicy {
        self.policy
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the game, returning its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}
