//! Game session: the state a front end needs between frames
//!
//! The session owns the real board, whose turn it is, the selected piece in
//! the movement phase and the computer's strategy. It is passed explicitly to
//! whatever drives the game; the engine itself keeps no game state.
//!
//! When the side to move has no legal move its turn is skipped. If neither
//! side can move the game ends in [`Outcome::Stalemate`].

use tracing::debug;

use crate::board::{Board, Phase, Point, Side};
use crate::engine::{AIEngine, MoveResult, Strategy};
use crate::error::{Error, Result};
use crate::rules::{legal_moves, validate_move, winner, winning_line, Move};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Side),
    /// Neither side has a legal move
    Stalemate,
}

/// A single game between the Human and the Computer
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Side,
    strategy: Strategy,
    selected: Option<Point>,
    outcome: Option<Outcome>,
    history: Vec<(Move, Side)>,
    last_ai_result: Option<MoveResult>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

impl GameSession {
    /// New game on an empty board, Human to move
    pub fn new(strategy: Strategy) -> Self {
        Self::from_position(Board::new(), Side::Human, strategy)
    }

    /// Session starting from an arbitrary position
    pub fn from_position(board: Board, turn: Side, strategy: Strategy) -> Self {
        let mut session = Self {
            board,
            turn,
            strategy,
            selected: None,
            outcome: None,
            history: Vec::new(),
            last_ai_result: None,
        };
        session.update_outcome();
        session
    }

    /// Start over, keeping the strategy
    pub fn reset(&mut self) {
        *self = Self::new(self.strategy);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn toggle_strategy(&mut self) {
        self.strategy = self.strategy.toggle();
    }

    /// Human piece picked up in the movement phase
    pub fn selected(&self) -> Option<Point> {
        self.selected
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[(Move, Side)] {
        &self.history
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// Points of the completed line, if someone has won
    pub fn winning_line(&self) -> Option<[Point; 3]> {
        match self.outcome {
            Some(Outcome::Won(side)) => winning_line(&self.board, side),
            _ => None,
        }
    }

    /// Human clicked `point`.
    ///
    /// - Placement: put a piece on an empty point.
    /// - Movement, nothing selected: select an own piece.
    /// - Movement, piece selected: clicking another own piece re-selects,
    ///   clicking an adjacent empty point moves there.
    ///
    /// Returns the move when one was made, `None` when only the selection
    /// changed.
    pub fn click(&mut self, point: Point) -> Result<Option<Move>> {
        self.ensure_turn(Side::Human)?;

        match self.board.phase() {
            Phase::Placement => {
                let mv = validate_move(&self.board, Move::Place { to: point }, Side::Human)?;
                self.play(mv, Side::Human);
                Ok(Some(mv))
            }
            Phase::Movement => {
                if self.board.get(point).side() == Some(Side::Human) {
                    self.selected = Some(point);
                    return Ok(None);
                }
                let Some(from) = self.selected else {
                    return Err(Error::NotOwned {
                        point,
                        side: Side::Human,
                    });
                };
                let mv = validate_move(&self.board, Move::Slide { from, to: point }, Side::Human)?;
                self.play(mv, Side::Human);
                Ok(Some(mv))
            }
        }
    }

    /// Apply a Human move given directly instead of through clicks
    pub fn play_human(&mut self, mv: Move) -> Result<()> {
        self.ensure_turn(Side::Human)?;
        let mv = validate_move(&self.board, mv, Side::Human)?;
        self.play(mv, Side::Human);
        Ok(())
    }

    /// Let the engine play the Computer's turn.
    ///
    /// Returns the move played, or `None` if the Computer had to pass.
    pub fn play_computer(&mut self, engine: &mut AIEngine) -> Result<Option<Move>> {
        self.ensure_turn(Side::Computer)?;

        let result = engine.choose_move_with_stats(&self.board, self.strategy);
        let best_move = result.best_move;
        self.last_ai_result = Some(result);

        match best_move {
            Some(mv) => {
                self.play(mv, Side::Computer);
                Ok(Some(mv))
            }
            None => {
                debug!("computer passes");
                self.turn = Side::Human;
                self.update_outcome();
                Ok(None)
            }
        }
    }

    /// One-line description for the status bar
    pub fn status_text(&self) -> String {
        match self.outcome {
            Some(Outcome::Won(Side::Human)) => "Winner: Human".to_string(),
            Some(Outcome::Won(Side::Computer)) => "Winner: Computer".to_string(),
            Some(Outcome::Stalemate) => "Stalemate: no legal moves".to_string(),
            None => {
                let phase = match self.board.phase() {
                    Phase::Placement => "Placement",
                    Phase::Movement => "Movement",
                };
                format!(
                    "{phase} | Mode: {} (1: optimal, 2: weak, T: toggle)",
                    self.strategy
                )
            }
        }
    }

    fn ensure_turn(&self, side: Side) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.turn != side {
            return Err(Error::NotYourTurn(side));
        }
        Ok(())
    }

    fn play(&mut self, mv: Move, side: Side) {
        debug!(?side, %mv, "move played");
        self.board = self.board.apply(mv, side);
        self.history.push((mv, side));
        self.selected = None;
        self.turn = side.opponent();
        self.update_outcome();
    }

    /// Record a win or stalemate, and skip the turn of a side that cannot move
    fn update_outcome(&mut self) {
        if let Some(side) = winner(&self.board) {
            self.outcome = Some(Outcome::Won(side));
            return;
        }

        if legal_moves(&self.board, self.turn).is_empty() {
            let other = self.turn.opponent();
            if legal_moves(&self.board, other).is_empty() {
                self.outcome = Some(Outcome::Stalemate);
            } else {
                debug!(side = ?self.turn, "no legal move, turn passes");
                self.turn = other;
            }
        }
    }
}
