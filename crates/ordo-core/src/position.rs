//! What move ordering needs to know about a position.
//!
//! Move ordering never looks at the board itself. It asks for the side to
//! move, the move that led here, and a static exchange verdict for tactical
//! moves. Any board representation can provide those through the traits
//! below; [`Snapshot`] provides them from plain data.

use crate::chess_move::Move;
use crate::color::Color;

/// Board state as seen by move ordering.
pub trait Position {
    /// The side about to move.
    fn side_to_move(&self) -> Color;

    /// The move that reached this position, or [`Move::EMPTY`] at the root
    /// or after a null move.
    fn last_move(&self) -> Move;
}

/// Static exchange evaluation verdict for a capture or promotion.
pub trait StaticExchange {
    /// Return `true` if playing `mv` does not lose material once all
    /// exchanges on its destination square are resolved (SEE >= 0).
    fn see_ge_zero(&self, mv: Move) -> bool;
}

/// A position described directly by the facts move ordering consumes.
///
/// Every tactical move is treated as a safe exchange unless it was
/// explicitly marked as losing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    side: Color,
    last_move: Move,
    losing: Vec<Move>,
}

impl Snapshot {
    /// A position with `side` to move and no previous move.
    pub fn new(side: Color) -> Self {
        Self {
            side,
            last_move: Move::EMPTY,
            losing: Vec::new(),
        }
    }

    /// Set the move that reached this position.
    pub fn with_last_move(mut self, mv: Move) -> Self {
        self.last_move = mv;
        self
    }

    /// Mark `mv` as losing material by static exchange.
    pub fn with_losing(mut self, mv: Move) -> Self {
        if !self.losing.contains(&mv) {
            self.losing.push(mv);
        }
        self
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new(Color::White)
    }
}

impl Position for Snapshot {
    fn side_to_move(&self) -> Color {
        self.side
    }

    fn last_move(&self) -> Move {
        self.last_move
    }
}

impl StaticExchange for Snapshot {
    fn see_ge_zero(&self, mv: Move) -> bool {
        !self.losing.contains(&mv)
    }
}

impl<T: Position + ?Sized> Position for &T {
    fn side_to_move(&self) -> Color {
        (**self).side_to_move()
    }

    fn last_move(&self) -> Move {
        (**self).last_move()
    }
}

impl<T: StaticExchange + ?Sized> StaticExchange for &T {
    fn see_ge_zero(&self, mv: Move) -> bool {
        (**self).see_ge_zero(mv)
    }
}
