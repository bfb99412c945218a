//! Core types consumed by move ordering: sides, squares, pieces, packed
//! moves, and the position interface.

mod chess_move;
mod color;
mod error;
mod piece_kind;
mod position;
mod square;

pub use chess_move::Move;
pub use color::Color;
pub use error::{ColorParseError, MoveParseError, SquareParseError};
pub use piece_kind::PieceKind;
pub use position::{Position, Snapshot, StaticExchange};
pub use square::Square;
