//! Chess move representation, bit-packed into a u32.
//!
//! A move carries everything move ordering needs to know about it without
//! consulting the board: the squares, the moving piece, the victim and the
//! promotion piece.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

const FROM_SHIFT: u32 = 0;
const TO_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const CAPTURED_SHIFT: u32 = 15;
const PROMOTION_SHIFT: u32 = 18;
const PIECE_MASK: u32 = 0b111;

/// A chess move encoded in 32 bits.
///
/// ```text
/// bits  0-5:  origin square      (0-63)
/// bits  6-11: destination square (0-63)
/// bits 12-14: moving piece       (0 = none, 1..6 = Pawn..King)
/// bits 15-17: captured piece     (0 = none)
/// bits 18-20: promotion piece    (0 = none)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Move(u32);

impl Move {
    /// The empty move sentinel. Never produced by move generation.
    pub const EMPTY: Move = Move(0);

    /// Create a quiet move of `piece` from `from` to `to`.
    pub const fn new(piece: PieceKind, from: Square, to: Square) -> Move {
        Move(
            ((from.index() as u32) << FROM_SHIFT)
                | ((to.index() as u32) << TO_SHIFT)
                | (piece.code() << PIECE_SHIFT),
        )
    }

    /// Return this move with `victim` recorded as the captured piece.
    pub const fn with_capture(self, victim: PieceKind) -> Move {
        Move((self.0 & !(PIECE_MASK << CAPTURED_SHIFT)) | (victim.code() << CAPTURED_SHIFT))
    }

    /// Return this move with `promo` recorded as the promotion piece.
    pub const fn with_promotion(self, promo: PieceKind) -> Move {
        Move((self.0 & !(PIECE_MASK << PROMOTION_SHIFT)) | (promo.code() << PROMOTION_SHIFT))
    }

    /// Origin square.
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_bits(self.0 >> FROM_SHIFT)
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_bits(self.0 >> TO_SHIFT)
    }

    /// The moving piece. The empty move reports a pawn.
    #[inline]
    pub const fn piece(self) -> PieceKind {
        match PieceKind::from_code((self.0 >> PIECE_SHIFT) & PIECE_MASK) {
            Some(kind) => kind,
            None => PieceKind::Pawn,
        }
    }

    /// The captured piece, if any.
    #[inline]
    pub const fn captured(self) -> Option<PieceKind> {
        PieceKind::from_code((self.0 >> CAPTURED_SHIFT) & PIECE_MASK)
    }

    /// The promotion piece, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        PieceKind::from_code((self.0 >> PROMOTION_SHIFT) & PIECE_MASK)
    }

    /// Return `true` for the empty sentinel.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if the move captures something or promotes.
    #[inline]
    pub const fn is_capture_or_promotion(self) -> bool {
        self.0 & ((PIECE_MASK << CAPTURED_SHIFT) | (PIECE_MASK << PROMOTION_SHIFT)) != 0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "0000");
        }
        write!(f, "{}{}", self.piece(), self.from())?;
        if let Some(victim) = self.captured() {
            write!(f, "x{victim}")?;
        }
        write!(f, "{}", self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={promo}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Parse `<piece><from>[x<captured>]<to>[=<promotion>]`, e.g. `Ng1f3`,
    /// `Pe4xPd5` or `Pd7xNc8=Q`. `0000` is the empty move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "0000" {
            return Ok(Move::EMPTY);
        }

        let mut rest = s;
        let piece = take_piece(&mut rest, s)?;
        let from = take_square(&mut rest, s)?;
        let victim = match rest.strip_prefix('x') {
            Some(tail) => {
                rest = tail;
                Some(take_piece(&mut rest, s)?)
            }
            None => None,
        };
        let to = take_square(&mut rest, s)?;
        let promo = match rest.strip_prefix('=') {
            Some(tail) => {
                rest = tail;
                Some(take_piece(&mut rest, s)?)
            }
            None => None,
        };

        if !rest.is_empty() {
            return Err(MoveParseError::TrailingInput {
                input: s.to_string(),
            });
        }

        let mut mv = Move::new(piece, from, to);
        if let Some(victim) = victim {
            mv = mv.with_capture(victim);
        }
        if let Some(promo) = promo {
            mv = mv.with_promotion(promo);
        }
        Ok(mv)
    }
}

fn take_piece(rest: &mut &str, input: &str) -> Result<PieceKind, MoveParseError> {
    let c = rest.chars().next().ok_or_else(|| MoveParseError::Truncated {
        input: input.to_string(),
    })?;
    let kind = PieceKind::from_letter(c).ok_or_else(|| MoveParseError::InvalidPiece {
        character: c,
        input: input.to_string(),
    })?;
    *rest = &rest[c.len_utf8()..];
    Ok(kind)
}

fn take_square(rest: &mut &str, input: &str) -> Result<Square, MoveParseError> {
    let text = rest.get(..2).ok_or_else(|| MoveParseError::Truncated {
        input: input.to_string(),
    })?;
    let sq = text
        .parse::<Square>()
        .map_err(|source| MoveParseError::InvalidSquare {
            input: input.to_string(),
            source,
        })?;
    *rest = &rest[2..];
    Ok(sq)
}
