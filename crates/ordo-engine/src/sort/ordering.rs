//! Scoring of candidate moves for the main search and for quiescence.

use ordo_core::{Move, PieceKind, Position, StaticExchange};

use super::heuristics::SortTable;
use super::{GOOD_CAPTURE_KEY, KILLER_KEY, LOSING_CAPTURE_KEY, OrderedMove, TRANS_KEY};

/// Ordinal piece scale for MVV-LVA: none = 0, pawn = 1, ..., king = 6.
#[inline]
const fn sort_value(kind: Option<PieceKind>) -> i32 {
    match kind {
        Some(kind) => kind.index() as i32 + 1,
        None => 0,
    }
}

/// Most valuable victim, least valuable attacker, with promotions counted
/// as a secondary victim: `8 * (victim + promotion) - attacker`.
#[inline]
pub(crate) const fn mvv_lva(mv: Move) -> i32 {
    8 * (sort_value(mv.captured()) + sort_value(mv.promotion())) - sort_value(Some(mv.piece()))
}

impl SortTable {
    /// Assign ordering keys for the main search.
    ///
    /// Tiers, highest first:
    /// - transposition move: 30,000
    /// - safe captures/promotions (SEE >= 0): 29,000 + MVV-LVA
    /// - losing captures/promotions: 28,100 + MVV-LVA
    /// - first killer: 28,000, second killer: 27,999
    /// - counter-move: 27,998
    /// - quiet moves: history, in `[-16,384, 16,384]`
    pub fn note<P: Position + StaticExchange + ?Sized>(
        &self,
        pos: &P,
        moves: &mut [OrderedMove],
        trans: Move,
        height: usize,
    ) {
        let side = pos.side_to_move();
        let [killer1, killer2] = self.killers.get(height);
        let counter = self.counter_move(pos);

        for om in moves.iter_mut() {
            let mv = om.mv;
            om.key = if mv == trans {
                TRANS_KEY
            } else if mv.is_capture_or_promotion() {
                if pos.see_ge_zero(mv) {
                    GOOD_CAPTURE_KEY + mvv_lva(mv)
                } else {
                    LOSING_CAPTURE_KEY + mvv_lva(mv)
                }
            } else if mv == killer1 {
                KILLER_KEY
            } else if mv == killer2 {
                KILLER_KEY - 1
            } else if mv == counter {
                KILLER_KEY - 2
            } else {
                self.history.score(side, mv)
            };
        }
    }

    /// Assign ordering keys for quiescence search: captures and promotions
    /// by MVV-LVA above everything, anything else by history.
    pub fn note_qs<P: Position + ?Sized>(&self, pos: &P, moves: &mut [OrderedMove]) {
        let side = pos.side_to_move();
        for om in moves.iter_mut() {
            om.key = if om.mv.is_capture_or_promotion() {
                GOOD_CAPTURE_KEY + mvv_lva(om.mv)
            } else {
                self.history.score(side, om.mv)
            };
        }
    }
}
