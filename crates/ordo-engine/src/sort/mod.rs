//! Move ordering: killer, history and counter-move tables plus the scoring
//! and sorting routines the search calls at every node.
//!
//! The search owns one [`SortTable`] per worker. At each node it scores the
//! generated moves with [`SortTable::note`] (or [`SortTable::note_qs`] in
//! quiescence), orders them with [`sort_moves`], and after the node resolves
//! reports the best move back through [`SortTable::update`].

pub mod heuristics;
pub mod insertion;
pub mod ordering;

use ordo_core::Move;

pub use heuristics::SortTable;
pub use insertion::{is_sorted, sort_moves};

/// Size of the per-height killer storage.
pub const STACK_SIZE: usize = 128;

/// Highest height with killer slots. Heights above it are ignored.
pub const MAX_HEIGHT: usize = STACK_SIZE - 1;

/// Bound on the magnitude of every history entry.
pub const HISTORY_MAX: i32 = 1 << 14;

/// Cap on the per-update history learning rate (`depth²` is clipped to this).
pub const HISTORY_BONUS_CAP: i32 = 400;

/// Denominator of the history learning rate.
pub const HISTORY_DIVISOR: i32 = 512;

/// Key of the transposition table move.
pub const TRANS_KEY: i32 = 30_000;

/// Base key of captures and promotions that do not lose material.
pub const GOOD_CAPTURE_KEY: i32 = 29_000;

/// Base key of captures and promotions that lose material by SEE.
///
/// Sits between the killers and the safe captures so every tier strictly
/// dominates the next: MVV-LVA adds at most 87 to either capture base.
pub const LOSING_CAPTURE_KEY: i32 = 28_100;

/// Key of the first killer. The second killer gets one less, the counter-move two less.
pub const KILLER_KEY: i32 = 28_000;

/// Moves keyed above this are hash moves, captures, killers or counter-moves.
pub const KEY_IMPORTANT: i32 = 27_000;

/// A candidate move paired with its ordering key. Higher keys are searched first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderedMove {
    /// The candidate move.
    pub mv: Move,
    /// Ordering priority; only relative order is meaningful.
    pub key: i32,
}

impl OrderedMove {
    /// Wrap a move with a zero key.
    pub const fn new(mv: Move) -> Self {
        Self { mv, key: 0 }
    }

    /// Return `true` if the key places this move in one of the special
    /// tiers (hash move, capture, killer, counter-move) rather than the
    /// history-ordered quiet moves.
    #[inline]
    pub const fn is_important(&self) -> bool {
        self.key > KEY_IMPORTANT
    }
}

impl From<Move> for OrderedMove {
    fn from(mv: Move) -> Self {
        Self::new(mv)
    }
}
