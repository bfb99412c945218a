//! Killer, history and counter-move tables, and the post-node update that
//! trains them.

use ordo_core::{Color, Move, Position, Square};
use tracing::{debug, trace};

use super::{HISTORY_BONUS_CAP, HISTORY_DIVISOR, HISTORY_MAX, MAX_HEIGHT, STACK_SIZE};

/// Entries in the history table: side × origin × destination.
const HISTORY_SIZE: usize = Color::COUNT * Square::COUNT * Square::COUNT;

/// Entries in the counter-move table: side × piece (3 bits) × destination.
const COUNTER_SIZE: usize = Color::COUNT * 8 * Square::COUNT;

/// Two killer moves per height, most recent first.
pub(crate) struct KillerTable {
    slots: [[Move; 2]; STACK_SIZE],
}

impl KillerTable {
    fn new() -> Self {
        Self {
            slots: [[Move::EMPTY; 2]; STACK_SIZE],
        }
    }

    fn clear(&mut self) {
        self.slots = [[Move::EMPTY; 2]; STACK_SIZE];
    }

    /// Empty both slots at `height`. Returns `false` if `height` is out of range.
    fn reset(&mut self, height: usize) -> bool {
        match self.slots.get_mut(height) {
            Some(slots) => {
                *slots = [Move::EMPTY; 2];
                true
            }
            None => false,
        }
    }

    /// Shift slot 0 into slot 1 unless `mv` already occupies slot 0.
    fn store(&mut self, height: usize, mv: Move) {
        let Some(slots) = self.slots.get_mut(height) else {
            return;
        };
        if slots[0] != mv {
            slots[1] = slots[0];
            slots[0] = mv;
        }
    }

    /// Both killers at `height`; empty moves beyond the stack.
    pub(crate) fn get(&self, height: usize) -> [Move; 2] {
        self.slots.get(height).copied().unwrap_or([Move::EMPTY; 2])
    }
}

/// Side-relative history, indexed by [`history_index`].
pub(crate) struct HistoryTable {
    table: [i32; HISTORY_SIZE],
}

impl HistoryTable {
    fn new() -> Self {
        Self {
            table: [0; HISTORY_SIZE],
        }
    }

    fn clear(&mut self) {
        self.table.fill(0);
    }

    /// Move the entry a `bonus / HISTORY_DIVISOR` fraction of the way towards `target`.
    ///
    /// With `bonus < HISTORY_DIVISOR` the entry never passes `target`, so
    /// entries stay inside `[-HISTORY_MAX, HISTORY_MAX]` without clamping.
    fn nudge(&mut self, side: Color, mv: Move, target: i32, bonus: i32) {
        let entry = &mut self.table[history_index(side, mv)];
        *entry += (target - *entry) * bonus / HISTORY_DIVISOR;
    }

    pub(crate) fn score(&self, side: Color, mv: Move) -> i32 {
        self.table[history_index(side, mv)]
    }
}

/// Predicted reply to each opponent move, indexed by [`counter_index`].
pub(crate) struct CounterTable {
    table: [Move; COUNTER_SIZE],
}

impl CounterTable {
    fn new() -> Self {
        Self {
            table: [Move::EMPTY; COUNTER_SIZE],
        }
    }

    fn clear(&mut self) {
        self.table.fill(Move::EMPTY);
    }

    fn store(&mut self, mover: Color, last: Move, reply: Move) {
        self.table[counter_index(mover, last)] = reply;
    }

    /// The stored reply to `last` played by `mover`.
    pub(crate) fn get(&self, mover: Color, last: Move) -> Move {
        self.table[counter_index(mover, last)]
    }
}

/// History slot for `mv` played by `side`.
///
/// ```text
/// bits  0-5:  destination square
/// bits  6-11: origin square
/// bit  12:    side (0 = White, 1 = Black)
/// ```
#[inline]
fn history_index(side: Color, mv: Move) -> usize {
    (side.index() << 12) | (mv.from().index() << 6) | mv.to().index()
}

/// Counter-move slot for `last` played by `mover`.
///
/// ```text
/// bits 0-5: destination square of `last`
/// bits 6-8: piece kind of `last` (Pawn = 0 .. King = 5)
/// bit  9:   side that played `last`
/// ```
#[inline]
fn counter_index(mover: Color, last: Move) -> usize {
    (mover.index() << 9) | (last.piece().index() << 6) | last.to().index()
}

/// History learning rate for a node searched to `depth`.
#[inline]
fn history_bonus(depth: u8) -> i32 {
    (depth as i32 * depth as i32).min(HISTORY_BONUS_CAP)
}

/// Heuristic state for one search worker: killers, history and counter-moves.
///
/// Not shared between workers. Scoring reads the tables; only
/// [`update`](Self::update) and the lifecycle methods write them.
pub struct SortTable {
    pub(crate) killers: KillerTable,
    pub(crate) history: HistoryTable,
    pub(crate) counters: CounterTable,
}

impl SortTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            killers: KillerTable::new(),
            history: HistoryTable::new(),
            counters: CounterTable::new(),
        }
    }

    /// Forget everything learned. Call before a new search or game.
    pub fn clear(&mut self) {
        self.killers.clear();
        self.history.clear();
        self.counters.clear();
        debug!("sort table cleared");
    }

    /// Empty the killer slots at `height` so moves from a sibling subtree do
    /// not carry over. Heights above [`MAX_HEIGHT`] are ignored.
    pub fn reset_killers(&mut self, height: usize) {
        if !self.killers.reset(height) {
            trace!(height, max = MAX_HEIGHT, "killer reset beyond stack ignored");
        }
    }

    /// Learn from a resolved node.
    ///
    /// `searched` holds the moves tried at the node in search order. Every
    /// move before the first occurrence of `best` lost and is pulled towards
    /// `-HISTORY_MAX`; `best` is pulled towards `HISTORY_MAX`. `best` also
    /// becomes the first killer at `height` and the counter-move to the
    /// opponent's last move.
    pub fn update<P: Position + ?Sized>(
        &mut self,
        pos: &P,
        best: Move,
        searched: &[Move],
        depth: u8,
        height: usize,
    ) {
        self.killers.store(height, best);

        let side = pos.side_to_move();
        let last = pos.last_move();
        if !last.is_empty() {
            self.counters.store(!side, last, best);
        }

        let bonus = history_bonus(depth);
        for &mv in searched.iter().take_while(|&&mv| mv != best) {
            self.history.nudge(side, mv, -HISTORY_MAX, bonus);
        }
        self.history.nudge(side, best, HISTORY_MAX, bonus);
    }

    /// Killer slots at `height`, most recent first.
    pub fn killers(&self, height: usize) -> [Move; 2] {
        self.killers.get(height)
    }

    /// History value of `mv` for `side`.
    pub fn history(&self, side: Color, mv: Move) -> i32 {
        self.history.score(side, mv)
    }

    /// The predicted reply to the move that reached `pos`, or [`Move::EMPTY`].
    pub fn counter_move<P: Position + ?Sized>(&self, pos: &P) -> Move {
        let last = pos.last_move();
        if last.is_empty() {
            Move::EMPTY
        } else {
            self.counters.get(!pos.side_to_move(), last)
        }
    }
}

impl Default for SortTable {
    fn default() -> Self {
        Self::new()
    }
}
