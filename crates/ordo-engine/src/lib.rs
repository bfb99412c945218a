//! Move ordering for alpha-beta search.

pub mod sort;

pub use sort::{
    GOOD_CAPTURE_KEY, HISTORY_BONUS_CAP, HISTORY_DIVISOR, HISTORY_MAX, KEY_IMPORTANT, KILLER_KEY,
    LOSING_CAPTURE_KEY, MAX_HEIGHT, OrderedMove, STACK_SIZE, SortTable, TRANS_KEY, is_sorted,
    sort_moves,
};
