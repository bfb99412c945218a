//! Descending insertion sort over scored move lists.
//!
//! Move lists are short and usually close to sorted already, so a plain
//! insertion sort beats a general-purpose sort here.

use super::OrderedMove;

/// Sort `moves` by descending key. Equal keys keep their relative order.
pub fn sort_moves(moves: &mut [OrderedMove]) {
    insertion_sort(moves);
}

/// Insertion sort returning the number of element shifts performed.
pub(crate) fn insertion_sort(moves: &mut [OrderedMove]) -> usize {
    let mut shifts = 0;
    for i in 1..moves.len() {
        let item = moves[i];
        let mut j = i;
        while j > 0 && moves[j - 1].key < item.key {
            moves[j] = moves[j - 1];
            j -= 1;
            shifts += 1;
        }
        moves[j] = item;
    }
    shifts
}

/// Return `true` if keys never increase along `moves`.
pub fn is_sorted(moves: &[OrderedMove]) -> bool {
    moves.windows(2).all(|pair| pair[0].key >= pair[1].key)
}
