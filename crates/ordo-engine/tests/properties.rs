//! Property tests for the sort table and the move sort.
//!
//! Random update sequences exercise the history bounds and killer rules;
//! random key lists exercise the sort.

use ordo_core::{Color, Move, PieceKind, Snapshot, Square};
use ordo_engine::{HISTORY_MAX, MAX_HEIGHT, OrderedMove, SortTable, is_sorted, sort_moves};
use proptest::prelude::*;

fn arb_square() -> impl Strategy<Value = Square> {
    (0u8..64).prop_map(|i| Square::from_index(i).unwrap())
}

fn arb_piece() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

fn arb_quiet() -> impl Strategy<Value = Move> {
    (arb_piece(), arb_square(), arb_square()).prop_map(|(p, from, to)| Move::new(p, from, to))
}

fn arb_move() -> impl Strategy<Value = Move> {
    (arb_quiet(), prop::option::of(arb_piece())).prop_map(|(mv, victim)| match victim {
        Some(victim) => mv.with_capture(victim),
        None => mv,
    })
}

fn arb_color() -> impl Strategy<Value = Color> {
    prop::sample::select(Color::ALL.to_vec())
}

/// Arguments of one `update` call: side, last move, searched moves, index of
/// the best move in the searched list, depth, height.
type UpdateArgs = (Color, Move, Vec<Move>, usize, u8, usize);

fn arb_update() -> impl Strategy<Value = UpdateArgs> {
    (
        arb_color(),
        prop::option::of(arb_move()),
        prop::collection::vec(arb_move(), 1..12),
        any::<prop::sample::Index>(),
        0u8..40,
        0usize..=MAX_HEIGHT,
    )
        .prop_map(|(side, last, searched, best_at, depth, height)| {
            let best_at = best_at.index(searched.len());
            (side, last.unwrap_or(Move::EMPTY), searched, best_at, depth, height)
        })
}

fn snapshot(side: Color, last: Move) -> Snapshot {
    Snapshot::new(side).with_last_move(last)
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn history_stays_bounded(updates in prop::collection::vec(arb_update(), 1..200)) {
        let mut st = SortTable::new();
        for (side, last, searched, best_at, depth, height) in &updates {
            let pos = snapshot(*side, *last);
            st.update(&pos, searched[*best_at], searched, *depth, *height);
        }
        for (side, _, searched, _, _, _) in &updates {
            for &mv in searched {
                let h = st.history(*side, mv);
                prop_assert!((-HISTORY_MAX..=HISTORY_MAX).contains(&h), "history {} out of range", h);
            }
        }
    }

    #[test]
    fn killer_slots_distinct_unless_empty(updates in prop::collection::vec(arb_update(), 1..200)) {
        let mut st = SortTable::new();
        for (side, last, searched, best_at, depth, height) in &updates {
            let pos = snapshot(*side, *last);
            st.update(&pos, searched[*best_at], searched, *depth, *height);
            let [k1, k2] = st.killers(*height);
            prop_assert!(k1 != k2 || (k1.is_empty() && k2.is_empty()));
        }
    }

    #[test]
    fn killer_recency(prior in arb_quiet(), best in arb_quiet(), height in 0usize..=MAX_HEIGHT) {
        prop_assume!(prior != best);
        let mut st = SortTable::new();
        let pos = Snapshot::new(Color::White);
        st.update(&pos, prior, &[prior], 3, height);
        st.update(&pos, best, &[best], 3, height);
        prop_assert_eq!(st.killers(height), [best, prior]);

        st.update(&pos, best, &[best], 3, height);
        prop_assert_eq!(st.killers(height), [best, prior]);
    }

    #[test]
    fn sort_orders_and_preserves_entries(keys in prop::collection::vec(-40_000i32..40_000, 0..80)) {
        let mut moves: Vec<OrderedMove> = keys
            .iter()
            .enumerate()
            .map(|(i, &key)| OrderedMove {
                mv: Move::new(PieceKind::Knight, Square::from_index((i % 64) as u8).unwrap(), Square::H8),
                key,
            })
            .collect();
        let mut expected = moves.clone();
        sort_moves(&mut moves);
        prop_assert!(is_sorted(&moves));

        // Same multiset, and equal keys keep their input order.
        expected.sort_by(|a, b| b.key.cmp(&a.key));
        prop_assert_eq!(moves, expected);
    }

    #[test]
    fn scoring_is_pure(
        updates in prop::collection::vec(arb_update(), 0..50),
        candidates in prop::collection::vec(arb_move(), 1..30),
        side in arb_color(),
        height in 0usize..=MAX_HEIGHT,
    ) {
        let mut st = SortTable::new();
        for (s, last, searched, best_at, depth, h) in &updates {
            st.update(&snapshot(*s, *last), searched[*best_at], searched, *depth, *h);
        }
        let pos = Snapshot::new(side);
        let mut first: Vec<OrderedMove> = candidates.iter().copied().map(OrderedMove::new).collect();
        let mut second = first.clone();
        st.note(&pos, &mut first, Move::EMPTY, height);
        st.note(&pos, &mut second, Move::EMPTY, height);
        prop_assert_eq!(first, second);
    }
}
