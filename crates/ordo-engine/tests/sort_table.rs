//! Integration tests driving the sort table the way a search does:
//! score, sort, search, then report the result back.

use ordo_core::{Color, Move, Snapshot};
use ordo_engine::{
    GOOD_CAPTURE_KEY, KILLER_KEY, LOSING_CAPTURE_KEY, OrderedMove, SortTable, TRANS_KEY, is_sorted,
    sort_moves,
};

fn mv(text: &str) -> Move {
    text.parse().unwrap()
}

fn scored(st: &SortTable, pos: &Snapshot, texts: &[&str], trans: Move, height: usize) -> Vec<OrderedMove> {
    let mut moves: Vec<OrderedMove> = texts.iter().map(|t| OrderedMove::new(mv(t))).collect();
    st.note(pos, &mut moves, trans, height);
    sort_moves(&mut moves);
    moves
}

fn order(moves: &[OrderedMove]) -> Vec<String> {
    moves.iter().map(|om| om.mv.to_string()).collect()
}

// ── Worked example ────────────────────────────────────────────────────────────

#[test]
fn update_after_three_tries() {
    let mut st = SortTable::new();
    st.clear();
    let pos = Snapshot::new(Color::White);
    let (m1, m2, m3) = (mv("Ng1f3"), mv("Pe2e4"), mv("Pd2d4"));

    st.update(&pos, m1, &[m2, m3, m1], 4, 0);

    assert_eq!(st.killers(0), [m1, Move::EMPTY]);
    assert_eq!(st.history(Color::White, m2), -512);
    assert_eq!(st.history(Color::White, m3), -512);
    assert_eq!(st.history(Color::White, m1), 512);
}

// ── Node lifecycle ────────────────────────────────────────────────────────────

#[test]
fn learned_order_reaches_the_next_node() {
    let mut st = SortTable::new();
    let white = Snapshot::new(Color::White);
    let texts = ["Pa2a3", "Pe2e4", "Ng1f3", "Pd2d4"];

    // First visit: nothing learned, all quiet moves tie and keep input order.
    let first = scored(&st, &white, &texts, Move::EMPTY, 2);
    assert_eq!(order(&first), texts);

    // Ng1f3 refuted the line after a2a3 and e2e4 failed.
    st.update(&white, mv("Ng1f3"), &[mv("Pa2a3"), mv("Pe2e4"), mv("Ng1f3")], 5, 2);

    // Sibling node at the same height: killer first.
    let sibling = scored(&st, &white, &texts, Move::EMPTY, 2);
    assert_eq!(order(&sibling), ["Ng1f3", "Pd2d4", "Pa2a3", "Pe2e4"]);
    assert_eq!(sibling[0].key, KILLER_KEY);

    // New subtree at that height: killer gone, history still ranks it first.
    st.reset_killers(2);
    let fresh = scored(&st, &white, &texts, Move::EMPTY, 2);
    assert_eq!(fresh[0].mv, mv("Ng1f3"));
    assert!(fresh[0].key < KILLER_KEY);
    assert!(is_sorted(&fresh));
}

#[test]
fn counter_move_answers_the_same_reply_anywhere() {
    let mut st = SortTable::new();
    let after_e5 = Snapshot::new(Color::White).with_last_move(mv("Pe7e5"));
    st.update(&after_e5, mv("Ng1f3"), &[mv("Ng1f3")], 3, 4);

    // Different height, so no killer: only the counter-move tier applies.
    let moves = scored(&st, &after_e5, &["Pa2a3", "Ng1f3"], Move::EMPTY, 6);
    assert_eq!(moves[0].mv, mv("Ng1f3"));
    assert_eq!(moves[0].key, KILLER_KEY - 2);

    // Another opponent move predicts nothing.
    let after_d5 = Snapshot::new(Color::White).with_last_move(mv("Pd7d5"));
    let moves = scored(&st, &after_d5, &["Pa2a3", "Ng1f3"], Move::EMPTY, 6);
    assert!(moves.iter().all(|om| om.key < KILLER_KEY - 2));
}

#[test]
fn tactical_tiers() {
    let st = SortTable::new();
    let pos = Snapshot::new(Color::Black).with_losing(mv("Qd8xPd2"));
    let moves = scored(
        &st,
        &pos,
        &["Qd8xPd2", "Pe5xNd4", "Pa2a1=Q", "Ng8f6", "Bc8g4"],
        mv("Bc8g4"),
        0,
    );

    assert_eq!(order(&moves), ["Bc8g4", "Pa2a1=Q", "Pe5xNd4", "Qd8xPd2", "Ng8f6"]);
    assert_eq!(moves[0].key, TRANS_KEY);
    assert_eq!(moves[1].key, GOOD_CAPTURE_KEY + 39);
    assert_eq!(moves[2].key, GOOD_CAPTURE_KEY + 15);
    assert_eq!(moves[3].key, LOSING_CAPTURE_KEY + 3);
    assert_eq!(moves[4].key, 0);
}

#[test]
fn quiescence_puts_tactics_first() {
    let mut st = SortTable::new();
    let pos = Snapshot::new(Color::White);
    st.update(&pos, mv("Pe2e4"), &[mv("Pe2e4")], 6, 0);

    let mut moves: Vec<OrderedMove> = ["Pe2e4", "Rd1xQd8", "Pc7c8=N"]
        .iter()
        .map(|t| OrderedMove::new(mv(t)))
        .collect();
    st.note_qs(&pos, &mut moves);
    sort_moves(&mut moves);
    assert_eq!(order(&moves), ["Rd1xQd8", "Pc7c8=N", "Pe2e4"]);
}

#[test]
fn clear_matches_fresh_table() {
    let mut st = SortTable::new();
    let pos = Snapshot::new(Color::White).with_last_move(mv("Pe7e5"));
    for height in 0..8 {
        st.update(&pos, mv("Ng1f3"), &[mv("Pd2d4"), mv("Ng1f3")], 8, height);
    }
    st.clear();

    let texts = ["Pd2d4", "Ng1f3", "Pc2c4"];
    for height in 0..8 {
        let cleared = scored(&st, &pos, &texts, Move::EMPTY, height);
        let fresh = scored(&SortTable::default(), &pos, &texts, Move::EMPTY, height);
        assert_eq!(cleared, fresh);
        assert!(cleared.iter().all(|om| om.key == 0));
        assert_eq!(st.killers(height), [Move::EMPTY; 2]);
    }
    assert_eq!(st.counter_move(&pos), Move::EMPTY);
}
