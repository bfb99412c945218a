//! End-to-end script sessions.

use ordo_script::{Session, SessionConfig};

fn run(script: &str) -> Vec<String> {
    let mut out = Vec::new();
    Session::with_config(SessionConfig { verify: true })
        .run(script.as_bytes(), &mut out)
        .unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn worked_update_example() {
    let out = run("\
clear
position w
update Ng1f3 depth 4 height 0 searched Pe2e4 Pd2d4 Ng1f3
killers 0
history Pe2e4
history Pd2d4
history Ng1f3
");
    assert_eq!(
        out,
        ["killers Ng1f3 0000", "history -512", "history -512", "history 512"]
    );
}

#[test]
fn note_prints_tiers_in_order() {
    let out = run("\
position w last Pe7e5 losing Qd1xPd7
update Nb1c3 depth 2 height 5 searched Nb1c3
position w
update Pc2c4 depth 2 height 1 searched Pc2c4
update Pd2d4 depth 2 height 1 searched Pd2d4
position w last Pe7e5 losing Qd1xPd7
note height 1 trans Bf1b5 moves Pa2a3 Nb1c3 Pc2c4 Pd2d4 Qd1xPd7 Nf3xPe5 Bf1b5
");
    assert_eq!(
        out,
        ["order Bf1b5:30000 Nf3xPe5:29006 Qd1xPd7:28103 Pd2d4:28000 Pc2c4:27999 Nb1c3:27998 Pa2a3:0"]
    );
}

#[test]
fn noteqs_orders_by_mvv_lva() {
    let out = run("noteqs moves Qd1xPd7 Pe4xQd5 Pa7a8=Q\n");
    assert_eq!(out, ["order Pe4xQd5:29039 Pa7a8=Q:29039 Qd1xPd7:29003"]);
}

#[test]
fn counter_and_reset() {
    let out = run("\
position b last Pe2e4
update Nb8c6 depth 3 height 1 searched Pd7d5 Nb8c6
counter
reset 1
killers 1
position w
counter
");
    assert_eq!(out, ["counter Nb8c6", "killers 0000 0000", "counter 0000"]);
}

#[test]
fn errors_are_reported_inline() {
    let out = run("\
update Ng1f3 height 0
frobnicate
note moves Zz9z9
killers 0
");
    assert_eq!(
        out,
        [
            "error update: missing depth",
            "error invalid move: invalid piece letter 'Z' in move \"Zz9z9\"",
            "killers 0000 0000",
        ]
    );
}
