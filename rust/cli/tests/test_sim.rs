//! `holdem sim` end to end: stdout summary and the JSONL hand history.

use holdem_engine::logger::HandRecord;
use serial_test::serial;

fn sim(args: &[&str]) -> (i32, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["holdem", "sim"];
    argv.extend_from_slice(args);
    let code = holdem_cli::run(argv, &mut out, &mut err);
    (code, String::from_utf8(out).unwrap())
}

#[test]
#[serial]
fn test_sim_writes_one_record_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("hands.jsonl");
    let path_str = path.to_str().unwrap();
    let (code, out) = sim(&[
        "--hands", "8", "--players", "3", "--seed", "21", "--output", path_str,
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("Simulated: 8 hands"));

    let contents = std::fs::read_to_string(&path).unwrap();
    let records: Vec<HandRecord> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 8);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r.hand_id, format!("game1-{:06}", i + 1));
        assert_eq!(r.seed, Some(21));
        assert!(r.ts.is_some());
        assert!(r.result.is_some());
        // blinds are always the first two entries
        assert!(r.actions.len() >= 3);
        assert!(r.board.len() <= 5);
    }
}

#[test]
#[serial]
fn test_sim_reports_every_hand_and_final_stacks() {
    let (code, out) = sim(&["--hands", "6", "--players", "5", "--seed", "8", "--bot", "random"]);
    assert_eq!(code, 0);
    for n in 1..=6 {
        assert!(out.contains(&format!("Hand {n}: ")), "missing hand {n}");
    }
    let stacks = out
        .lines()
        .find_map(|l| l.strip_prefix("Final stacks: "))
        .unwrap();
    let total: u32 = stacks
        .split(' ')
        .map(|kv| kv.rsplit('=').next().unwrap().parse::<u32>().unwrap())
        .sum();
    assert_eq!(total, 5 * 1_000);
}

#[test]
#[serial]
fn test_sim_unknown_bot_is_rejected() {
    let (code, _) = sim(&["--hands", "1", "--bot", "shark"]);
    assert_eq!(code, 2);
}
