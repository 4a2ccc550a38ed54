use std::fs;

use holdem_engine::config::GameOptions;
use holdem_engine::game::{PokerGame, Round};
use holdem_engine::logger::{format_hand_id, ActionKind, HandLogger, HandRecord};
use holdem_engine::manager::GameId;
use holdem_engine::player::PlayerAction;

fn folded_hand() -> PokerGame {
    let mut game = PokerGame::new(GameId(4), GameOptions::default().with_seed(99)).unwrap();
    game.add_player("a", "A", 500).unwrap();
    game.add_player("b", "B", 500).unwrap();
    game.add_player("c", "C", 500).unwrap();
    game.start_new_hand().unwrap();
    game.player_action("a", PlayerAction::Raise(60)).unwrap();
    game.player_action("b", PlayerAction::Fold).unwrap();
    game.player_action("c", PlayerAction::Fold).unwrap();
    game
}

#[test]
fn action_log_records_blinds_and_decisions() {
    let game = folded_hand();
    let kinds: Vec<(&str, ActionKind, u32)> = game
        .action_log()
        .iter()
        .map(|r| (r.player_id.as_str(), r.kind, r.amount))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("b", ActionKind::SmallBlind, 10),
            ("c", ActionKind::BigBlind, 20),
            ("a", ActionKind::Player(PlayerAction::Raise(60)), 60),
            ("b", ActionKind::Player(PlayerAction::Fold), 0),
            ("c", ActionKind::Player(PlayerAction::Fold), 0),
        ]
    );
    let pots: Vec<u32> = game.action_log().iter().map(|r| r.pot).collect();
    assert_eq!(pots, vec![10, 30, 90, 90, 90]);
    assert!(game.action_log().iter().all(|r| r.round == Round::Preflop));
    assert!(game.action_log().iter().all(|r| r.hand == 1));
}

#[test]
fn hand_record_summarises_the_hand() {
    let game = folded_hand();
    let rec = game.last_hand().expect("record after hand end");
    assert_eq!(rec.hand_id, "game4-000001");
    assert_eq!(rec.seed, Some(99));
    assert_eq!(rec.actions.len(), 5);
    assert!(rec.board.is_empty());
    assert_eq!(rec.result.as_deref(), Some("a wins 90"));
    assert!(rec.showdown.is_none());
}

#[test]
fn writes_jsonl_with_lf_only_and_injects_ts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    let game = folded_hand();
    let rec = game.last_hand().unwrap();
    logger.write(rec).unwrap();

    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = HandRecord {
        hand_id: format_hand_id("game4", 2),
        ts: Some(preset.clone()),
        ..rec.clone()
    };
    logger.write(&rec2).unwrap();
    assert_eq!(logger.written(), 2);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let content = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: HandRecord = serde_json::from_str(lines[0]).unwrap();
    assert!(first.ts.is_some(), "ts should be injected");
    assert_eq!(first.actions, rec.actions);
    assert!(lines[0].contains("\"small_blind\""));

    let second: HandRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second.ts, Some(preset));
    assert_eq!(second.hand_id, "game4-000002");
}

#[test]
fn sink_counts_without_writing() {
    let mut logger = HandLogger::sink();
    let game = folded_hand();
    logger.write(game.last_hand().unwrap()).unwrap();
    assert_eq!(logger.written(), 1);
}
