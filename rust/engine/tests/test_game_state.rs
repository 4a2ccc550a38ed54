use holdem_engine::cards::parse_cards;
use holdem_engine::config::GameOptions;
use holdem_engine::deck::Deck;
use holdem_engine::game::{PokerGame, Round};
use holdem_engine::manager::{GameId, GameManager};
use holdem_engine::player::PlayerAction;
use holdem_engine::snapshot::{render, GameSnapshot};

fn manager_with_table() -> (GameManager, GameId) {
    let mut manager = GameManager::new();
    let id = manager
        .create_game(GameOptions::default().with_seed(5))
        .unwrap();
    for (pid, name) in [("a", "Alice"), ("b", "Bob"), ("c", "Carol")] {
        manager.add_player(id, pid, name, 500).unwrap();
    }
    manager.start(id).unwrap();
    (manager, id)
}

#[test]
fn each_viewer_sees_only_their_own_hole_cards() {
    let (manager, id) = manager_with_table();
    let snap = manager.game_state(id, Some("b")).unwrap();
    assert_eq!(snap.round, Round::Preflop);
    assert_eq!(snap.pot, 30);
    assert_eq!(snap.current_player.as_deref(), Some("a"));
    assert!(snap.player("a").unwrap().is_dealer);
    assert_eq!(snap.player("b").unwrap().hole_cards.as_ref().map(Vec::len), Some(2));
    assert!(snap.player("a").unwrap().hole_cards.is_none());
    assert!(snap.player("c").unwrap().hole_cards.is_none());

    let spectator = manager.game_state(id, None).unwrap();
    assert!(spectator.players.iter().all(|p| p.hole_cards.is_none()));
}

#[test]
fn snapshot_round_trips_through_json() {
    let (manager, id) = manager_with_table();
    let snap = manager.game_state(id, Some("a")).unwrap();
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"round\":\"preflop\""));
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn showdown_reveals_cards_of_players_still_in() {
    let order = "Ac As Ah Ad 4c Ks Kd Kc 5c 2h 6c 3d";
    let deck = Deck::stacked(parse_cards(order).unwrap());
    let mut game = PokerGame::with_deck(GameId(1), GameOptions::default(), deck).unwrap();
    game.add_player("p0", "P0", 500).unwrap();
    game.add_player("p1", "P1", 500).unwrap();
    game.start_new_hand().unwrap();
    game.player_action("p0", PlayerAction::Call).unwrap();
    game.player_action("p1", PlayerAction::Check).unwrap();
    while game.hand_in_progress() {
        let id = game.current_player().unwrap().id().to_string();
        game.player_action(&id, PlayerAction::Check).unwrap();
    }

    let snap = game.snapshot(None);
    assert_eq!(snap.round, Round::Showdown);
    assert!(snap.players.iter().all(|p| p.hole_cards.is_some()));
    assert_eq!(snap.last_outcome.as_ref().unwrap().winners.len(), 2);

    let text = render(&snap);
    assert!(text.contains("Board: Ks Kd Kc 2h 3d"));
    assert!(text.contains("p0 wins 20 with Full House"));
}

#[test]
fn uncontested_hand_keeps_cards_hidden() {
    let (mut manager, id) = manager_with_table();
    manager.player_action(id, "a", PlayerAction::Fold).unwrap();
    manager.player_action(id, "b", PlayerAction::Fold).unwrap();
    let snap = manager.game_state(id, None).unwrap();
    assert_eq!(snap.round, Round::Showdown);
    assert!(snap.players.iter().all(|p| p.hole_cards.is_none()));
}

#[test]
fn render_marks_the_actor_and_hides_cards() {
    let (manager, id) = manager_with_table();
    let text = manager.render(id, Some("a")).unwrap();
    assert!(text.starts_with(&format!("Game {id} | hand #1 | Preflop | blinds 10/20")));
    let actor_line = text.lines().find(|l| l.starts_with('>')).unwrap();
    assert!(actor_line.contains("Alice"));
    assert!(actor_line.contains("(D)"));
    assert!(text.contains("?? ??"));
}

#[test]
fn next_hand_starts_after_settlement() {
    let (mut manager, id) = manager_with_table();
    manager.player_action(id, "a", PlayerAction::Fold).unwrap();
    let out = manager.player_action(id, "b", PlayerAction::Fold).unwrap();
    assert!(out.hand.unwrap().next_hand_in.is_some());
    manager.next_hand(id).unwrap();
    let game = manager.get_game(id).unwrap();
    assert_eq!(game.hand_number(), 2);
    assert_eq!(game.dealer(), 1);
    manager.remove_player(id, "c").unwrap();
    assert!(manager.get_game(id).unwrap().player("c").unwrap().is_folded());
}
