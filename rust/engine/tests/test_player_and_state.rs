use holdem_engine::cards::parse_cards;
use holdem_engine::errors::GameError;
use holdem_engine::player::{Player, PlayerAction};

#[test]
fn bet_over_stack_clamps_to_all_in() {
    let mut p = Player::new("p1", "Alice", 100);
    let moved = p.bet(150);
    assert_eq!(moved, 100);
    assert_eq!(p.chips(), 0);
    assert_eq!(p.bet_amount(), 100);
    assert_eq!(p.total_bet(), 100);
    assert!(p.is_all_in());
    assert!(!p.is_active());
    assert!(!p.is_folded());
    assert!(p.in_hand());
    assert!(!p.can_act());
}

#[test]
fn fold_is_final_for_the_hand() {
    let mut p = Player::new("p1", "Alice", 100);
    p.bet(10);
    p.fold();
    assert!(p.is_folded() && !p.is_active());
    p.reset_for_new_round();
    assert!(p.is_folded());
    p.reset_for_new_hand();
    assert!(!p.is_folded() && p.is_active());
    assert_eq!(p.total_bet(), 0);
    assert_eq!(p.chips(), 90);
}

#[test]
fn round_reset_keeps_hand_total() {
    let mut p = Player::new("p1", "Alice", 100);
    p.bet(30);
    p.reset_for_new_round();
    p.bet(20);
    assert_eq!(p.bet_amount(), 20);
    assert_eq!(p.total_bet(), 50);
}

#[test]
fn busted_player_stays_inactive_after_reset() {
    let mut p = Player::new("p1", "Alice", 50);
    p.bet(50);
    p.reset_for_new_hand();
    assert!(!p.is_active());
    assert!(!p.is_all_in());
}

#[test]
fn hole_cards_are_capped_at_two() {
    let mut p = Player::new("p1", "Alice", 50);
    for c in parse_cards("As Kd").unwrap() {
        p.give_card(c).unwrap();
    }
    let extra = parse_cards("2c").unwrap()[0];
    assert_eq!(p.give_card(extra), Err(GameError::InvalidCardCount(3)));
    assert_eq!(p.hole_cards().len(), 2);
    p.clear_cards();
    assert!(p.hole_cards().is_empty());
}

#[test]
fn actions_serialize_as_tagged_variants() {
    let raise = serde_json::to_string(&PlayerAction::Raise(60)).unwrap();
    assert_eq!(raise, r#"{"type":"raise","amount":60}"#);
    let fold: PlayerAction = serde_json::from_str(r#"{"type":"fold"}"#).unwrap();
    assert_eq!(fold, PlayerAction::Fold);
    let allin: PlayerAction = serde_json::from_str(r#"{"type":"allin"}"#).unwrap();
    assert_eq!(allin, PlayerAction::AllIn);
}
