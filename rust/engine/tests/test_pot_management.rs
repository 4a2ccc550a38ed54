use holdem_engine::cards::parse_cards;
use holdem_engine::config::GameOptions;
use holdem_engine::deck::Deck;
use holdem_engine::game::{PokerGame, Round};
use holdem_engine::hand::Category;
use holdem_engine::manager::GameId;
use holdem_engine::player::PlayerAction;

/// Table dealing `order` on every hand. Seat `i` is player `p{i}`.
fn stacked_table(options: GameOptions, stacks: &[u32], order: &str) -> PokerGame {
    let deck = Deck::stacked(parse_cards(order).unwrap());
    let mut game = PokerGame::with_deck(GameId(1), options, deck).unwrap();
    for (i, &chips) in stacks.iter().enumerate() {
        game.add_player(format!("p{i}"), format!("P{i}"), chips)
            .unwrap();
    }
    game
}

fn check_down(game: &mut PokerGame, order: &[&str]) -> Option<holdem_engine::game::HandOutcome> {
    while game.hand_in_progress() {
        for id in order {
            if game.current_player().map(|p| p.id()) == Some(*id) {
                let out = game.player_action(id, PlayerAction::Check).unwrap();
                if out.hand.is_some() {
                    return out.hand;
                }
            }
        }
    }
    None
}

#[test]
fn identical_hands_split_the_pot_evenly() {
    // deal order starts left of the button: p1, p0, p1, p0
    let order = "Ac As Ah Ad 4c Ks Kd Kc 5c 2h 6c 3d";
    let mut game = stacked_table(GameOptions::default(), &[500, 500], order);
    game.start_new_hand().unwrap();
    assert_eq!(game.player("p0").unwrap().hole_cards(), parse_cards("As Ad").unwrap());

    game.player_action("p0", PlayerAction::Call).unwrap();
    game.player_action("p1", PlayerAction::Check).unwrap();
    let hand = check_down(&mut game, &["p1", "p0"]).expect("showdown");

    assert_eq!(game.community_cards(), parse_cards("Ks Kd Kc 2h 3d").unwrap());
    assert_eq!(hand.pot, 40);
    assert_eq!(hand.winners.len(), 2);
    for w in &hand.winners {
        assert_eq!(w.amount, 20);
        assert_eq!(w.hand.as_ref().unwrap().category, Category::FullHouse);
    }
    assert_eq!(game.player("p0").unwrap().chips(), 500);
    assert_eq!(game.player("p1").unwrap().chips(), 500);
    let showdown = game.last_hand().unwrap().showdown.clone().unwrap();
    assert_eq!(showdown.notes.as_deref(), Some("split pot"));
}

#[test]
fn odd_chip_goes_to_first_winner_left_of_button() {
    // p1 folds the small blind, leaving a 25 chip pot for p0 and p2
    let options = GameOptions::default().with_blinds(5, 10);
    let order = "4h 2d 2c 5h 3c 3d 6s Th Jd Qc 7s Ks 8s Ah";
    let mut game = stacked_table(options, &[500, 500, 500], order);
    game.start_new_hand().unwrap();

    game.player_action("p0", PlayerAction::Call).unwrap();
    game.player_action("p1", PlayerAction::Fold).unwrap();
    game.player_action("p2", PlayerAction::Check).unwrap();
    assert_eq!(game.round(), Round::Flop);
    let hand = check_down(&mut game, &["p2", "p0"]).expect("showdown");

    assert_eq!(hand.pot, 25);
    let paid: Vec<(&str, u32)> = hand
        .winners
        .iter()
        .map(|w| (w.player_id.as_str(), w.amount))
        .collect();
    assert_eq!(paid, vec![("p0", 12), ("p2", 13)]);
    assert_eq!(game.player("p2").unwrap().chips(), 503);
    assert_eq!(game.player("p0").unwrap().chips(), 502);
    assert_eq!(game.player("p1").unwrap().chips(), 495);
    assert_eq!(game.total_chips(), 1_500);
}

#[test]
fn short_all_in_only_wins_the_main_pot() {
    let options = GameOptions::default().with_buy_in(50, 2_000);
    // p1: KK, p2: QQ, p0: AA
    let order = "Kc Qc Ac Kd Qd Ad 5s 2h 7s 9d 6s 4c 8c Jh";
    let mut game = stacked_table(options, &[100, 500, 500], order);
    game.start_new_hand().unwrap();

    game.player_action("p0", PlayerAction::AllIn).unwrap();
    assert_eq!(game.current_bet(), 100);
    game.player_action("p1", PlayerAction::Call).unwrap();
    game.player_action("p2", PlayerAction::Raise(300)).unwrap();
    let out = game.player_action("p1", PlayerAction::Call).unwrap();
    assert_eq!(out.round, Round::Flop);
    assert_eq!(out.pot, 700);
    // the all-in player is skipped
    assert_eq!(game.current_player().unwrap().id(), "p1");

    let hand = check_down(&mut game, &["p1", "p2"]).expect("showdown");
    assert_eq!(hand.pots.len(), 2);
    assert_eq!(hand.pots[0].amount, 300);
    assert_eq!(hand.pots[0].eligible.len(), 3);
    assert_eq!(hand.pots[1].amount, 400);
    assert_eq!(hand.pots[1].eligible, vec!["p1".to_string(), "p2".to_string()]);

    assert_eq!(game.player("p0").unwrap().chips(), 300);
    assert_eq!(game.player("p1").unwrap().chips(), 600);
    assert_eq!(game.player("p2").unwrap().chips(), 200);
}

#[test]
fn uncalled_excess_returns_to_the_bettor() {
    let options = GameOptions::default().with_buy_in(50, 2_000);
    let order = "Kc Ac Kd Ad 5s 2h 7s 9d 6s 4c 8c Jh";
    let mut game = stacked_table(options, &[500, 60], order);
    game.start_new_hand().unwrap();

    // p0 shoves 500 into a 60 chip stack
    game.player_action("p0", PlayerAction::AllIn).unwrap();
    let out = game.player_action("p1", PlayerAction::Call).unwrap();
    let hand = out.hand.expect("board runs out automatically");
    assert_eq!(game.community_cards().len(), 5);
    assert_eq!(hand.pot, 560);
    // p0 holds aces and takes the matched 120 plus the unmatched 440
    assert_eq!(game.player("p0").unwrap().chips(), 560);
    assert_eq!(game.player("p1").unwrap().chips(), 0);
    assert_eq!(game.round(), Round::Finished);
}
