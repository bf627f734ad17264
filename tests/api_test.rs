//! Тесты выгрузки снимка раунда (crate::api).

use holdem_engine::api::snapshot_round;
use holdem_engine::domain::{Chips, Deck, GameParameters, Player, Table};
use holdem_engine::engine::{Dealer, Round};

fn make_round() -> Round {
    let players = vec![
        Player::new(1, "alice", Chips::new(1000)),
        Player::new(2, "bob", Chips::new(1000)),
        Player::new(3, "carol", Chips::new(1000)),
    ];
    let table = Table::new(7, players);
    let rules = GameParameters::new(Chips::new(50), None, 9).expect("rules");
    Round::start(42, table, rules, Dealer::start_work(Deck::standard_52())).expect("round")
}

#[test]
fn snapshot_carries_the_whole_round_state() {
    let mut round = make_round();
    round.deal_hands();

    round.post_small_blind(2).unwrap();
    round.post_big_blind(3).unwrap();
    round.player_calls(1).unwrap();
    round.player_calls(2).unwrap();
    round.player_checks(3).unwrap();
    round.deal_flop().unwrap();

    let snapshot = snapshot_round(&round);

    assert_eq!(snapshot.id, 42);
    assert_eq!(snapshot.table.id, 7);
    assert_eq!(snapshot.table.players.len(), 3);
    assert_eq!(snapshot.players_still_in.len(), 3);
    assert_eq!(snapshot.community_cards.len(), 3);
    assert_eq!(snapshot.chip_pots.len(), 1);
    assert_eq!(snapshot.chip_pots[0].total, Chips::new(150));
    assert_eq!(
        snapshot.current_pot.as_ref().map(|p| p.total),
        Some(Chips::new(150))
    );
    assert_eq!(snapshot.player_with_button.as_ref().map(|p| p.id), Some(1));
    assert_eq!(
        snapshot.player_with_small_blind.as_ref().map(|p| p.id),
        Some(2)
    );
    assert_eq!(
        snapshot.player_with_big_blind.as_ref().map(|p| p.id),
        Some(3)
    );
    // журнал: SB, BB, call, call, check, флоп
    assert_eq!(snapshot.actions.len(), 6);
    assert_eq!(snapshot.left_to_act.len(), 3);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut round = make_round();
    round.deal_hands();
    round.post_small_blind(2).unwrap();
    round.post_big_blind(3).unwrap();

    let json = serde_json::to_value(snapshot_round(&round)).expect("json");

    assert_eq!(json["id"], 42);
    assert_eq!(json["table"]["button"], 0);
    assert_eq!(json["game_rules"]["big_blind"], 50);
    assert!(json["bet_stacks"].is_array());
    assert!(json["actions"].is_object() || json["actions"].is_array());
    assert!(json["folded_players"].as_array().unwrap().is_empty());
    assert_eq!(json["players_still_in"].as_array().unwrap().len(), 3);
}

#[test]
fn snapshot_after_end_lists_winners_and_showdown_hands() {
    let mut round = make_round();
    round.deal_hands();

    round.post_small_blind(2).unwrap();
    round.post_big_blind(3).unwrap();
    round.player_calls(1).unwrap();
    round.player_calls(2).unwrap();
    round.player_checks(3).unwrap();

    round.end();

    let snapshot = snapshot_round(&round);
    assert!(snapshot.chip_pots.is_empty(), "банки розданы и удалены");
    assert!(!snapshot.winning_players.is_empty());
    assert_eq!(snapshot.showdown_hands.len(), 3);
    assert_eq!(snapshot.community_cards.len(), 5);
}
