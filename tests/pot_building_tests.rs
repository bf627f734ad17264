//! Тесты построения банков: слои при нескольких all-in, фишки сфолдивших,
//! идемпотентность сбора и сохранение фишек.

use holdem_engine::domain::{Chips, Deck, GameParameters, Player, Table};
use holdem_engine::engine::{Dealer, Round};

fn table_with_stacks(stacks: &[u64]) -> Table {
    let players = stacks
        .iter()
        .enumerate()
        .map(|(i, stack)| Player::new(i as u64 + 1, format!("p{}", i + 1), Chips::new(*stack)))
        .collect();
    Table::new(1, players)
}

fn start_round_bb(table: Table, big_blind: u64) -> Round {
    let rules = GameParameters::new(Chips::new(big_blind), None, 9).expect("rules");
    Round::start(1, table, rules, Dealer::start_work(Deck::standard_52())).expect("round")
}

fn start_round(table: Table) -> Round {
    start_round_bb(table, 50)
}

/// Сумма всех фишек в игре: стеки + ставки улицы + банки.
fn total_chips(round: &Round) -> u64 {
    let stacks: u64 = round
        .table()
        .players()
        .iter()
        .map(|p| p.chip_stack().amount())
        .sum();
    stacks + round.bet_stacks_total().amount() + round.chip_pots().total().amount()
}

/// (сумма, претенденты) банка по индексу.
fn pot_info(round: &Round, index: usize) -> (u64, Vec<u64>) {
    let pot = round.chip_pots().get_index(index).expect("pot");
    (pot.total().amount(), pot.players().to_vec())
}

#[test]
fn three_way_all_in_builds_one_pot_per_tier() {
    let mut round = start_round(table_with_stacks(&[800, 300, 150]));
    round.deal_hands();

    round.post_small_blind(2).unwrap();
    round.post_big_blind(3).unwrap();

    round.player_pushes_all_in(1).unwrap(); // 800
    round.player_pushes_all_in(2).unwrap(); // 25 + 275 = 300
    round.player_pushes_all_in(3).unwrap(); // 50 + 100 = 150

    assert_eq!(round.player_bet_stack(1), Chips::new(800));
    assert_eq!(round.player_bet_stack(2), Chips::new(300));
    assert_eq!(round.player_bet_stack(3), Chips::new(150));

    round.collect_chip_total();

    // Слои: 150*3 = 450, 150*2 = 300, остаток 500 — только p1.
    assert_eq!(round.chip_pots().len(), 3);
    assert_eq!(pot_info(&round, 0), (450, vec![1, 2, 3]));
    assert_eq!(pot_info(&round, 1), (300, vec![1, 2]));
    assert_eq!(pot_info(&round, 2), (500, vec![1]));

    round.end();

    // Неоспоримый верхний слой вернулся p1; общая сумма не изменилась.
    assert!(round.get_player(1).unwrap().chip_stack() >= Chips::new(500));
    assert_eq!(total_chips(&round), 1250);
    assert!(round.chip_pots().is_empty());
}

#[test]
fn folded_bets_are_swept_into_the_main_pot() {
    let mut round = start_round(table_with_stacks(&[2000, 300, 800, 150, 5000]));
    round.deal_hands();

    round.post_small_blind(2).unwrap();
    round.post_big_blind(3).unwrap();

    round.player_pushes_all_in(4).unwrap(); // 150
    round.player_folds_hand(5).unwrap();
    round.player_pushes_all_in(1).unwrap(); // 2000
    round.player_pushes_all_in(2).unwrap(); // 25 + 275 = 300
    round.player_folds_hand(3).unwrap(); // большой блайнд теряет 50

    assert_eq!(round.player_bet_stack(1), Chips::new(2000));
    assert_eq!(round.player_bet_stack(2), Chips::new(300));
    assert_eq!(round.player_bet_stack(3), Chips::new(50));
    assert_eq!(round.player_bet_stack(4), Chips::new(150));
    assert_eq!(round.player_bet_stack(5), Chips::ZERO);

    round.collect_chip_total();

    // Слои считаются только по не сфолдившим (150/300/2000);
    // 50 сфолдившего большого блайнда доливаются в главный банк.
    assert_eq!(round.chip_pots().len(), 3);
    assert_eq!(pot_info(&round, 0), (500, vec![1, 2, 4, 3]));
    assert_eq!(pot_info(&round, 1), (300, vec![1, 2]));
    assert_eq!(pot_info(&round, 2), (1700, vec![1]));

    // претенденты сжимаются с ростом слоя
    let (_, tier0) = pot_info(&round, 0);
    let (_, tier1) = pot_info(&round, 1);
    let (_, tier2) = pot_info(&round, 2);
    assert!(tier1.iter().all(|p| tier0.contains(p)));
    assert!(tier2.iter().all(|p| tier1.contains(p)));

    assert_eq!(round.bet_stacks_total(), Chips::ZERO);
    assert_eq!(total_chips(&round), 8250);

    round.end();
    assert_eq!(total_chips(&round), 8250);
}

#[test]
fn two_player_uneven_all_in_splits_into_two_pots() {
    let mut round = start_round(table_with_stacks(&[2000, 300]));
    round.deal_hands();

    round.post_small_blind(1).unwrap();
    round.post_big_blind(2).unwrap();

    round.player_pushes_all_in(1).unwrap(); // всего 2000
    round.player_calls(2).unwrap(); // колл на весь стек: 300

    round.collect_chip_total();

    // Меньший стек ограничивает общий банк: 300*2, остальное — только p1.
    assert_eq!(round.chip_pots().len(), 2);
    assert_eq!(pot_info(&round, 0), (600, vec![1, 2]));
    assert_eq!(pot_info(&round, 1), (1700, vec![1]));

    round.end();

    // На неперемешанной колоде играет борд — общий банк делится поровну,
    // верхний слой целиком возвращается p1.
    assert_eq!(round.get_player(1).unwrap().chip_stack(), Chips::new(2000));
    assert_eq!(round.get_player(2).unwrap().chip_stack(), Chips::new(300));
    assert_eq!(total_chips(&round), 2300);
}

#[test]
fn short_all_in_call_still_builds_side_pot() {
    let mut round = start_round_bb(table_with_stacks(&[44, 11]), 2);
    round.deal_hands();

    round.post_small_blind(1).unwrap(); // 1
    round.post_big_blind(2).unwrap(); // 2

    round.player_pushes_all_in(1).unwrap(); // 44
    round.player_calls(2).unwrap(); // 2 + 9 = 11, all-in

    round.collect_chip_total();

    assert_eq!(round.chip_pots().len(), 2);
    assert_eq!(pot_info(&round, 0), (22, vec![1, 2]));
    assert_eq!(pot_info(&round, 1), (33, vec![1]));
    assert_eq!(round.chip_pots().total(), Chips::new(55));

    round.end();
    assert_eq!(total_chips(&round), 55);
}

#[test]
fn collect_without_new_bets_changes_nothing() {
    let mut round = start_round(table_with_stacks(&[1000; 3]));
    round.deal_hands();

    round.post_small_blind(2).unwrap();
    round.post_big_blind(3).unwrap();
    round.player_calls(1).unwrap();
    round.player_calls(2).unwrap();
    round.player_checks(3).unwrap();

    round.deal_flop().unwrap();
    assert_eq!(round.chip_pots().len(), 1);
    assert_eq!(round.chip_pots().total(), Chips::new(150));

    round.collect_chip_total();
    round.collect_chip_total();

    assert_eq!(round.chip_pots().len(), 1);
    assert_eq!(round.chip_pots().total(), Chips::new(150));
}

#[test]
fn chips_are_conserved_through_the_whole_round() {
    let mut round = start_round(table_with_stacks(&[1000; 4]));
    round.deal_hands();
    assert_eq!(total_chips(&round), 4000);

    round.post_small_blind(2).unwrap();
    round.post_big_blind(3).unwrap();
    assert_eq!(total_chips(&round), 4000);

    round.player_calls(4).unwrap();
    round.player_folds_hand(1).unwrap();
    round.player_calls(2).unwrap();
    round.player_checks(3).unwrap();
    assert_eq!(total_chips(&round), 4000);

    round.deal_flop().unwrap();
    assert_eq!(total_chips(&round), 4000);

    round.player_checks(2).unwrap();
    round.player_raises(3, Chips::new(300)).unwrap();
    round.player_calls(4).unwrap();
    round.player_folds_hand(2).unwrap();
    assert_eq!(total_chips(&round), 4000);

    round.deal_turn().unwrap();
    round.player_pushes_all_in(3).unwrap();
    round.player_calls(4).unwrap();
    assert_eq!(total_chips(&round), 4000);

    round.end();
    assert_eq!(total_chips(&round), 4000, "выплаты не создают и не теряют фишек");
    assert_eq!(round.bet_stacks_total(), Chips::ZERO);
    assert!(round.chip_pots().is_empty());
}
