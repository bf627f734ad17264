//! Интеграционные тесты доменной модели (crate::domain).

use holdem_engine::domain::*;

//
// chips.rs
//

#[test]
fn chips_checked_sub_guards_against_negative() {
    let a = Chips::new(100);
    let b = Chips::new(30);

    assert_eq!(a.checked_sub(b), Some(Chips::new(70)));
    assert_eq!(b.checked_sub(a), None, "нехватка должна дать None, не минус");
    assert_eq!(b.saturating_sub(a), Chips::ZERO);
}

#[test]
fn chips_add_and_sum() {
    let total: Chips = [Chips::new(25), Chips::new(50), Chips::new(25)]
        .into_iter()
        .sum();
    assert_eq!(total, Chips::new(100));

    let mut acc = Chips::ZERO;
    acc += Chips::new(40);
    assert_eq!(acc.amount(), 40);
    assert!(!acc.is_zero());
}

#[test]
fn chips_split_returns_share_and_remainder() {
    assert_eq!(Chips::new(151).split(2), (Chips::new(75), Chips::new(1)));
    assert_eq!(Chips::new(150).split(3), (Chips::new(50), Chips::ZERO));
    // деление на ноль не теряет фишки
    assert_eq!(Chips::new(10).split(0), (Chips::ZERO, Chips::new(10)));
}

#[test]
fn chips_halved_rounds_down() {
    assert_eq!(Chips::new(51).halved(), Chips::new(25));
}

//
// card.rs
//

#[test]
fn card_display_and_parse_roundtrip() {
    let cards = [
        Card::new(Rank::Ace, Suit::Hearts),    // Ah
        Card::new(Rank::Ten, Suit::Spades),    // Ts
        Card::new(Rank::Two, Suit::Clubs),     // 2c
        Card::new(Rank::Nine, Suit::Diamonds), // 9d
    ];

    for card in cards {
        let s = card.to_string();
        let parsed: Card = s.parse().expect("parse Card from Display string");
        assert_eq!(parsed, card);
    }

    assert!("".parse::<Card>().is_err());
    assert!("A".parse::<Card>().is_err());
    assert!("Axh".parse::<Card>().is_err());
    assert!("1h".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

#[test]
fn parse_cards_reads_a_whole_board() {
    let board = parse_cards("3s 3h 8h 2s 4c").expect("valid board");
    assert_eq!(board.len(), 5);
    assert_eq!(board[0], Card::new(Rank::Three, Suit::Spades));
    assert_eq!(board[4], Card::new(Rank::Four, Suit::Clubs));

    assert!(parse_cards("3s xx").is_err());
}

//
// deck.rs
//

#[test]
fn standard_deck_has_52_unique_cards() {
    let mut deck = Deck::standard_52();
    assert_eq!(deck.remaining(), 52);

    let mut seen = std::collections::HashSet::new();
    while let Some(card) = deck.draw_one() {
        assert!(seen.insert(card.to_string()), "дубль карты {card}");
    }
    assert_eq!(seen.len(), 52);
    assert!(deck.is_empty());
}

#[test]
fn deck_draws_in_listed_order() {
    let cards = parse_cards("As Kd 7c").unwrap();
    let mut deck = Deck::from_cards(cards.clone());

    assert_eq!(deck.draw_one(), Some(cards[0]));
    assert_eq!(deck.draw_n(2), vec![cards[1], cards[2]]);
    assert_eq!(deck.draw_one(), None);
}

//
// player.rs
//

#[test]
fn player_equality_ignores_stack() {
    let a = Player::new(7, "alice", Chips::new(1000));
    let b = Player::new(7, "alice", Chips::new(5));
    let c = Player::new(8, "alice", Chips::new(1000));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn player_debit_and_credit_move_chips_explicitly() {
    let mut player = Player::new(1, "bob", Chips::new(100));

    assert_eq!(player.debit(Chips::new(40)), Some(Chips::new(40)));
    assert_eq!(player.chip_stack(), Chips::new(60));

    // нехватка — отказ без изменений
    assert_eq!(player.debit(Chips::new(100)), None);
    assert_eq!(player.chip_stack(), Chips::new(60));

    player.credit(Chips::new(90));
    assert_eq!(player.chip_stack(), Chips::new(150));
    assert_eq!(player.winnings(), Chips::new(90));

    assert_eq!(player.debit_all(), Chips::new(150));
    assert!(player.chip_stack().is_zero());
}

//
// params.rs
//

#[test]
fn parameters_validation_catches_bad_setup() {
    assert_eq!(
        GameParameters::new(Chips::new(50), None, 1).unwrap_err(),
        ParametersError::TableTooSmall(1)
    );

    assert_eq!(
        GameParameters::new(Chips::new(50), Some(Chips::new(100)), 9).unwrap_err(),
        ParametersError::BlindsOutOfOrder {
            small: Chips::new(100),
            big: Chips::new(50),
        }
    );
}

#[test]
fn small_blind_defaults_to_half_big_blind() {
    let rules = GameParameters::new(Chips::new(50), None, 9).unwrap();
    assert_eq!(rules.small_blind(), Chips::new(25));
    assert_eq!(rules.big_blind(), Chips::new(50));

    // нулевой малый блайнд = «не задан»
    let rules = GameParameters::new(Chips::new(50), Some(Chips::ZERO), 9).unwrap();
    assert_eq!(rules.small_blind(), Chips::new(25));

    let rules = GameParameters::new(Chips::new(50), Some(Chips::new(10)), 9).unwrap();
    assert_eq!(rules.small_blind(), Chips::new(10));
}

//
// table.rs
//

fn table_of(n: usize) -> Table {
    let players = (1..=n as u64)
        .map(|id| Player::new(id, format!("p{id}"), Chips::new(1000)))
        .collect();
    Table::new(1, players)
}

#[test]
fn table_seats_follow_list_order() {
    let table = table_of(4);

    assert_eq!(table.find_seat(1), Some(0));
    assert_eq!(table.find_seat(4), Some(3));
    assert_eq!(table.find_seat(99), None);
    assert_eq!(table.players_sat_down().len(), 4);
}

#[test]
fn sat_out_players_leave_the_hand_but_keep_the_seat() {
    let mut table = table_of(4);
    table.sit_player_out(2);

    let sat_down: Vec<_> = table.players_sat_down().iter().map(|p| p.id()).collect();
    assert_eq!(sat_down, vec![1, 3, 4]);
    assert_eq!(table.players().len(), 4);

    table.sit_player_in(2);
    assert_eq!(table.sat_down_count(), 4);
}

#[test]
fn button_holder_skips_sat_out_seats() {
    let mut table = table_of(4);
    table.sit_player_out(1);

    assert_eq!(table.button(), 0);
    assert_eq!(table.button_holder().map(|p| p.id()), Some(2));
}

#[test]
fn move_button_wraps_around_the_table() {
    let mut table = table_of(3);
    table.move_button();
    assert_eq!(table.button(), 1);
    table.move_button();
    table.move_button();
    assert_eq!(table.button(), 0);
}

#[test]
fn next_sat_down_from_walks_the_ring() {
    let mut table = table_of(4);
    table.sit_player_out(3);

    assert_eq!(table.next_sat_down_from(1, true).map(|p| p.id()), Some(2));
    // место 2 (p3) пропускается
    assert_eq!(table.next_sat_down_from(1, false).map(|p| p.id()), Some(4));
    assert_eq!(table.next_sat_down_from(3, false).map(|p| p.id()), Some(1));
}
