//! Тесты инфраструктуры: RNG и генерация ID.

use holdem_engine::domain::Deck;
use holdem_engine::infra::{DeterministicRng, IdGenerator, NoShuffleRng};

#[test]
fn deterministic_rng_reproduces_the_same_shuffle() {
    let mut deck_a = Deck::standard_52();
    let mut deck_b = Deck::standard_52();

    deck_a.shuffle(&mut DeterministicRng::from_seed(77));
    deck_b.shuffle(&mut DeterministicRng::from_seed(77));
    assert_eq!(deck_a, deck_b, "одинаковый seed — одинаковая колода");

    let mut deck_c = Deck::standard_52();
    deck_c.shuffle(&mut DeterministicRng::from_seed(78));
    assert_ne!(deck_a, deck_c, "другой seed — другой порядок");
}

#[test]
fn no_shuffle_rng_keeps_the_deck_as_is() {
    let mut shuffled = Deck::standard_52();
    shuffled.shuffle(&mut NoShuffleRng);
    assert_eq!(shuffled, Deck::standard_52());
}

#[test]
fn id_generator_counts_monotonically() {
    let ids = IdGenerator::new();

    assert_eq!(ids.next_round_id(), 1);
    assert_eq!(ids.next_round_id(), 2);
    assert_eq!(ids.next_player_id(), 1);
    assert_eq!(ids.next_table_id(), 1);
    assert_eq!(ids.next_round_id(), 3);
}
