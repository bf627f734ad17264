use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Колода карт: упорядоченный список + курсор раздачи.
///
/// Карты раздаются «с головы» списка (первая перечисленная — первая
/// розданная), поэтому тестовые колоды из `from_cards` читаются сверху вниз.
/// Перемешивание — через `RandomSource` из infra, не здесь зашитый rand.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// Стандартная 52-карточная колода:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards, next: 0 }
    }

    /// Колода с заранее заданным порядком — для тестов и реплея.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards, next: 0 }
    }

    /// Сколько карт ещё не роздано.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Перемешать нерозданную часть колоды.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards[self.next..]);
    }

    /// Выдать одну карту сверху колоды.
    pub fn draw_one(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied();
        if card.is_some() {
            self.next += 1;
        }
        card
    }

    /// Выдать n карт сверху (меньше, если колода кончилась).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            match self.draw_one() {
                Some(card) => taken.push(card),
                None => break,
            }
        }
        taken
    }
}
