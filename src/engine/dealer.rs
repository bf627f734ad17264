use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, HandEvaluation};
use crate::domain::PlayerId;
use crate::engine::RandomSource;
use crate::eval::evaluate_best_hand;

/// Дилер раунда: колода, сожжённые карты, борд и розданные руки.
///
/// Дилер ничего не знает про ставки и банки — это чистая работа с картами.
/// Колода передаётся готовой (перемешанной или тестовой), поэтому раздачи
/// воспроизводимы.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dealer {
    deck: Deck,
    burn: Vec<Card>,
    community: Vec<Card>,
    hands: Vec<Hand>,
}

impl Dealer {
    pub fn start_work(deck: Deck) -> Self {
        Self {
            deck,
            burn: Vec::new(),
            community: Vec::new(),
            hands: Vec::new(),
        }
    }

    /// Перемешать нерозданную часть колоды.
    pub fn shuffle_deck<R: RandomSource>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
    }

    /// Раздать каждому игроку по две карты, по одной за круг.
    pub fn deal_hands(&mut self, players: &[PlayerId]) {
        let mut cards: Vec<Vec<Card>> = vec![Vec::with_capacity(2); players.len()];

        for _ in 0..2 {
            for hand in cards.iter_mut() {
                if let Some(card) = self.deck.draw_one() {
                    hand.push(card);
                }
            }
        }

        for (player_id, hand) in players.iter().zip(cards) {
            self.hands.push(Hand::new(*player_id, hand));
        }
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn player_hand(&self, player_id: PlayerId) -> Option<&Hand> {
        self.hands.iter().find(|h| h.player_id == player_id)
    }

    /// Сжечь одну карту и открыть n карт борда.
    pub fn deal_community_cards(&mut self, n: usize) {
        if let Some(card) = self.deck.draw_one() {
            self.burn.push(card);
        }
        let mut dealt = self.deck.draw_n(n);
        self.community.append(&mut dealt);
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }

    pub fn burn_cards(&self) -> &[Card] {
        &self.burn
    }

    /// Доложить борд до пяти карт (раздача закончилась раньше ривера).
    pub fn check_community_cards(&mut self) {
        while self.community.len() < 5 {
            let missing = if self.community.is_empty() { 3 } else { 1 };
            self.deal_community_cards(missing);
        }
    }

    /// Оценить руки против борда. Результаты отсортированы от сильнейшей;
    /// у равных рук одинаковый `rank`.
    pub fn evaluate_hands(&self, board: &[Card], hands: &[Hand]) -> Vec<HandEvaluation> {
        let mut evaluations: Vec<HandEvaluation> = hands
            .iter()
            .map(|hand| HandEvaluation {
                player_id: hand.player_id,
                rank: evaluate_best_hand(&hand.cards, board),
                hand: hand.clone(),
            })
            .collect();

        evaluations.sort_by(|a, b| b.rank.cmp(&a.rank));
        evaluations
    }
}
