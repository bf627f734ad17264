use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerId;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

/// Сила руки, упакованная в u32: сравнение чисел = сравнение рук.
/// Схему кодирования заполняет eval (категория + кикеры по 4 бита).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Карманные карты игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub player_id: PlayerId,
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(player_id: PlayerId, cards: Vec<Card>) -> Self {
        Self { player_id, cards }
    }
}

/// Результат оценки руки на шоудауне: кто, с какими картами, какой силы.
/// Копится в раунде для истории и выгрузки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvaluation {
    pub player_id: PlayerId,
    pub rank: HandRank,
    pub hand: Hand,
}
