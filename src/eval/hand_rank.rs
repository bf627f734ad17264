use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    fn from_id(id: u8) -> HandCategory {
        match id {
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::HighCard,
        }
    }
}

/// Упаковка силы руки в u32:
///
///   [категория: 4 бита][k0: 4][k1: 4][k2: 4][k3: 4][k4: 4]
///
/// Кикеры — от решающего к младшему (их может быть меньше пяти, хвост
/// забивается нулями: ранги начинаются с 2, ноль ни с чем не конфликтует).
/// Сравнение u32 == сравнение рук.
pub fn pack(category: HandCategory, kickers: &[Rank]) -> HandRank {
    debug_assert!(kickers.len() <= 5);

    let mut value = (category as u32) << 20;
    for (i, rank) in kickers.iter().take(5).enumerate() {
        value |= (*rank as u32) << (16 - 4 * i);
    }

    HandRank(value)
}

/// Достать категорию из упакованного значения.
pub fn hand_category(rank: HandRank) -> HandCategory {
    HandCategory::from_id(((rank.0 >> 20) & 0x0F) as u8)
}

/// Человекочитаемое название руки.
/// (Раскрасить по конкретным картам можно на уровне фронта.)
pub fn describe_hand(rank: HandRank) -> String {
    let name = match hand_category(rank) {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
    };
    name.to_string()
}
