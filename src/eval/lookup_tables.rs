use crate::domain::card::Rank;

/// Битовая маска рангов: 13 бит, бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска одного ранга.
pub fn rank_bit(rank: Rank) -> RankMask {
    1u16 << ((rank as u8) - 2)
}

/// Окно из пяти подряд идущих битов.
const RUN_OF_FIVE: RankMask = 0b1_1111;

/// Колесо A2345: туз + 2345.
const WHEEL: RankMask = 0b1_0000_0000_1111;

/// Найти стрит в маске рангов. Возвращает старшую карту стрита.
///
/// Проверяем от бродвея вниз, колесо отдельно (его старшая карта — пятёрка).
pub fn detect_straight(mask: RankMask) -> Option<Rank> {
    for high in (6u8..=14).rev() {
        let window = RUN_OF_FIVE << (high - 6);
        if mask & window == window {
            return Rank::from_value(high);
        }
    }

    if mask & WHEEL == WHEEL {
        return Some(Rank::Five);
    }

    None
}
