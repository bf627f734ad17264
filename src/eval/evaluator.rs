use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::{pack, HandCategory};
use super::lookup_tables::{detect_straight, rank_bit, RankMask};

/// Лучшая 5-карточная рука из карманных карт и борда.
///
/// Ожидается 5–7 карт суммарно (2 карманные + 3..5 борда); перебираем все
/// пятёрки и берём максимум.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all: Vec<Card> = Vec::with_capacity(hole.len() + board.len());
    all.extend_from_slice(hole);
    all.extend_from_slice(board);

    let n = all.len();
    debug_assert!(
        (5..=7).contains(&n),
        "evaluate_best_hand expects 5 to 7 cards"
    );

    // Каждая пятёрка = все карты минус (n - 5) выкинутых индексов.
    let mut best = HandRank(0);
    match n {
        6 => {
            for skip in 0..n {
                best = best.max(evaluate_five(&collect_five(&all, skip, skip)));
            }
        }
        7 => {
            for a in 0..(n - 1) {
                for b in (a + 1)..n {
                    best = best.max(evaluate_five(&collect_five(&all, a, b)));
                }
            }
        }
        _ => {
            best = evaluate_five(&collect_five(&all, n, n));
        }
    }

    best
}

/// Собрать пятёрку, пропустив индексы `skip_a` и `skip_b`
/// (индекс за пределами массива — «ничего не пропускать»).
fn collect_five(all: &[Card], skip_a: usize, skip_b: usize) -> Vec<Card> {
    all.iter()
        .enumerate()
        .filter(|(i, _)| *i != skip_a && *i != skip_b)
        .map(|(_, c)| *c)
        .collect()
}

/// Оценка ровно пяти карт.
fn evaluate_five(cards: &[Card]) -> HandRank {
    debug_assert_eq!(cards.len(), 5);

    let mut counts = [0u8; 15]; // индексы 2..14
    let mut mask: RankMask = 0;
    let mut is_flush = true;

    for card in cards {
        counts[card.rank as usize] += 1;
        mask |= rank_bit(card.rank);
        if card.suit != cards[0].suit {
            is_flush = false;
        }
    }

    let straight_high = detect_straight(mask);

    // Группы (сколько, какой ранг), сильнейшие сначала.
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for v in (2u8..=14).rev() {
        let c = counts[v as usize];
        if c > 0 {
            if let Some(rank) = Rank::from_value(v) {
                groups.push((c, rank));
            }
        }
    }
    groups.sort_by(|a, b| b.cmp(a));

    if is_flush {
        if let Some(high) = straight_high {
            return pack(HandCategory::StraightFlush, &[high]);
        }
    }

    let counts_only: Vec<u8> = groups.iter().map(|(c, _)| *c).collect();
    let ranks_only: Vec<Rank> = groups.iter().map(|(_, r)| *r).collect();

    match counts_only.as_slice() {
        [4, 1] => pack(HandCategory::FourOfAKind, &ranks_only),
        [3, 2] => pack(HandCategory::FullHouse, &ranks_only),
        _ if is_flush => pack(HandCategory::Flush, &ranks_only),
        _ => match straight_high {
            Some(high) => pack(HandCategory::Straight, &[high]),
            None => match counts_only.as_slice() {
                [3, 1, 1] => pack(HandCategory::ThreeOfAKind, &ranks_only),
                [2, 2, 1] => pack(HandCategory::TwoPair, &ranks_only),
                [2, 1, 1, 1] => pack(HandCategory::OnePair, &ranks_only),
                _ => pack(HandCategory::HighCard, &ranks_only),
            },
        },
    }
}
