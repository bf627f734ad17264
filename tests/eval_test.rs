//! Тесты оценщика рук (crate::eval).

use holdem_engine::domain::{parse_cards, Card, HandRank};
use holdem_engine::eval::{evaluate_best_hand, hand_category, HandCategory};

/// Утилита: оценить "hole | board" из строк.
fn eval(hole: &str, board: &str) -> HandRank {
    let hole: Vec<Card> = parse_cards(hole).expect("hole");
    let board: Vec<Card> = parse_cards(board).expect("board");
    evaluate_best_hand(&hole, &board)
}

#[test]
fn recognizes_every_category() {
    let cases = [
        ("2c 7d", "9h Jc Ks 4d 5s", HandCategory::HighCard),
        ("As Ad", "9h Jc Ks 4d 5s", HandCategory::OnePair),
        ("As Ad", "9h 9c Ks 4d 5s", HandCategory::TwoPair),
        ("As Ad", "Ah Jc Ks 4d 5s", HandCategory::ThreeOfAKind),
        ("8s 9d", "6h 7c Ts 2d 3s", HandCategory::Straight),
        ("As 9s", "2s 5s Js 8d 3c", HandCategory::Flush),
        ("As Ad", "Ah Jc Js 4d 5s", HandCategory::FullHouse),
        ("As Ad", "Ah Ac Ks 4d 5s", HandCategory::FourOfAKind),
        ("8s 9s", "6s 7s Ts 2d 3c", HandCategory::StraightFlush),
    ];

    for (hole, board, expected) in cases {
        let rank = eval(hole, board);
        assert_eq!(
            hand_category(rank),
            expected,
            "{hole} | {board} должно быть {expected:?}"
        );
    }
}

#[test]
fn wheel_is_the_lowest_straight() {
    let wheel = eval("As 2d", "3h 4c 5s Kd 9h");
    assert_eq!(hand_category(wheel), HandCategory::Straight);

    let six_high = eval("2s 6d", "3h 4c 5s Kd 9h");
    assert!(six_high > wheel, "стрит до шестёрки сильнее колеса");
}

#[test]
fn kickers_break_ties_inside_a_category() {
    // одинаковая пара, разный кикер
    let ace_kicker = eval("8s Ad", "8h Jc 4s 2d 7h");
    let king_kicker = eval("8c Kd", "8h Jc 4s 2d 7h");
    assert!(ace_kicker > king_kicker);

    // старшая пара бьёт младшую
    let pair_of_jacks = eval("Js Jd", "8h 3c 4s 2d 7h");
    let pair_of_eights = eval("8s 8d", "Jh 3c 4s 2d 7h");
    assert!(pair_of_jacks > pair_of_eights);
}

#[test]
fn category_order_is_respected() {
    let flush = eval("As 9s", "2s 5s Js 8d 3c");
    let straight = eval("8s 9d", "6h 7c Ts 2d 3s");
    let trips = eval("As Ad", "Ah Jc Ks 4d 5s");

    assert!(flush > straight);
    assert!(straight > trips);
}

#[test]
fn board_can_play_for_both_players() {
    // борд-стрит: у обоих лучшая рука — сам борд
    let a = eval("2c 3d", "Ts Jh Qd Kc Ad");
    let b = eval("2h 3s", "Ts Jh Qd Kc Ad");
    assert_eq!(a, b);
    assert_eq!(hand_category(a), HandCategory::Straight);
}

#[test]
fn describe_hand_names_the_category() {
    use holdem_engine::eval::describe_hand;

    assert_eq!(describe_hand(eval("As Ad", "9h Jc Ks 4d 5s")), "One pair");
    assert_eq!(describe_hand(eval("8s 9s", "6s 7s Ts 2d 3c")), "Straight flush");
}

#[test]
fn best_five_are_chosen_from_seven() {
    // трипс девяток + пара пятёрок среди семи карт → фулл-хаус
    let rank = eval("9s 9d", "9h 5c 5s Kd 2h");
    assert_eq!(hand_category(rank), HandCategory::FullHouse);
}
