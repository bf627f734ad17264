// src/bin/holdem_dev_cli.rs

use holdem_engine::api::snapshot_round;
use holdem_engine::domain::{Chips, Deck, GameParameters, Player, Table};
use holdem_engine::engine::{Dealer, Round, RoundError};
use holdem_engine::infra::{IdGenerator, SystemRng};

fn main() {
    env_logger::init();

    println!("holdem_dev_cli: разыгрываем демонстрационную раздачу…");

    let id_gen = IdGenerator::new();
    let mut rng = SystemRng;

    // 1. Стол на четверых, стеки по 10k.
    let names = ["alice", "bob", "carol", "dave"];
    let players: Vec<Player> = names
        .iter()
        .map(|name| Player::new(id_gen.next_player_id(), *name, Chips::new(10_000)))
        .collect();
    let table = Table::new(id_gen.next_table_id(), players);

    let rules = match GameParameters::new(Chips::new(100), Some(Chips::new(50)), 9) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("bad game parameters: {err}");
            return;
        }
    };

    // 2. Перемешанная колода и раунд.
    let mut deck = Deck::standard_52();
    deck.shuffle(&mut rng);

    let round_id = id_gen.next_round_id();
    let mut round = match Round::start(round_id, table, rules, Dealer::start_work(deck)) {
        Ok(round) => round,
        Err(err) => {
            eprintln!("cannot start round: {err}");
            return;
        }
    };

    if let Err(err) = play_check_call_hand(&mut round) {
        eprintln!("hand aborted: {err}");
        return;
    }

    // 4. Снимок раунда в JSON — то, что уехало бы внешнему хранилищу.
    match serde_json::to_string_pretty(&snapshot_round(&round)) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot failed: {err}"),
    }

    println!();
    println!("================ RESULT =================");
    for player in round.table().players() {
        println!(
            "{:>8}: stack {:>6} (won {})",
            player.name(),
            player.chip_stack(),
            player.winnings()
        );
    }
    let winners: Vec<&str> = round.winning_players().iter().map(|p| p.name()).collect();
    println!("winners: {winners:?}");
}

/// Базовый сценарий: блайнды, все коллируют, дальше чеки до ривера.
fn play_check_call_hand(round: &mut Round) -> Result<(), RoundError> {
    round.deal_hands();

    let sb = round
        .player_with_small_blind()
        .map(|p| p.id())
        .ok_or(RoundError::NotEnoughPlayers)?;
    let bb = round
        .player_with_big_blind()
        .map(|p| p.id())
        .ok_or(RoundError::NotEnoughPlayers)?;

    round.post_small_blind(sb)?;
    round.post_big_blind(bb)?;

    check_or_call_until_street_ends(round)?;
    round.deal_flop()?;

    check_or_call_until_street_ends(round)?;
    round.deal_turn()?;

    check_or_call_until_street_ends(round)?;
    round.deal_river()?;

    check_or_call_until_street_ends(round)?;
    round.end();
    Ok(())
}

/// Пока есть чей-то ход: чекаем, если нечего доплачивать, иначе коллируем.
fn check_or_call_until_street_ends(round: &mut Round) -> Result<(), RoundError> {
    while let Some(player) = round.whos_turn_is_it() {
        let player_id = player.id();
        match round.player_checks(player_id) {
            Ok(()) => {}
            Err(RoundError::CheckNotAllowed) => round.player_calls(player_id)?,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
