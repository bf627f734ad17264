use serde::Serialize;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{Hand, HandEvaluation};
use crate::domain::params::GameParameters;
use crate::domain::player::Player;
use crate::domain::table::Table;
use crate::domain::{PlayerId, RoundId, SeatIndex, TableId};
use crate::engine::actions::ActionCollection;
use crate::engine::left_to_act::TurnEntry;
use crate::engine::pot::ChipPot;
use crate::engine::round::Round;

/// Снимок игрока для выгрузки.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerDto {
    pub id: PlayerId,
    pub name: String,
    pub chip_stack: Chips,
    pub winnings: Chips,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
            chip_stack: player.chip_stack(),
            winnings: player.winnings(),
        }
    }
}

/// Снимок стола.
#[derive(Clone, Debug, Serialize)]
pub struct TableSnapshot {
    pub id: TableId,
    pub button: SeatIndex,
    pub players: Vec<PlayerDto>,
    pub players_sat_down: Vec<PlayerId>,
}

impl From<&Table> for TableSnapshot {
    fn from(table: &Table) -> Self {
        Self {
            id: table.id(),
            button: table.button(),
            players: table.players().iter().map(PlayerDto::from).collect(),
            players_sat_down: table.players_sat_down().iter().map(|p| p.id()).collect(),
        }
    }
}

/// Снимок ставки игрока на текущей улице.
#[derive(Clone, Debug, Serialize)]
pub struct BetStackDto {
    pub player_id: PlayerId,
    pub chips: Chips,
}

/// Снимок банка.
#[derive(Clone, Debug, Serialize)]
pub struct ChipPotDto {
    pub total: Chips,
    pub players: Vec<PlayerId>,
}

impl From<&ChipPot> for ChipPotDto {
    fn from(pot: &ChipPot) -> Self {
        Self {
            total: pot.total(),
            players: pot.players().to_vec(),
        }
    }
}

/// Пополевой снимок раунда — всё, что нужно внешнему хранилищу или
/// клиенту. Это выгрузка, не формат загрузки: обратного разбора здесь нет.
#[derive(Clone, Debug, Serialize)]
pub struct RoundSnapshot {
    pub id: RoundId,
    pub table: TableSnapshot,
    pub bet_stacks: Vec<BetStackDto>,
    pub folded_players: Vec<PlayerDto>,
    pub players_still_in: Vec<PlayerDto>,
    pub winning_players: Vec<PlayerDto>,
    pub chip_pots: Vec<ChipPotDto>,
    pub current_pot: Option<ChipPotDto>,
    pub actions: ActionCollection,
    pub left_to_act: Vec<TurnEntry>,
    pub game_rules: GameParameters,
    pub player_with_button: Option<PlayerDto>,
    pub player_with_small_blind: Option<PlayerDto>,
    pub player_with_big_blind: Option<PlayerDto>,
    pub community_cards: Vec<Card>,
    pub showdown_hands: Vec<Hand>,
    pub evaluations: Vec<HandEvaluation>,
}

/// Собрать снимок раунда.
pub fn snapshot_round(round: &Round) -> RoundSnapshot {
    RoundSnapshot {
        id: round.id(),
        table: TableSnapshot::from(round.table()),
        bet_stacks: round
            .bet_stacks()
            .iter()
            .map(|(player_id, chips)| BetStackDto {
                player_id: *player_id,
                chips: *chips,
            })
            .collect(),
        folded_players: round.folded_players().into_iter().map(PlayerDto::from).collect(),
        players_still_in: round
            .players_still_in()
            .into_iter()
            .map(PlayerDto::from)
            .collect(),
        winning_players: round
            .winning_players()
            .into_iter()
            .map(PlayerDto::from)
            .collect(),
        chip_pots: round.chip_pots().iter().map(ChipPotDto::from).collect(),
        current_pot: round.current_pot().map(ChipPotDto::from),
        actions: round.actions().clone(),
        left_to_act: round.left_to_act().entries().to_vec(),
        game_rules: round.game_rules().clone(),
        player_with_button: round.player_with_button().map(PlayerDto::from),
        player_with_small_blind: round.player_with_small_blind().map(PlayerDto::from),
        player_with_big_blind: round.player_with_big_blind().map(PlayerDto::from),
        community_cards: round.dealer().community_cards().to_vec(),
        showdown_hands: round.showdown_hands().to_vec(),
        evaluations: round.evaluations().to_vec(),
    }
}
