//! Механика раздачи: очередь хода, ставки, банки, шоудаун.
//!
//! Центральный объект — `Round`. Основные операции:
//!   - `Round::start` — начать раздачу;
//!   - `post_small_blind` / `post_big_blind` / действия игроков;
//!   - `deal_flop` / `deal_turn` / `deal_river` — улицы;
//!   - `end` — сбор банков, шоудаун, выплаты.

pub mod actions;
pub mod dealer;
pub mod errors;
pub mod left_to_act;
pub mod pot;
pub mod round;

pub use actions::{Action, ActionCollection, ActionKind, Actor};
pub use dealer::Dealer;
pub use errors::RoundError;
pub use left_to_act::{LeftToAct, TurnState};
pub use pot::{ChipPot, ChipPotCollection, PotId};
pub use round::Round;

/// Интерфейс источника случайности для движка.
/// Реализации — в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
