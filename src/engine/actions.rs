use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Кто совершил действие: игрок или дилер (раздача борда).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Actor {
    Player(PlayerId),
    Dealer,
}

/// Тип события в раздаче.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActionKind {
    SmallBlind,
    BigBlind,
    Ante,
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
    DealtFlop,
    DealtTurn,
    DealtRiver,
}

/// Запись в журнале раздачи: кто, что и с чем (фишки / карты борда).
/// Создаётся один раз и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Action {
    actor: Actor,
    kind: ActionKind,
    chips: Option<Chips>,
    cards: Option<Vec<Card>>,
}

impl Action {
    pub fn player(player_id: PlayerId, kind: ActionKind) -> Self {
        Self {
            actor: Actor::Player(player_id),
            kind,
            chips: None,
            cards: None,
        }
    }

    pub fn player_with_chips(player_id: PlayerId, kind: ActionKind, chips: Chips) -> Self {
        Self {
            actor: Actor::Player(player_id),
            kind,
            chips: Some(chips),
            cards: None,
        }
    }

    pub fn dealer(kind: ActionKind, cards: Vec<Card>) -> Self {
        Self {
            actor: Actor::Dealer,
            kind,
            chips: None,
            cards: Some(cards),
        }
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn chips(&self) -> Option<Chips> {
        self.chips
    }

    pub fn cards(&self) -> Option<&[Card]> {
        self.cards.as_deref()
    }
}

/// Журнал действий раунда: только добавление, порядок сохраняется.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionCollection {
    actions: Vec<Action>,
}

impl ActionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    /// Было ли в журнале действие такого типа.
    pub fn has_action(&self, kind: ActionKind) -> bool {
        self.actions.iter().any(|a| a.kind() == kind)
    }

    /// Индекс первого действия игрока после позиции `after` в журнале.
    /// Нужно внешним планировщикам (таймауты хода и т.п.).
    pub fn player_action_after_index(&self, player_id: PlayerId, after: usize) -> Option<usize> {
        self.actions
            .iter()
            .enumerate()
            .skip(after + 1)
            .find(|(_, a)| a.actor() == Actor::Player(player_id))
            .map(|(i, _)| i)
    }
}
