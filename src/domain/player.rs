use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Игрок за столом: идентичность + собственный стек фишек.
///
/// Стек принадлежит только игроку; наружу фишки уходят исключительно через
/// `debit`, приходят через `credit`. Равенство игроков — по (id, name),
/// содержимое стека в сравнении не участвует.
#[derive(Clone, Debug, Serialize, Deserialize, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    stack: Chips,
    /// Сколько игрок выиграл за текущую раздачу (для истории/выгрузки).
    winnings: Chips,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, stack: Chips) -> Self {
        Self {
            id,
            name: name.into(),
            stack,
            winnings: Chips::ZERO,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chip_stack(&self) -> Chips {
        self.stack
    }

    pub fn winnings(&self) -> Chips {
        self.winnings
    }

    /// Списать фишки со стека. `None`, если столько нет — стек не трогаем.
    #[must_use]
    pub fn debit(&mut self, chips: Chips) -> Option<Chips> {
        let rest = self.stack.checked_sub(chips)?;
        self.stack = rest;
        Some(chips)
    }

    /// Списать весь стек (all-in). Возвращает списанную сумму.
    pub fn debit_all(&mut self) -> Chips {
        core::mem::replace(&mut self.stack, Chips::ZERO)
    }

    /// Зачислить выигрыш: фишки в стек + пометка в winnings.
    pub fn credit(&mut self, chips: Chips) {
        self.stack += chips;
        self.winnings += chips;
    }

    /// Сбросить счётчик выигрыша (начало новой раздачи).
    pub fn reset_winnings(&mut self) {
        self.winnings = Chips::ZERO;
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
