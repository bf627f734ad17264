use thiserror::Error;

use crate::domain::{Chips, PlayerId, Street};

/// Ошибки раунда. Все синхронные и без ретраев: действие либо прошло
/// целиком, либо отклонено до каких-либо изменений состояния.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("player {0} is trying to act out of turn")]
    OutOfTurn(PlayerId),

    #[error("no player actions are needed")]
    NoActionsNeeded,

    #[error("raise of {given} is below the current highest bet of {highest}")]
    InvalidRaise { given: Chips, highest: Chips },

    #[error("player {player} does not have {needed} chips")]
    InsufficientChips { player: PlayerId, needed: Chips },

    #[error("the {0:?} has already been dealt")]
    StreetAlreadyDealt(Street),

    #[error("cannot deal the {wanted:?} with {community} community cards on the board")]
    StreetOutOfOrder { wanted: Street, community: usize },

    #[error("cannot check while a live bet is unmatched")]
    CheckNotAllowed,

    #[error("not enough players sat down to start a round")]
    NotEnoughPlayers,

    #[error("player {0} is not part of this round")]
    UnknownPlayer(PlayerId),
}
