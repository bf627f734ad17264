use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Ошибки конфигурации игры. Ловятся при создании параметров,
/// до старта раунда — во время игры их уже быть не может.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParametersError {
    #[error("table size {0} is below the minimum of 2")]
    TableTooSmall(usize),

    #[error("big blind ({big}) must be at least the small blind ({small})")]
    BlindsOutOfOrder { small: Chips, big: Chips },
}

/// Правила кеш-игры: блайнды и размер стола.
///
/// Малый блайнд можно не задавать — тогда он считается как половина
/// большого (целочисленно, с округлением вниз).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameParameters {
    small_blind: Option<Chips>,
    big_blind: Chips,
    table_size: usize,
}

impl GameParameters {
    pub fn new(
        big_blind: Chips,
        small_blind: Option<Chips>,
        table_size: usize,
    ) -> Result<Self, ParametersError> {
        if table_size < 2 {
            return Err(ParametersError::TableTooSmall(table_size));
        }
        if let Some(sb) = small_blind {
            if big_blind < sb {
                return Err(ParametersError::BlindsOutOfOrder {
                    small: sb,
                    big: big_blind,
                });
            }
        }

        // Нулевой малый блайнд приравниваем к «не задан».
        let small_blind = small_blind.filter(|sb| !sb.is_zero());

        Ok(Self {
            small_blind,
            big_blind,
            table_size,
        })
    }

    pub fn small_blind(&self) -> Chips {
        self.small_blind.unwrap_or_else(|| self.big_blind.halved())
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }
}
