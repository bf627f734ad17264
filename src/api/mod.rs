//! Выгрузка состояния раунда наружу (снимки для хранилища/клиента).

pub mod dto;

pub use dto::{snapshot_round, PlayerDto, RoundSnapshot, TableSnapshot};
