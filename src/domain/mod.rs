//! Доменная модель: фишки, карты, колода, игроки, стол, правила игры.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod params;
pub mod player;
pub mod table;

/// Базовые идентификаторы.
pub type PlayerId = u64;
pub type TableId = u64;
pub type RoundId = u64;

/// Номер места за столом — индекс в списке посадки.
pub type SeatIndex = usize;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use params::*;
pub use player::*;
pub use table::*;
