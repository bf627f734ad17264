use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{PlayerId, RoundId, TableId};

/// Простая генерация ID на монотонных счётчиках.
/// Удобно для локальных запусков, CLI и тестов; во внешней системе
/// идентификаторы обычно приходят снаружи.
#[derive(Debug, Default)]
pub struct IdGenerator {
    table_counter: AtomicU64,
    player_counter: AtomicU64,
    round_counter: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn next_table_id(&self) -> TableId {
        self.table_counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[inline]
    pub fn next_player_id(&self) -> PlayerId {
        self.player_counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[inline]
    pub fn next_round_id(&self) -> RoundId {
        self.round_counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}
