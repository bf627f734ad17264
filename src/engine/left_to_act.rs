use serde::{Deserialize, Serialize};

use crate::domain::{PlayerId, SeatIndex};

/// Последнее действие игрока на текущей улице.
///
/// «Должен ходить» — это NotYetActed и оба блайнда: блайнд ставится
/// вслепую и не закрывает ход. Actioned/AggressivelyActioned закрывают
/// улицу для игрока, AllIn — терминален до конца раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnState {
    NotYetActed,
    SmallBlindPosted,
    BigBlindPosted,
    /// Колл или чек.
    Actioned,
    /// Рейз: заново открывает ход всем остальным.
    AggressivelyActioned,
    AllIn,
}

impl TurnState {
    /// Игрок с таким состоянием ещё должен сделать ход на улице.
    pub fn owes_action(self) -> bool {
        matches!(
            self,
            TurnState::NotYetActed | TurnState::SmallBlindPosted | TurnState::BigBlindPosted
        )
    }
}

/// Строка в очереди хода: место, игрок, его состояние.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnEntry {
    pub seat: SeatIndex,
    pub player_id: PlayerId,
    pub state: TurnState,
}

/// Очередь хода: фиксированный порядок мест + курсор ротации.
///
/// Сфолдившие и вышедшие из игры здесь просто отсутствуют. Курсор всегда
/// указывает на место сразу после последнего походившего — следующий
/// ходящий ищется по кругу от него.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeftToAct {
    entries: Vec<TurnEntry>,
    cursor: usize,
}

impl LeftToAct {
    pub fn new() -> Self {
        Self::default()
    }

    /// Посадить игроков в очередь, все в состоянии NotYetActed.
    /// Порядок — как передан (ожидается порядок мест).
    pub fn setup(&mut self, players: impl IntoIterator<Item = (SeatIndex, PlayerId)>) {
        self.entries = players
            .into_iter()
            .map(|(seat, player_id)| TurnEntry {
                seat,
                player_id,
                state: TurnState::NotYetActed,
            })
            .collect();
        self.cursor = 0;
    }

    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.entries.iter().any(|e| e.player_id == player_id)
    }

    /// Сколько игроков ушло в all-in за раздачу (состояние липкое).
    pub fn all_in_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.state == TurnState::AllIn)
            .count()
    }

    pub fn state_of(&self, player_id: PlayerId) -> Option<TurnState> {
        self.entries
            .iter()
            .find(|e| e.player_id == player_id)
            .map(|e| e.state)
    }

    /// Упорядочить очередь по местам (перед ротацией на новой улице).
    pub fn sort_by_seats(&mut self) {
        self.entries.sort_by_key(|e| e.seat);
    }

    /// Повернуть очередь так, чтобы она начиналась с первого места >= seat
    /// (если таких нет — порядок остаётся с наименьшего места). Курсор
    /// встаёт в начало.
    pub fn reset_player_list_from_seat(&mut self, seat: SeatIndex) {
        let pivot = self
            .entries
            .iter()
            .position(|e| e.seat >= seat)
            .unwrap_or(0);
        self.entries.rotate_left(pivot);
        self.cursor = 0;
    }

    /// Начало новой улицы: всем, кто не в all-in, снова предстоит ход.
    /// All-in остаётся — такому игроку нечем ходить до конца раздачи.
    pub fn reset_actions(&mut self) {
        for entry in &mut self.entries {
            if entry.state != TurnState::AllIn {
                entry.state = TurnState::NotYetActed;
            }
        }
        self.cursor = 0;
    }

    /// Игрок походил: выставить состояние и передвинуть курсор за него.
    /// Рейз заново открывает ход всем остальным, кто не в all-in.
    pub fn player_has_actioned(&mut self, player_id: PlayerId, new_state: TurnState) {
        let Some(pos) = self.entries.iter().position(|e| e.player_id == player_id) else {
            return;
        };

        self.entries[pos].state = new_state;

        if new_state == TurnState::AggressivelyActioned {
            for (i, entry) in self.entries.iter_mut().enumerate() {
                if i != pos && entry.state != TurnState::AllIn {
                    entry.state = TurnState::NotYetActed;
                }
            }
        }

        self.cursor = (pos + 1) % self.entries.len().max(1);
    }

    /// Заново открыть ход всем, кроме указанного игрока и all-in.
    /// Нужно для all-in, который перебил текущую ставку: формально это не
    /// рейз, но отвечать на него остальные обязаны. Курсор не трогаем.
    pub fn reopen_action_except(&mut self, player_id: PlayerId) {
        for entry in &mut self.entries {
            if entry.player_id != player_id && entry.state != TurnState::AllIn {
                entry.state = TurnState::NotYetActed;
            }
        }
    }

    /// Убрать игрока из очереди (фолд или sit out) до конца раздачи.
    pub fn remove_player(&mut self, player_id: PlayerId) {
        let Some(pos) = self.entries.iter().position(|e| e.player_id == player_id) else {
            return;
        };

        self.entries.remove(pos);

        if pos < self.cursor {
            self.cursor -= 1;
        }
        if self.cursor >= self.entries.len() {
            self.cursor = 0;
        }
    }

    /// Следующий игрок, который должен ходить, начиная с курсора по кругу.
    /// `None` — раунд ставок на улице закрыт.
    pub fn next_player(&self) -> Option<PlayerId> {
        let n = self.entries.len();
        for i in 0..n {
            let entry = &self.entries[(self.cursor + i) % n];
            if entry.state.owes_action() {
                return Some(entry.player_id);
            }
        }
        None
    }
}
