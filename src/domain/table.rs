use serde::{Deserialize, Serialize};

use crate::domain::player::Player;
use crate::domain::{PlayerId, SeatIndex, TableId};

/// Стол: посадка игроков, кнопка дилера, кто временно вышел из игры.
///
/// Номер места (seat) — это индекс игрока в `players`; порядок вектора и
/// есть порядок посадки. Стол живёт дольше одной раздачи: стек игроков и
/// позиция кнопки переносятся из раунда в раунд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Table {
    id: TableId,
    players: Vec<Player>,
    /// Игроки, сидящие за столом, но пропускающие раздачу (sit out).
    sat_out: Vec<PlayerId>,
    /// Место с кнопкой дилера.
    button: SeatIndex,
}

impl Table {
    pub fn new(id: TableId, players: Vec<Player>) -> Self {
        Self {
            id,
            players,
            sat_out: Vec::new(),
            button: 0,
        }
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    pub fn find_player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Место игрока за столом (индекс в списке посадки).
    pub fn find_seat(&self, player_id: PlayerId) -> Option<SeatIndex> {
        self.players.iter().position(|p| p.id() == player_id)
    }

    pub fn is_sat_out(&self, player_id: PlayerId) -> bool {
        self.sat_out.contains(&player_id)
    }

    /// Игроки, участвующие в раздаче, в порядке мест.
    pub fn players_sat_down(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| !self.is_sat_out(p.id()))
            .collect()
    }

    pub fn sat_down_count(&self) -> usize {
        self.players_sat_down().len()
    }

    /// Вывести игрока из раздачи (sit out). Повторный вызов — no-op.
    pub fn sit_player_out(&mut self, player_id: PlayerId) {
        if !self.sat_out.contains(&player_id) {
            self.sat_out.push(player_id);
        }
    }

    /// Вернуть игрока в игру к следующей раздаче.
    pub fn sit_player_in(&mut self, player_id: PlayerId) {
        self.sat_out.retain(|id| *id != player_id);
    }

    pub fn button(&self) -> SeatIndex {
        self.button
    }

    pub fn set_button(&mut self, seat: SeatIndex) {
        self.button = seat;
    }

    /// Отдать кнопку конкретному игроку.
    pub fn give_button_to(&mut self, player_id: PlayerId) -> bool {
        match self.find_seat(player_id) {
            Some(seat) => {
                self.button = seat;
                true
            }
            None => false,
        }
    }

    /// Сдвинуть кнопку на следующее место по кругу (конец раздачи).
    pub fn move_button(&mut self) {
        if self.players.is_empty() {
            return;
        }
        self.button = (self.button + 1) % self.players.len();
    }

    /// Игрок на кнопке: первый сидящий в игре, начиная с места кнопки.
    pub fn button_holder(&self) -> Option<&Player> {
        self.next_sat_down_from(self.button, true)
    }

    /// Обход стола по кругу: первый сидящий в игре, начиная с `seat`
    /// (включая или исключая само место).
    pub fn next_sat_down_from(&self, seat: SeatIndex, include_start: bool) -> Option<&Player> {
        let n = self.players.len();
        if n == 0 {
            return None;
        }

        let mut idx = if include_start { seat % n } else { (seat + 1) % n };
        for _ in 0..n {
            let player = &self.players[idx];
            if !self.is_sat_out(player.id()) {
                return Some(player);
            }
            idx = (idx + 1) % n;
        }

        None
    }
}
