use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Идентификатор банка внутри раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PotId(pub u32);

/// Банк: сумма фишек + игроки, претендующие на неё.
///
/// Претензия появляется вместе с первым внесением фишек; выигрывать банк
/// могут только не сфолдившие претенденты, но сами фишки сфолдивших
/// остаются внутри.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipPot {
    id: PotId,
    chips: Chips,
    players: Vec<PlayerId>,
}

impl ChipPot {
    fn new(id: PotId) -> Self {
        Self {
            id,
            chips: Chips::ZERO,
            players: Vec::new(),
        }
    }

    pub fn id(&self) -> PotId {
        self.id
    }

    pub fn total(&self) -> Chips {
        self.chips
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_zero()
    }

    /// Внести фишки от игрока. Игрок попадает в список претендентов
    /// один раз, сколько бы раз ни вносил.
    pub fn add_chips(&mut self, chips: Chips, player_id: PlayerId) {
        self.chips += chips;
        if !self.players.contains(&player_id) {
            self.players.push(player_id);
        }
    }
}

/// Набор банков раунда: арена с доступом по id, порядок создания
/// сохраняется (главный банк — первый). Банки не сливаются; после
/// выплаты банк удаляется из набора.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChipPotCollection {
    pots: Vec<ChipPot>,
    next_id: u32,
}

impl ChipPotCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Создать новый (пока пустой) банк и вернуть его id.
    pub fn create(&mut self) -> PotId {
        let id = PotId(self.next_id);
        self.next_id += 1;
        self.pots.push(ChipPot::new(id));
        id
    }

    pub fn get(&self, id: PotId) -> Option<&ChipPot> {
        self.pots.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PotId) -> Option<&mut ChipPot> {
        self.pots.iter_mut().find(|p| p.id == id)
    }

    /// Банк по порядковому номеру создания (0 — главный).
    pub fn get_index(&self, index: usize) -> Option<&ChipPot> {
        self.pots.get(index)
    }

    /// Главный (первый) банк.
    pub fn first_mut(&mut self) -> Option<&mut ChipPot> {
        self.pots.first_mut()
    }

    pub fn remove(&mut self, id: PotId) {
        self.pots.retain(|p| p.id != id);
    }

    /// Выкинуть банки с нулевой суммой (появляются при построении слоёв).
    pub fn drop_empty(&mut self) {
        self.pots.retain(|p| !p.is_empty());
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ChipPot> {
        self.pots.iter()
    }

    pub fn ids(&self) -> Vec<PotId> {
        self.pots.iter().map(|p| p.id).collect()
    }

    pub fn len(&self) -> usize {
        self.pots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pots.is_empty()
    }

    /// Суммарно фишек во всех банках.
    pub fn total(&self) -> Chips {
        self.pots.iter().map(|p| p.chips).sum()
    }
}
