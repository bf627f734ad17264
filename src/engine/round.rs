use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::{Hand, HandEvaluation, Street};
use crate::domain::params::GameParameters;
use crate::domain::player::Player;
use crate::domain::table::Table;
use crate::domain::{PlayerId, RoundId, SeatIndex};
use crate::engine::actions::{Action, ActionCollection, ActionKind};
use crate::engine::dealer::Dealer;
use crate::engine::errors::RoundError;
use crate::engine::left_to_act::{LeftToAct, TurnState};
use crate::engine::pot::{ChipPot, ChipPotCollection, PotId};

/// Одна раздача покера от блайндов до выплаты банков.
///
/// Round — единственный владелец состояния раздачи: ставки улицы, банки,
/// сфолдившие, очередь хода и журнал действий. Снаружи им управляет
/// вызывающий код: действия игроков, раздача улиц, `end()`. Стол переживает
/// раунд (кнопка и стеки переносятся дальше), сам Round после `end()`
/// выбрасывается.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    id: RoundId,
    table: Table,
    dealer: Dealer,
    rules: GameParameters,
    /// Ставки текущей улицы, по игрокам. Обнуляются при сборе в банки.
    bet_stacks: BTreeMap<PlayerId, Chips>,
    folded: Vec<PlayerId>,
    pots: ChipPotCollection,
    current_pot: PotId,
    actions: ActionCollection,
    left_to_act: LeftToAct,
    winners: Vec<PlayerId>,
    showdown_hands: Vec<Hand>,
    evaluations: Vec<HandEvaluation>,
}

impl Round {
    /// Начать раздачу. Колода у дилера должна быть уже подготовлена
    /// (перемешана снаружи или собрана тестом).
    pub fn start(
        id: RoundId,
        table: Table,
        rules: GameParameters,
        dealer: Dealer,
    ) -> Result<Round, RoundError> {
        if table.sat_down_count() < 2 {
            return Err(RoundError::NotEnoughPlayers);
        }

        let mut table = table;
        for player in table.players().iter().map(Player::id).collect::<Vec<_>>() {
            if let Some(p) = table.player_mut(player) {
                p.reset_winnings();
            }
        }

        let mut pots = ChipPotCollection::new();
        let current_pot = pots.create();

        let bet_stacks = table
            .players()
            .iter()
            .map(|p| (p.id(), Chips::ZERO))
            .collect();

        let mut round = Round {
            id,
            table,
            dealer,
            rules,
            bet_stacks,
            folded: Vec::new(),
            pots,
            current_pot,
            actions: ActionCollection::new(),
            left_to_act: LeftToAct::new(),
            winners: Vec::new(),
            showdown_hands: Vec::new(),
            evaluations: Vec::new(),
        };

        round.setup_left_to_act();

        log::debug!(
            "round {} started, button at seat {}",
            round.id,
            round.table.button()
        );

        Ok(round)
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Забрать стол после завершения раздачи (стеки и кнопка — в нём).
    pub fn into_table(self) -> Table {
        self.table
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn game_rules(&self) -> &GameParameters {
        &self.rules
    }

    pub fn actions(&self) -> &ActionCollection {
        &self.actions
    }

    pub fn left_to_act(&self) -> &LeftToAct {
        &self.left_to_act
    }

    pub fn chip_pots(&self) -> &ChipPotCollection {
        &self.pots
    }

    pub fn current_pot(&self) -> Option<&ChipPot> {
        self.pots.get(self.current_pot)
    }

    pub fn bet_stacks(&self) -> &BTreeMap<PlayerId, Chips> {
        &self.bet_stacks
    }

    pub fn bet_stacks_total(&self) -> Chips {
        self.bet_stacks.values().copied().sum()
    }

    pub fn player_bet_stack(&self, player_id: PlayerId) -> Chips {
        self.bet_stacks
            .get(&player_id)
            .copied()
            .unwrap_or(Chips::ZERO)
    }

    pub fn get_player(&self, player_id: PlayerId) -> Option<&Player> {
        self.table.player(player_id)
    }

    pub fn folded_players(&self) -> Vec<&Player> {
        self.folded
            .iter()
            .filter_map(|id| self.table.player(*id))
            .collect()
    }

    pub fn winning_players(&self) -> Vec<&Player> {
        self.winners
            .iter()
            .filter_map(|id| self.table.player(*id))
            .collect()
    }

    pub fn showdown_hands(&self) -> &[Hand] {
        &self.showdown_hands
    }

    pub fn evaluations(&self) -> &[HandEvaluation] {
        &self.evaluations
    }

    /// Игроки, всё ещё участвующие в раздаче (сидят и не сфолдили).
    pub fn players_still_in(&self) -> Vec<&Player> {
        self.table
            .players_sat_down()
            .into_iter()
            .filter(|p| !self.folded.contains(&p.id()))
            .collect()
    }

    pub fn is_player_still_in(&self, player_id: PlayerId) -> bool {
        self.players_still_in().iter().any(|p| p.id() == player_id)
    }

    /// Все оставшиеся в раздаче уже в all-in — торговля кончилась.
    pub fn players_remain_all_in(&self) -> bool {
        let still_in = self.players_still_in();
        !still_in.is_empty()
            && still_in
                .iter()
                .all(|p| self.left_to_act.state_of(p.id()) == Some(TurnState::AllIn))
    }

    /// Не больше одного игрока с фишками — продолжать торговлю некому.
    pub fn fewer_than_two_players_with_chips(&self) -> bool {
        self.players_still_in()
            .iter()
            .filter(|p| !p.chip_stack().is_zero())
            .count()
            <= 1
    }

    /// Чей сейчас ход. `None` — на этой улице ходить больше некому.
    pub fn whos_turn_is_it(&self) -> Option<&Player> {
        let next = self.left_to_act.next_player()?;
        self.table.player(next)
    }

    pub fn player_with_button(&self) -> Option<&Player> {
        self.table.button_holder()
    }

    /// Малый блайнд: в хедз-апе это кнопка, иначе первый сидящий за ней.
    pub fn player_with_small_blind(&self) -> Option<&Player> {
        if self.table.sat_down_count() < 2 {
            return None;
        }
        let button = self.table.button_holder()?;
        if self.table.sat_down_count() == 2 {
            return Some(button);
        }
        let button_seat = self.table.find_seat(button.id())?;
        self.table.next_sat_down_from(button_seat, false)
    }

    pub fn player_with_big_blind(&self) -> Option<&Player> {
        let sb = self.player_with_small_blind()?;
        let sb_seat = self.table.find_seat(sb.id())?;
        self.table.next_sat_down_from(sb_seat, false)
    }

    /// Раздать карманные карты, начиная с места за кнопкой.
    pub fn deal_hands(&mut self) {
        let order = self.sat_down_from_seat(self.table.button() + 1);
        let ids: Vec<PlayerId> = order.into_iter().map(|(_, id)| id).collect();
        self.dealer.deal_hands(&ids);
    }

    // ------------------------------------------------------------------
    // Блайнды и анте
    // ------------------------------------------------------------------

    pub fn post_small_blind(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        let chips = self.rules.small_blind();
        self.place_chip_bet(player_id, chips)?;

        self.actions
            .push(Action::player_with_chips(player_id, ActionKind::SmallBlind, chips));
        self.left_to_act
            .player_has_actioned(player_id, TurnState::SmallBlindPosted);
        Ok(())
    }

    pub fn post_big_blind(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        let chips = self.rules.big_blind();
        self.place_chip_bet(player_id, chips)?;

        self.actions
            .push(Action::player_with_chips(player_id, ActionKind::BigBlind, chips));
        self.left_to_act
            .player_has_actioned(player_id, TurnState::BigBlindPosted);
        Ok(())
    }

    /// Классическое анте со всех сидящих; кому не хватает — идёт в all-in.
    /// Собранные анте сразу уезжают в банк.
    pub fn post_ante(&mut self, ante: Chips) -> Result<(), RoundError> {
        let ids: Vec<PlayerId> = self
            .table
            .players_sat_down()
            .iter()
            .map(|p| p.id())
            .collect();

        for player_id in ids {
            let stack = self
                .table
                .player(player_id)
                .map(Player::chip_stack)
                .unwrap_or(Chips::ZERO);

            if stack < ante {
                self.place_chip_bet(player_id, stack)?;
                self.actions
                    .push(Action::player_with_chips(player_id, ActionKind::AllIn, stack));
                self.left_to_act
                    .player_has_actioned(player_id, TurnState::AllIn);
            } else {
                self.place_chip_bet(player_id, ante)?;
                self.actions
                    .push(Action::player_with_chips(player_id, ActionKind::Ante, ante));
            }
        }

        self.collect_chip_total();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Действия игроков
    // ------------------------------------------------------------------

    /// Проверка очерёдности: действовать может только тот, чей сейчас ход.
    pub fn check_player_trying_to_act(&self, player_id: PlayerId) -> Result<(), RoundError> {
        match self.left_to_act.next_player() {
            None => Err(RoundError::NoActionsNeeded),
            Some(next) if next != player_id => Err(RoundError::OutOfTurn(player_id)),
            Some(_) => Ok(()),
        }
    }

    /// Колл: доплатить до максимальной ставки улицы.
    /// Если фишек ровно или меньше — это all-in, а не колл.
    pub fn player_calls(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.check_player_trying_to_act(player_id)?;

        let highest = self.highest_bet();
        let my_bet = self.player_bet_stack(player_id);
        let stack = self.stack_of(player_id)?;

        let mut to_pay = highest.saturating_sub(my_bet);
        let all_in = stack <= to_pay;
        if all_in {
            to_pay = stack;
        }

        self.place_chip_bet(player_id, to_pay)?;

        let kind = if all_in { ActionKind::AllIn } else { ActionKind::Call };
        self.actions
            .push(Action::player_with_chips(player_id, kind, to_pay));

        let state = if all_in { TurnState::AllIn } else { TurnState::Actioned };
        self.left_to_act.player_has_actioned(player_id, state);
        Ok(())
    }

    /// Рейз до `chips` — это целевая ставка улицы, не добавка.
    /// Меньше текущего максимума нельзя; весь стек — значит all-in.
    pub fn player_raises(&mut self, player_id: PlayerId, chips: Chips) -> Result<(), RoundError> {
        self.check_player_trying_to_act(player_id)?;

        let highest = self.highest_bet();
        if chips < highest {
            return Err(RoundError::InvalidRaise {
                given: chips,
                highest,
            });
        }

        let my_bet = self.player_bet_stack(player_id);
        let to_pay = chips.checked_sub(my_bet).ok_or(RoundError::InvalidRaise {
            given: chips,
            highest,
        })?;
        let stack = self.stack_of(player_id)?;
        if stack < to_pay {
            return Err(RoundError::InsufficientChips {
                player: player_id,
                needed: to_pay,
            });
        }

        let all_in = stack == to_pay;
        self.place_chip_bet(player_id, to_pay)?;

        let kind = if all_in { ActionKind::AllIn } else { ActionKind::Raise };
        self.actions
            .push(Action::player_with_chips(player_id, kind, chips));

        let state = if all_in {
            TurnState::AllIn
        } else {
            TurnState::AggressivelyActioned
        };
        self.left_to_act.player_has_actioned(player_id, state);
        if all_in && chips > highest {
            self.left_to_act.reopen_action_except(player_id);
        }
        Ok(())
    }

    /// Фолд: игрок выбывает из раздачи, его ставки остаются в банке.
    pub fn player_folds_hand(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.check_player_trying_to_act(player_id)?;

        self.actions.push(Action::player(player_id, ActionKind::Fold));
        self.folded.push(player_id);
        self.left_to_act.remove_player(player_id);
        Ok(())
    }

    /// All-in: весь остаток стека, сколько бы ни было на столе.
    /// Если ставка перебила текущий максимум — остальным снова ходить.
    pub fn player_pushes_all_in(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.check_player_trying_to_act(player_id)?;

        let highest_before = self.highest_bet();
        let stack = self.stack_of(player_id)?;
        self.place_chip_bet(player_id, stack)?;

        self.actions
            .push(Action::player_with_chips(player_id, ActionKind::AllIn, stack));
        self.left_to_act
            .player_has_actioned(player_id, TurnState::AllIn);
        if self.player_bet_stack(player_id) > highest_before {
            self.left_to_act.reopen_action_except(player_id);
        }
        Ok(())
    }

    /// Чек: только если доплачивать нечего.
    pub fn player_checks(&mut self, player_id: PlayerId) -> Result<(), RoundError> {
        self.check_player_trying_to_act(player_id)?;

        if self.player_bet_stack(player_id) != self.highest_bet() {
            return Err(RoundError::CheckNotAllowed);
        }

        self.actions.push(Action::player(player_id, ActionKind::Check));
        self.left_to_act
            .player_has_actioned(player_id, TurnState::Actioned);
        Ok(())
    }

    /// Sit out посреди раздачи: для очереди хода равносилен фолду.
    pub fn sit_player_out(&mut self, player_id: PlayerId) {
        self.table.sit_player_out(player_id);
        self.left_to_act.remove_player(player_id);
    }

    // ------------------------------------------------------------------
    // Улицы
    // ------------------------------------------------------------------

    pub fn deal_flop(&mut self) -> Result<(), RoundError> {
        if !self.dealer.community_cards().is_empty() {
            return Err(RoundError::StreetAlreadyDealt(Street::Flop));
        }
        self.ensure_no_pending_actions()?;

        self.collect_chip_total();
        self.rotate_turn_order_for_new_street();

        self.dealer.deal_community_cards(3);
        let cards = self.dealer.community_cards()[0..3].to_vec();
        self.actions.push(Action::dealer(ActionKind::DealtFlop, cards));

        log::debug!("round {}: flop dealt", self.id);
        Ok(())
    }

    pub fn deal_turn(&mut self) -> Result<(), RoundError> {
        let community = self.dealer.community_cards().len();
        if community < 3 {
            return Err(RoundError::StreetOutOfOrder {
                wanted: Street::Turn,
                community,
            });
        }
        if community > 3 {
            return Err(RoundError::StreetAlreadyDealt(Street::Turn));
        }
        self.ensure_no_pending_actions()?;

        self.collect_chip_total();
        self.rotate_turn_order_for_new_street();

        self.dealer.deal_community_cards(1);
        let cards = self.dealer.community_cards()[3..4].to_vec();
        self.actions.push(Action::dealer(ActionKind::DealtTurn, cards));

        log::debug!("round {}: turn dealt", self.id);
        Ok(())
    }

    pub fn deal_river(&mut self) -> Result<(), RoundError> {
        let community = self.dealer.community_cards().len();
        if community < 4 {
            return Err(RoundError::StreetOutOfOrder {
                wanted: Street::River,
                community,
            });
        }
        if community > 4 {
            return Err(RoundError::StreetAlreadyDealt(Street::River));
        }
        self.ensure_no_pending_actions()?;

        self.collect_chip_total();
        self.rotate_turn_order_for_new_street();

        self.dealer.deal_community_cards(1);
        let cards = self.dealer.community_cards()[4..5].to_vec();
        self.actions.push(Action::dealer(ActionKind::DealtRiver, cards));

        log::debug!("round {}: river dealt", self.id);
        Ok(())
    }

    /// Завершение раздачи: добрать борд, собрать ставки, раздать выигрыши,
    /// передвинуть кнопку.
    pub fn end(&mut self) {
        self.capture_showdown_hands();
        self.dealer.check_community_cards();
        self.collect_chip_total();
        self.distribute_winnings();
        self.table.move_button();
    }

    // ------------------------------------------------------------------
    // Сбор ставок в банки
    // ------------------------------------------------------------------

    /// Смести ставки улицы в банки.
    ///
    /// Обычный случай — всё в текущий банк. Если за раздачу было больше
    /// одного all-in и ставки не сфолдивших различаются, банк режется на
    /// слои: по возрастанию отличающихся ставок, в каждый слой каждый
    /// вносит не больше уровня слоя. Ставки сфолдивших в слоях не
    /// участвуют и целиком уходят в главный банк. Повторный вызов без
    /// новых ставок ничего не меняет.
    pub fn collect_chip_total(&mut self) {
        let all_in_count = self.left_to_act.all_in_count();

        // Ставки не сфолдивших, в порядке мест.
        let active: Vec<(PlayerId, Chips)> = self
            .seat_ordered_bets()
            .into_iter()
            .filter(|(id, _)| !self.folded.contains(id))
            .collect();

        let mut distinct: Vec<Chips> = active.iter().map(|(_, c)| *c).collect();
        distinct.sort();
        distinct.dedup();

        if all_in_count > 1 && distinct.len() > 1 {
            self.collect_tiered(&active, &distinct);
        } else {
            // Нулевые ставки не дают претензии на банк: улица из одних
            // чеков не меняет список претендентов.
            for (player_id, chips) in self.seat_ordered_bets() {
                if chips.is_zero() {
                    continue;
                }
                if let Some(pot) = self.pots.get_mut(self.current_pot) {
                    pot.add_chips(chips, player_id);
                }
            }
        }

        for chips in self.bet_stacks.values_mut() {
            *chips = Chips::ZERO;
        }
    }

    /// Слоёное построение банков при нескольких all-in разного размера.
    fn collect_tiered(&mut self, active: &[(PlayerId, Chips)], distinct: &[Chips]) {
        let mut remaining: Vec<(PlayerId, Chips)> = active.to_vec();
        let mut prev_level = Chips::ZERO;

        for level in distinct {
            if level.is_zero() {
                continue;
            }
            let tier = level.saturating_sub(prev_level);
            prev_level = *level;

            let pot_id = self.pots.create();
            self.current_pot = pot_id;

            for (player_id, left) in remaining.iter_mut() {
                if left.is_zero() {
                    continue;
                }
                let contribution = (*left).min(tier);
                *left = left.saturating_sub(contribution);
                if let Some(pot) = self.pots.get_mut(pot_id) {
                    pot.add_chips(contribution, *player_id);
                }
            }
        }

        // Пустые слои (и нетронутый стартовый банк) выкидываем до того,
        // как решать, какой банк считать главным.
        self.pots.drop_empty();

        // Ставки сфолдивших слоям не принадлежат — целиком в главный банк.
        let folded_bets: Vec<(PlayerId, Chips)> = self
            .seat_ordered_bets()
            .into_iter()
            .filter(|(id, chips)| self.folded.contains(id) && !chips.is_zero())
            .collect();
        for (player_id, chips) in folded_bets {
            if let Some(pot) = self.pots.first_mut() {
                pot.add_chips(chips, player_id);
            }
        }

        if let Some(last) = self.pots.ids().last() {
            self.current_pot = *last;
        }
    }

    // ------------------------------------------------------------------
    // Шоудаун и выплаты
    // ------------------------------------------------------------------

    /// Зафиксировать руки шоудауна, пока борд не доигран.
    fn capture_showdown_hands(&mut self) {
        let still_in = self.players_still_in();
        if still_in.len() > 1 {
            self.showdown_hands = still_in
                .iter()
                .filter_map(|p| self.dealer.player_hand(p.id()).cloned())
                .collect();
        }
    }

    /// Раздать банки, от последнего (верхнего слоя) к главному.
    ///
    /// Банк с единственным не сфолдившим претендентом уходит ему без
    /// вскрытия. Иначе — шоудаун между претендентами; при равных руках
    /// банк делится поровну, остаток — по фишке победителям по кругу от
    /// кнопки. Выплаченный банк удаляется.
    fn distribute_winnings(&mut self) {
        log::info!(
            "round {}: distributing {} pot(s), board {:?}",
            self.id,
            self.pots.len(),
            self.dealer.community_cards()
        );

        let board = self.dealer.community_cards().to_vec();

        for pot_id in self.pots.ids().into_iter().rev() {
            let (pot_total, claimants) = match self.pots.get(pot_id) {
                Some(pot) => (pot.total(), pot.players().to_vec()),
                None => continue,
            };

            let contenders: Vec<PlayerId> = claimants
                .iter()
                .copied()
                .filter(|id| !self.folded.contains(id))
                .collect();

            match contenders.len() {
                0 => {
                    log::warn!("round {}: pot {:?} has no contenders", self.id, pot_id);
                }
                1 => {
                    self.award(contenders[0], pot_total);
                }
                _ => {
                    let hands: Vec<Hand> = contenders
                        .iter()
                        .filter_map(|id| self.dealer.player_hand(*id).cloned())
                        .collect();
                    let evaluations = self.dealer.evaluate_hands(&board, &hands);

                    let best = evaluations.first().map(|e| e.rank);
                    let tied: Vec<PlayerId> = evaluations
                        .iter()
                        .filter(|e| Some(e.rank) == best)
                        .map(|e| e.player_id)
                        .collect();
                    self.evaluations.extend(evaluations);

                    match tied.as_slice() {
                        [] => log::warn!("round {}: pot {:?} had no hands", self.id, pot_id),
                        [single] => self.award(*single, pot_total),
                        winners => self.split_between(winners, pot_total),
                    }
                }
            }

            self.pots.remove(pot_id);
        }
    }

    /// Выплатить банк одному победителю.
    fn award(&mut self, player_id: PlayerId, chips: Chips) {
        log::debug!("round {}: player {} wins {}", self.id, player_id, chips);
        if let Some(player) = self.table.player_mut(player_id) {
            player.credit(chips);
        }
        self.record_winner(player_id);
    }

    /// Поделить банк между равными руками. Остаток от деления раздаётся по
    /// одной фишке победителям в порядке мест от кнопки.
    fn split_between(&mut self, winners: &[PlayerId], total: Chips) {
        let (share, remainder) = total.split(winners.len() as u64);

        let ordered = self.order_winners_from_button(winners);
        for (i, player_id) in ordered.iter().enumerate() {
            let extra = if (i as u64) < remainder.amount() {
                Chips::new(1)
            } else {
                Chips::ZERO
            };
            self.award(*player_id, share + extra);
        }
    }

    /// Победители в порядке мест, начиная с первого за кнопкой.
    fn order_winners_from_button(&self, winners: &[PlayerId]) -> Vec<PlayerId> {
        let mut seated: Vec<(SeatIndex, PlayerId)> = winners
            .iter()
            .filter_map(|id| self.table.find_seat(*id).map(|seat| (seat, *id)))
            .collect();
        seated.sort_by_key(|(seat, _)| *seat);

        let start = self.table.button() + 1;
        let pivot = seated
            .iter()
            .position(|(seat, _)| *seat >= start)
            .unwrap_or(0);
        seated.rotate_left(pivot);

        seated.into_iter().map(|(_, id)| id).collect()
    }

    /// Победитель попадает в список один раз (сравнение по имени).
    fn record_winner(&mut self, player_id: PlayerId) {
        let name = match self.table.player(player_id) {
            Some(p) => p.name().to_string(),
            None => return,
        };
        let already = self
            .winners
            .iter()
            .filter_map(|id| self.table.player(*id))
            .any(|p| p.name() == name);
        if !already {
            self.winners.push(player_id);
        }
    }

    // ------------------------------------------------------------------
    // Внутренняя кухня
    // ------------------------------------------------------------------

    fn stack_of(&self, player_id: PlayerId) -> Result<Chips, RoundError> {
        self.table
            .player(player_id)
            .map(Player::chip_stack)
            .ok_or(RoundError::UnknownPlayer(player_id))
    }

    /// Максимальная ставка улицы по всем игрокам.
    fn highest_bet(&self) -> Chips {
        self.bet_stacks
            .values()
            .copied()
            .max()
            .unwrap_or(Chips::ZERO)
    }

    /// Перевести фишки из стека игрока в его ставку улицы.
    /// Проверка «хватает ли фишек» — до любых изменений.
    fn place_chip_bet(&mut self, player_id: PlayerId, chips: Chips) -> Result<(), RoundError> {
        let player = self
            .table
            .player_mut(player_id)
            .ok_or(RoundError::UnknownPlayer(player_id))?;

        player.debit(chips).ok_or(RoundError::InsufficientChips {
            player: player_id,
            needed: chips,
        })?;

        *self.bet_stacks.entry(player_id).or_insert(Chips::ZERO) += chips;
        Ok(())
    }

    fn ensure_no_pending_actions(&self) -> Result<(), RoundError> {
        match self.whos_turn_is_it() {
            Some(player) => Err(RoundError::OutOfTurn(player.id())),
            None => Ok(()),
        }
    }

    /// Ставки всех игроков в порядке мест.
    fn seat_ordered_bets(&self) -> Vec<(PlayerId, Chips)> {
        self.table
            .players()
            .iter()
            .map(|p| (p.id(), self.player_bet_stack(p.id())))
            .collect()
    }

    /// Сидящие в игре, начиная с места `seat` по кругу.
    fn sat_down_from_seat(&self, seat: SeatIndex) -> Vec<(SeatIndex, PlayerId)> {
        let mut seated: Vec<(SeatIndex, PlayerId)> = self
            .table
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| !self.table.is_sat_out(p.id()))
            .map(|(i, p)| (i, p.id()))
            .collect();

        let pivot = seated.iter().position(|(s, _)| *s >= seat).unwrap_or(0);
        seated.rotate_left(pivot);
        seated
    }

    /// Посадить всех в очередь хода на старте раздачи.
    ///
    /// Хедз-ап — особый случай: до флопа первым ходит кнопка (она же малый
    /// блайнд), после флопа — второй игрок.
    fn setup_left_to_act(&mut self) {
        let seated: Vec<(SeatIndex, PlayerId)> = self
            .table
            .players()
            .iter()
            .enumerate()
            .filter(|(_, p)| !self.table.is_sat_out(p.id()))
            .map(|(i, p)| (i, p.id()))
            .collect();

        self.left_to_act.setup(seated);

        if self.table.sat_down_count() == 2 {
            if self.dealer.community_cards().is_empty() {
                self.left_to_act
                    .reset_player_list_from_seat(self.table.button());
            } else {
                let non_button = self
                    .table
                    .next_sat_down_from(self.table.button(), false)
                    .and_then(|p| self.table.find_seat(p.id()))
                    .unwrap_or(0);
                self.left_to_act.reset_player_list_from_seat(non_button);
            }
            return;
        }

        self.left_to_act
            .reset_player_list_from_seat(self.table.button() + 1);
    }

    /// Новая улица: состояния в исходное, очередь от малого блайнда
    /// (в хедз-апе — от второго игрока).
    fn rotate_turn_order_for_new_street(&mut self) {
        let sb_seat = self
            .player_with_small_blind()
            .and_then(|p| self.table.find_seat(p.id()))
            .unwrap_or(self.table.button());

        let mut seat = sb_seat;
        if self.table.sat_down_count() == 2 {
            seat += 1;
        }

        self.left_to_act.reset_actions();
        self.left_to_act.sort_by_seats();
        self.left_to_act.reset_player_list_from_seat(seat);
    }
}
