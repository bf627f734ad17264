//! Движок одной раздачи техасского холдема (кеш-игра).
//!
//! Библиотека бизнес-правил: очередь хода, ставки, построение банков
//! (включая сайд-поты при all-in разного размера), шоудаун и выплаты.
//! Ни сети, ни хранилища, ни потоков — всё синхронно, состоянием раунда
//! владеет вызывающий код.
//!
//! Точка входа — `engine::Round`:
//!
//! ```no_run
//! use holdem_engine::domain::{Chips, Deck, GameParameters, Player, Table};
//! use holdem_engine::engine::{Dealer, Round};
//! use holdem_engine::infra::SystemRng;
//!
//! let players = vec![
//!     Player::new(1, "alice", Chips::new(1000)),
//!     Player::new(2, "bob", Chips::new(1000)),
//! ];
//! let table = Table::new(1, players);
//! let rules = GameParameters::new(Chips::new(50), None, 9).unwrap();
//!
//! let mut deck = Deck::standard_52();
//! deck.shuffle(&mut SystemRng);
//!
//! let mut round = Round::start(1, table, rules, Dealer::start_work(deck)).unwrap();
//! round.deal_hands();
//! round.post_small_blind(1).unwrap();
//! round.post_big_blind(2).unwrap();
//! // ... действия игроков, улицы ...
//! round.end();
//! ```

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
