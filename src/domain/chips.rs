use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Количество фишек. Обёртка над u64, чтобы не путать со «просто числами».
///
/// Значение неизменяемое: все переводы фишек между владельцами делаются
/// явными парами debit/credit, вычитание только через `checked_sub` /
/// `saturating_sub`. Молча уйти в минус отсюда нельзя.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn new(amount: u64) -> Self {
        Chips(amount)
    }

    pub fn amount(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Вычитание с проверкой: `None`, если фишек не хватает.
    /// Вызывающий обязан обработать нехватку, а не получить минус.
    pub fn checked_sub(self, other: Chips) -> Option<Chips> {
        self.0.checked_sub(other.0).map(Chips)
    }

    /// Вычитание «не ниже нуля» — для мест, где нехватка уже исключена
    /// предварительной проверкой.
    pub fn saturating_sub(self, other: Chips) -> Chips {
        Chips(self.0.saturating_sub(other.0))
    }

    /// Поделить поровну на n частей: (доля, остаток).
    /// Остаток раздаётся по фишке отдельным правилом (см. Round).
    pub fn split(self, n: u64) -> (Chips, Chips) {
        if n == 0 {
            return (Chips::ZERO, self);
        }
        (Chips(self.0 / n), Chips(self.0 % n))
    }

    /// Половина суммы, округление вниз (малый блайнд из большого).
    pub fn halved(self) -> Chips {
        Chips(self.0 / 2)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Chips {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
