//! Running total over expense amounts
//!
//! Amounts are stored as `REAL`, so the total is accumulated over `f64` with
//! Neumaier compensated summation. The error term is carried alongside the
//! sum and only folded in when the value is read. Rounding to two decimals
//! happens in `Display` and nowhere else.

use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

use super::expense::Expense;

/// Compensated sum of expense amounts
#[derive(Debug, Clone, Copy, Default)]
pub struct Total {
    sum: f64,
    compensation: f64,
}

impl Total {
    /// An empty total
    pub const fn zero() -> Self {
        Self {
            sum: 0.0,
            compensation: 0.0,
        }
    }

    /// Add one amount
    pub fn add(&mut self, amount: f64) {
        let t = self.sum + amount;
        if self.sum.abs() >= amount.abs() {
            self.compensation += (self.sum - t) + amount;
        } else {
            self.compensation += (amount - t) + self.sum;
        }
        self.sum = t;
    }

    /// The accumulated value, unrounded
    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl AddAssign<f64> for Total {
    fn add_assign(&mut self, amount: f64) {
        self.add(amount);
    }
}

impl Sum<f64> for Total {
    fn sum<I: Iterator<Item = f64>>(iter: I) -> Self {
        iter.fold(Total::zero(), |mut acc, amount| {
            acc += amount;
            acc
        })
    }
}

impl<'a> Sum<&'a Expense> for Total {
    fn sum<I: Iterator<Item = &'a Expense>>(iter: I) -> Self {
        iter.map(|e| e.amount).sum()
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value();
        // Avoid printing "-0.00" for totals that cancel out
        let value = if value == 0.0 { 0.0 } else { value };
        write!(f, "{:.2}", value)
    }
}

/// Sum the amounts of a sequence of expenses
pub fn total(records: &[Expense]) -> Total {
    records.iter().sum()
}
