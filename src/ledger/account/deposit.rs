use crate::ledger::{bank::Bank, transaction::Kind, Amount};

use super::{Account, Outcome, Rejection};
use rust_decimal_macros::dec;

impl Account {
    /// Credit `amount` to the balance.
    ///
    /// A non-positive amount is rejected: the balance and history stay as they
    /// are, but a transaction id is still consumed for the "X" code.
    pub fn deposit(&mut self, bank: &Bank, amount: Amount) -> Outcome {
        if amount <= dec!(0) {
            return self.reject(bank, Rejection::NonPositiveAmount, amount);
        }

        match self.balance.checked_add(amount) {
            Some(new_balance) => self.record(bank, Kind::Deposit, amount, new_balance),
            None => self.reject(bank, Rejection::Overflow, amount),
        }
    }
}
