use crate::ledger::{bank::Bank, transaction::Kind, Amount};

use super::{Account, Outcome, Rejection};
use rust_decimal_macros::dec;

impl Account {
    /// Debit `amount` from the balance. Only succeeds when
    /// `0 < amount <= balance`, so the balance never goes negative.
    pub fn withdraw(&mut self, bank: &Bank, amount: Amount) -> Outcome {
        if amount <= dec!(0) {
            return self.reject(bank, Rejection::NonPositiveAmount, amount);
        }

        if amount > self.balance {
            return self.reject(bank, Rejection::NotEnoughFunds, amount);
        }

        let new_balance = self.balance - amount;
        self.record(bank, Kind::Withdrawal, amount, new_balance)
    }
}
