use crate::ledger::{bank::Bank, transaction::Kind, DECIMAL_PRECISION};

use super::{Account, Outcome, Rejection};
use rust_decimal_macros::dec;

impl Account {
    /// Credit interest at the bank's current rate.
    ///
    /// Returns `None` when the rate isn't positive: nothing happens and no
    /// transaction id is consumed. Interest is rounded to 4 decimal places.
    pub fn deposit_interest(&mut self, bank: &Bank) -> Option<Outcome> {
        let rate = bank.interest_rate();
        if rate <= dec!(0) {
            return None;
        }

        let interest = self
            .balance
            .checked_mul(rate)
            .and_then(|product| product.checked_div(dec!(100)))
            .map(|interest| interest.round_dp(DECIMAL_PRECISION));

        let outcome = match interest.and_then(|i| self.balance.checked_add(i).map(|b| (i, b))) {
            Some((interest, new_balance)) => {
                self.record(bank, Kind::Interest, interest, new_balance)
            }
            None => self.reject(bank, Rejection::Overflow, rate),
        };

        Some(outcome)
    }
}
