mod deposit;
mod interest;
mod withdrawal;

use super::{
    bank::Bank,
    transaction::{Kind, Transaction},
    AccountError, AccountNumber, Amount,
};
use crate::confirmation::{self, ConfirmationCode, ParsedConfirmation};

use chrono::{DateTime, FixedOffset, Utc};
use rust_decimal_macros::dec;

/// Why an operation was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Deposits and withdrawals need a strictly positive amount.
    NonPositiveAmount,

    /// Funds in the account are insufficient for a withdrawal.
    NotEnoughFunds,

    /// Applying the operation would overflow the balance.
    Overflow,
}

/// The result of an operation attempt.
///
/// A rejected attempt still consumes a transaction id and comes with an "X"
/// code, but leaves no trace in the account.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Applied(ConfirmationCode),
    Rejected {
        reason: Rejection,
        code: ConfirmationCode,
    },
}

impl Outcome {
    pub fn code(&self) -> &ConfirmationCode {
        match self {
            Outcome::Applied(code) => code,
            Outcome::Rejected { code, .. } => code,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn into_code(self) -> ConfirmationCode {
        match self {
            Outcome::Applied(code) => code,
            Outcome::Rejected { code, .. } => code,
        }
    }
}

/// Account owns a balance, which never goes negative, and the history of
/// the operations applied to it.
///
/// The balance only moves through [`Account::deposit`], [`Account::withdraw`]
/// and [`Account::deposit_interest`]. Each of them appends to the history when
/// it succeeds.
#[derive(Debug, Clone)]
pub struct Account {
    account_number: AccountNumber,
    first_name: String,
    last_name: String,
    preferred_timezone: Option<FixedOffset>,
    balance: Amount,

    // Append-only, in the order operations were applied.
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        account_number: &str,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        preferred_timezone: Option<FixedOffset>,
        starting_balance: Amount,
    ) -> Result<Self, AccountError> {
        if starting_balance < dec!(0) {
            return Err(AccountError::NegativeBalance(starting_balance));
        }

        Ok(Self {
            account_number: AccountNumber::new(account_number)?,
            first_name: first_name.into(),
            last_name: last_name.into(),
            preferred_timezone,
            balance: starting_balance,
            transactions: Vec::new(),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn preferred_timezone(&self) -> Option<FixedOffset> {
        self.preferred_timezone
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Codes already handed out keep the previous number.
    pub fn set_account_number(&mut self, account_number: &str) -> Result<(), AccountError> {
        self.account_number = AccountNumber::new(account_number)?;
        Ok(())
    }

    pub fn set_preferred_timezone(&mut self, preferred_timezone: Option<FixedOffset>) {
        self.preferred_timezone = preferred_timezone;
    }

    /// See [`confirmation::parse_confirmation_code`]. The code doesn't have to
    /// belong to this account.
    pub fn parse_confirmation_code(
        &self,
        code: &str,
        target_timezone: Option<FixedOffset>,
    ) -> Option<ParsedConfirmation> {
        confirmation::parse_confirmation_code(code, target_timezone)
    }

    // I'm making the assumption that the code returned to the caller and the
    // one stored in the history should be the same, so an operation only ever
    // consumes one id.
    //
    // Every attempt goes through here: it consumes a transaction id, so ids
    // are shared by all accounts using the same bank.
    fn confirm(&self, bank: &Bank, kind: Kind) -> (ConfirmationCode, DateTime<Utc>) {
        let tx_id = bank.next_transaction_id();
        let now = bank.now();
        let code = ConfirmationCode::generate(
            kind,
            &self.account_number,
            now,
            self.preferred_timezone,
            tx_id,
        );

        (code, now)
    }

    // Record an operation whose effect on the balance has already been computed.
    fn record(&mut self, bank: &Bank, kind: Kind, amount: Amount, new_balance: Amount) -> Outcome {
        let (code, timestamp) = self.confirm(bank, kind);

        self.balance = new_balance;
        self.transactions.push(Transaction {
            kind,
            amount,
            timestamp,
            confirmation: code.clone(),
        });
        tracing::debug!(
            account = %self.account_number,
            kind = %kind,
            %amount,
            balance = %self.balance,
            confirmation = %code,
            "transaction applied"
        );

        Outcome::Applied(code)
    }

    fn reject(&self, bank: &Bank, reason: Rejection, amount: Amount) -> Outcome {
        let (code, _) = self.confirm(bank, Kind::Rejected);
        tracing::info!(
            account = %self.account_number,
            ?reason,
            %amount,
            confirmation = %code,
            "transaction rejected"
        );

        Outcome::Rejected { reason, code }
    }
}
