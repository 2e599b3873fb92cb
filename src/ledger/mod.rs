//! Handles a single account through its ledger.
//!
//! Account: balance, identity, and an append-only transaction history.
//! Bank: the state every account shares (transaction counter, interest rate, clock).
//! Transaction: what gets recorded each time an operation is applied.

pub mod account;
pub mod bank;
pub mod transaction;

use std::fmt;
use thiserror::Error;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability: `HashMap<TransactionId, Amount>` reads better than `HashMap<u64, Decimal>`.
pub type TransactionId = u64;

// Money is never stored in a float.
pub type Amount = rust_decimal::Decimal;
pub(crate) const DECIMAL_PRECISION: u32 = 4;

/// Separates the fields of a confirmation code, so it can never appear in an
/// account number.
pub const DELIMITER: char = '-';

/// Validation failures when building or editing an account.
///
/// Operation outcomes (deposits, withdrawals...) are not errors, see
/// [`account::Outcome`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The account number is empty or contains the code delimiter.
    #[error("invalid account number {0:?}: must be non-empty and must not contain '-'")]
    InvalidAccountNumber(String),

    /// An account can't be opened with a negative balance.
    #[error("starting balance must not be negative, got {0}")]
    NegativeBalance(Amount),
}

/// An account identifier that is safe to embed in a confirmation code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn new(number: impl Into<String>) -> Result<Self, AccountError> {
        let number = number.into();
        if number.is_empty() || number.contains(DELIMITER) {
            return Err(AccountError::InvalidAccountNumber(number));
        }

        Ok(Self(number))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountError, AccountNumber};

    #[test]
    fn test_account_number_ok() {
        for raw in vec!["140568", "A1", "acc_01", "0"] {
            let got = AccountNumber::new(raw).expect("should be valid");
            assert_eq!(raw, got.as_str());
            assert_eq!(raw, got.to_string());
        }
    }

    #[test]
    fn test_account_number_invalid() {
        for raw in vec!["", "-", "14-0568", "140568-"] {
            assert_eq!(
                Err(AccountError::InvalidAccountNumber(raw.to_string())),
                AccountNumber::new(raw)
            );
        }
    }
}
