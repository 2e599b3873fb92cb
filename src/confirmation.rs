//! Confirmation codes: `<TAG>-<ACCOUNT>-<YYYYMMDDHHMMSS>-<ID>`.
//!
//! A code is produced for every operation attempt, rejected ones included.
//! Parsing never fails loudly: anything that doesn't look like a code is
//! simply not recognized.
//!
//! The timestamp is a wall clock reading in whatever zone the account
//! preferred when the code was generated, and that zone isn't part of the
//! code. Parsing reads the digits back as if they were UTC. For an account with
//! a non-UTC preferred zone, the parsed times are therefore off by that zone's
//! offset. This is kept as is: the code format has no room for the offset.

use crate::ledger::{transaction::Kind, AccountNumber, TransactionId, DELIMITER};

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const TIMESTAMP_LEN: usize = 14;
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const UTC_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// Format a new code. `at` is rendered in `zone` when given, in UTC otherwise.
    pub fn generate(
        kind: Kind,
        account_number: &AccountNumber,
        at: DateTime<Utc>,
        zone: Option<FixedOffset>,
        tx_id: TransactionId,
    ) -> Self {
        let timestamp = match zone {
            Some(zone) => at.with_timezone(&zone).format(TIMESTAMP_FORMAT),
            None => at.format(TIMESTAMP_FORMAT),
        };

        Self(format!(
            "{kind}{DELIMITER}{account_number}{DELIMITER}{timestamp}{DELIMITER}{tx_id}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shorthand for [`parse_confirmation_code`].
    pub fn parse(&self, target: Option<FixedOffset>) -> Option<ParsedConfirmation> {
        parse_confirmation_code(&self.0, target)
    }
}

impl fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ConfirmationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The fields recovered from a confirmation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfirmation {
    pub account_number: String,

    /// The raw type tag. See [`ParsedConfirmation::kind`] for a typed view.
    pub transaction_code: String,

    pub transaction_id: TransactionId,

    /// The wall clock reading exactly as encoded.
    pub recorded_at: NaiveDateTime,

    /// Human readable time, in the target zone when one was given.
    pub time: String,

    /// ISO-like rendering of the encoded reading.
    pub time_utc: String,
}

impl ParsedConfirmation {
    pub fn kind(&self) -> Option<Kind> {
        self.transaction_code.parse().ok()
    }
}

/// Split a code back into its fields.
///
/// Note: I chose to return an `Option` rather than an error. A caller can't do
/// much with the reason a string isn't a code, and codes are only ever
/// produced by this crate.
///
/// Returns `None` unless the code has exactly four parts, a 14 digits
/// timestamp, and a numeric id.
pub fn parse_confirmation_code(
    code: &str,
    target: Option<FixedOffset>,
) -> Option<ParsedConfirmation> {
    let parts: Vec<&str> = code.split(DELIMITER).collect();
    let [transaction_code, account_number, timestamp, tx_id] = parts.as_slice() else {
        tracing::trace!(code, parts = parts.len(), "not a confirmation code");
        return None;
    };

    if timestamp.len() != TIMESTAMP_LEN || !timestamp.bytes().all(|b| b.is_ascii_digit()) {
        tracing::trace!(code, "malformed confirmation timestamp");
        return None;
    }
    let recorded_at = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?;
    let transaction_id = tx_id.parse::<TransactionId>().ok()?;

    let time = match target {
        Some(zone) => recorded_at
            .and_utc()
            .with_timezone(&zone)
            .format(&format!("{LOCAL_TIME_FORMAT} (%:z)"))
            .to_string(),
        None => recorded_at.format(LOCAL_TIME_FORMAT).to_string(),
    };

    Some(ParsedConfirmation {
        account_number: account_number.to_string(),
        transaction_code: transaction_code.to_string(),
        transaction_id,
        recorded_at,
        time,
        time_utc: recorded_at.format(UTC_TIME_FORMAT).to_string(),
    })
}
