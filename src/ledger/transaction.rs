use super::Amount;
use crate::confirmation::ConfirmationCode;

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

/// The kind of an operation, as tagged in confirmation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Deposit,    // "D"
    Withdrawal, // "W"
    Interest,   // "I"
    Rejected,   // "X": an attempt that failed validation. Never recorded.
}

impl Kind {
    pub const fn tag(&self) -> &'static str {
        match self {
            Kind::Deposit => "D",
            Kind::Withdrawal => "W",
            Kind::Interest => "I",
            Kind::Rejected => "X",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown transaction kind {:?}", self.0)
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "D" => Ok(Kind::Deposit),
            "W" => Ok(Kind::Withdrawal),
            "I" => Ok(Kind::Interest),
            "X" => Ok(Kind::Rejected),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// An applied operation, as kept in the account history.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub kind: Kind,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
    pub confirmation: ConfirmationCode,
}

#[test]
fn test_kind_tags() {
    for (kind, tag) in vec![
        (Kind::Deposit, "D"),
        (Kind::Withdrawal, "W"),
        (Kind::Interest, "I"),
        (Kind::Rejected, "X"),
    ] {
        assert_eq!(tag, kind.tag());
        assert_eq!(tag, kind.to_string());
        assert_eq!(Ok(kind), tag.parse::<Kind>());
    }
}

#[test]
fn test_kind_unknown() {
    for raw in vec!["", "d", "Q", "DW"] {
        assert_eq!(Err(UnknownKind(raw.to_string())), raw.parse::<Kind>());
    }
}
