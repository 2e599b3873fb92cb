use crate::ledger::Amount;

use chrono::FixedOffset;
use clap::Parser;
use rust_decimal_macros::dec;

/// Open an account, apply a deposit, and decode its confirmation code.
#[derive(Parser, Debug, Clone)]
#[command(name = "confirmation_ledger", version)]
pub struct Args {
    #[arg(long, default_value = "140568")]
    pub account_number: String,

    #[arg(long, default_value = "John")]
    pub first_name: String,

    #[arg(long, default_value = "Doe")]
    pub last_name: String,

    /// Preferred zone, as hours east of UTC. 0 means no preferred zone.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pub utc_offset_hours: i32,

    #[arg(long, default_value_t = dec!(100.00))]
    pub starting_balance: Amount,

    /// Percentage, shared by every account.
    #[arg(long, default_value_t = dec!(0.5))]
    pub interest_rate: Amount,

    #[arg(long, default_value_t = dec!(50.00), allow_negative_numbers = true)]
    pub deposit: Amount,

    /// Print the account history as CSV after the summary.
    #[arg(long)]
    pub statement: bool,
}

impl Args {
    /// `None` when the offset is 0 or out of range.
    pub fn preferred_timezone(&self) -> Option<FixedOffset> {
        if self.utc_offset_hours == 0 {
            return None;
        }

        FixedOffset::east_opt(self.utc_offset_hours.checked_mul(3600)?)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::parse_from(["confirmation_ledger"])
    }
}

#[cfg(test)]
mod tests {
    use super::Args;

    use chrono::FixedOffset;
    use clap::Parser;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let args = Args::default();

        assert_eq!("140568", args.account_number);
        assert_eq!("John", args.first_name);
        assert_eq!("Doe", args.last_name);
        assert_eq!(FixedOffset::east_opt(2 * 3600), args.preferred_timezone());
        assert_eq!(dec!(100.00), args.starting_balance);
        assert_eq!(dec!(0.5), args.interest_rate);
        assert_eq!(dec!(50.00), args.deposit);
        assert!(!args.statement);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "confirmation_ledger",
            "--account-number",
            "42",
            "--utc-offset-hours",
            "-5",
            "--deposit",
            "-1",
            "--statement",
        ]);

        assert_eq!("42", args.account_number);
        assert_eq!(FixedOffset::west_opt(5 * 3600), args.preferred_timezone());
        assert_eq!(dec!(-1), args.deposit);
        assert!(args.statement);
    }

    #[test]
    fn test_preferred_timezone_disabled_or_out_of_range() {
        for hours in vec![0, 24, -30] {
            let args = Args {
                utc_offset_hours: hours,
                ..Args::default()
            };
            assert_eq!(None, args.preferred_timezone());
        }
    }
}
