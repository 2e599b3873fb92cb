use crate::{
    cli::Args,
    ledger::{account::Account, bank::Bank},
    statement,
};

use anyhow::Context;
use std::io::Write;

/// Run the demo against the system clock.
pub fn run(args: &Args, output_stream: impl Write) -> anyhow::Result<()> {
    run_with_bank(args, Bank::new(), output_stream)
}

/// Open the configured account, deposit, then print the confirmation code,
/// what it decodes to, and the new balance.
pub fn run_with_bank(
    args: &Args,
    mut bank: Bank,
    mut output_stream: impl Write,
) -> anyhow::Result<()> {
    let zone = args.preferred_timezone();
    let mut account = Account::new(
        &args.account_number,
        args.first_name.as_str(),
        args.last_name.as_str(),
        zone,
        args.starting_balance,
    )
    .context("failed to open account")?;
    bank.set_interest_rate(args.interest_rate);

    let confirmation = account.deposit(&bank, args.deposit).into_code();
    writeln!(output_stream, "Confirmation Number: {}", confirmation)?;

    match account.parse_confirmation_code(confirmation.as_str(), zone) {
        Some(parsed) => {
            writeln!(output_stream, "Account Number: {}", parsed.account_number)?;
            writeln!(output_stream, "Transaction Code: {}", parsed.transaction_code)?;
            writeln!(output_stream, "Transaction ID: {}", parsed.transaction_id)?;
            writeln!(output_stream, "Time (local): {}", parsed.time)?;
            writeln!(output_stream, "Time (UTC): {}", parsed.time_utc)?;
        }
        None => writeln!(output_stream, "Confirmation number could not be parsed")?,
    }

    writeln!(output_stream, "New Balance: {:.2}", account.balance())?;

    if args.statement {
        statement::write(&mut output_stream, &account).context("failed to write statement")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_with_bank;
    use crate::{
        cli::Args,
        ledger::bank::{Bank, FixedClock},
    };

    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn fixed_bank() -> Bank {
        Bank::with_clock(FixedClock(
            Utc.with_ymd_and_hms(2024, 1, 2, 23, 4, 5).unwrap(),
        ))
    }

    #[test]
    fn test_run_defaults() {
        let mut output_stream = Vec::new();
        run_with_bank(&Args::default(), fixed_bank(), &mut output_stream).unwrap();

        // Generated at 01:04:05 in UTC+2, then read back as UTC and shifted again.
        let want = r#"Confirmation Number: D-140568-20240103010405-1
Account Number: 140568
Transaction Code: D
Transaction ID: 1
Time (local): 2024-01-03 03:04:05 (+02:00)
Time (UTC): 2024-01-03T01:04:05
New Balance: 150.00
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_run_rejected_deposit_with_statement() {
        let args = Args {
            utc_offset_hours: 0,
            deposit: dec!(-5),
            statement: true,
            ..Args::default()
        };

        let mut output_stream = Vec::new();
        run_with_bank(&args, fixed_bank(), &mut output_stream).unwrap();

        let want = r#"Confirmation Number: X-140568-20240102230405-1
Account Number: 140568
Transaction Code: X
Transaction ID: 1
Time (local): 2024-01-02 23:04:05
Time (UTC): 2024-01-02T23:04:05
New Balance: 100.00
"#;
        assert_eq!(want.to_string(), String::from_utf8(output_stream).unwrap());
    }

    #[test]
    fn test_run_invalid_account() {
        let args = Args {
            account_number: "14-0568".to_string(),
            ..Args::default()
        };

        let mut output_stream = Vec::new();
        let err = run_with_bank(&args, fixed_bank(), &mut output_stream).unwrap_err();

        assert_eq!("failed to open account", err.to_string());
        assert!(output_stream.is_empty());
    }
}
