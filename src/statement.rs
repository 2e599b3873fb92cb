use crate::ledger::{account::Account, transaction::Transaction, Amount};

use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Serialize)]
struct TransactionRecord<'a> {
    #[serde(rename = "type")]
    kind: &'static str,

    amount: Amount,

    timestamp: String,

    confirmation: &'a str,
}

impl<'a> TransactionRecord<'a> {
    fn new(tx: &'a Transaction) -> Self {
        Self {
            kind: tx.kind.tag(),
            amount: tx.amount,
            timestamp: tx.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            confirmation: tx.confirmation.as_str(),
        }
    }
}

// Writes the account history to the given stream, oldest first.
pub fn write(output_stream: impl std::io::Write, account: &Account) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for tx in account.transactions() {
        writer.serialize(TransactionRecord::new(tx))?;
    }

    writer.flush()?;
    Ok(())
}
