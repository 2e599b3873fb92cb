use super::{Amount, TransactionId};

use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of "now" for timestamps and confirmation codes.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant. Useful to get reproducible codes.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Bank holds the state shared by every account: the transaction counter,
/// the interest rate and the clock.
///
/// Accounts borrow the bank for each operation, so two accounts using the same
/// bank draw their transaction ids from the same sequence.
pub struct Bank {
    // Last id handed out. Ids start at 1.
    counter: AtomicU64,

    // Percentage, e.g. 5 means 5%.
    interest_rate: Amount,

    clock: Box<dyn Clock + Send + Sync>,
}

impl Bank {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + Send + Sync + 'static) -> Self {
        Self {
            counter: AtomicU64::new(0),
            interest_rate: dec!(0),
            clock: Box::new(clock),
        }
    }

    pub fn interest_rate(&self) -> Amount {
        self.interest_rate
    }

    pub fn set_interest_rate(&mut self, rate: Amount) {
        self.interest_rate = rate;
    }

    /// Consume the next transaction id. Every call returns a strictly greater
    /// value than the previous one.
    pub fn next_transaction_id(&self) -> TransactionId {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Last id handed out, 0 if none was.
    pub fn last_transaction_id(&self) -> TransactionId {
        self.counter.load(Ordering::SeqCst)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Bank, FixedClock};

    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    #[test]
    fn test_transaction_ids_increase() {
        let bank = Bank::new();
        assert_eq!(0, bank.last_transaction_id());

        for want in 1..=5 {
            assert_eq!(want, bank.next_transaction_id());
            assert_eq!(want, bank.last_transaction_id());
        }
    }

    #[test]
    fn test_interest_rate() {
        let mut bank = Bank::new();
        assert_eq!(dec!(0), bank.interest_rate());

        bank.set_interest_rate(dec!(0.5));
        assert_eq!(dec!(0.5), bank.interest_rate());
    }

    #[test]
    fn test_fixed_clock() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let bank = Bank::with_clock(FixedClock(at));

        assert_eq!(at, bank.now());
        assert_eq!(at, bank.now());
    }
}
