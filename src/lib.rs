pub mod cli;
pub mod confirmation;
pub mod ledger;
pub mod run;
pub mod statement;
