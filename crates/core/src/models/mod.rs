pub mod category;
pub mod ledger;
pub mod totals;
pub mod transaction;
