use super::transaction::Transaction;

/// The in-memory ledger state. Persisted as three separate records
/// (transaction list, running balance, cumulative income) rather than
/// as one value.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Recorded transactions, in insertion order (edits keep their slot)
    pub transactions: Vec<Transaction>,

    /// Signed running total. Moved by add/edit, never by delete.
    pub balance: f64,

    /// Sum of every income amount ever applied. Never reduced, not even
    /// by deletes or downward edits.
    pub cumulative_income: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            balance: 0.0,
            cumulative_income: 0.0,
        }
    }
}
