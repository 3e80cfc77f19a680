use serde::{Deserialize, Serialize};

/// Sums over the current transaction list, recomputed on demand.
///
/// Deletions drop rows without touching the running balance, so these
/// figures can legitimately drift away from the persisted balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerTotals {
    /// Sum of all income amounts in the list
    pub total_income: f64,

    /// Sum of all expense amounts in the list
    pub total_expenses: f64,

    /// Gross sum of every amount regardless of kind
    pub total_amount: f64,
}
