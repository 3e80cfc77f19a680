pub mod confirm;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use confirm::ConfirmationGate;
use models::{
    ledger::Ledger,
    totals::LedgerTotals,
    transaction::{Transaction, TransactionDraft, TransactionType},
};
use services::ledger_service::LedgerService;
use storage::adapter::LedgerStore;
use storage::traits::KeyValueStore;

use errors::CoreError;

/// Message passed to the confirmation gate before a transaction is deleted.
pub const DELETE_TRANSACTION_PROMPT: &str =
    "Delete this transaction? The running balance will not be adjusted.";

/// Message passed to the confirmation gate before the balance is reset.
pub const RESET_BALANCE_PROMPT: &str =
    "Reset the balance to zero? Recorded transactions and cumulative income are kept.";

/// Main entry point for the Expense Tracker core library.
/// Holds the ledger state and the collaborators needed to operate on it.
#[must_use]
pub struct ExpenseTracker {
    ledger: Ledger,
    ledger_service: LedgerService,
    store: LedgerStore,
    gate: Box<dyn ConfirmationGate>,
}

impl std::fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("transactions", &self.ledger.transactions.len())
            .field("balance", &self.ledger.balance)
            .field("cumulative_income", &self.ledger.cumulative_income)
            .finish()
    }
}

impl ExpenseTracker {
    /// Create a tracker with an empty ledger, ignoring any persisted state.
    pub fn new(store: Box<dyn KeyValueStore>, gate: Box<dyn ConfirmationGate>) -> Self {
        Self::build(Ledger::default(), LedgerStore::new(store), gate)
    }

    /// Create a tracker from the ledger persisted in `store`.
    ///
    /// Never fails: records that are missing or unreadable fall back to
    /// their defaults, so a fresh install and a wiped store both come up
    /// as an empty ledger.
    pub async fn load(store: Box<dyn KeyValueStore>, gate: Box<dyn ConfirmationGate>) -> Self {
        let store = LedgerStore::new(store);
        let ledger = store.load_ledger().await;
        Self::build(ledger, store, gate)
    }

    // ── Transaction Management ──────────────────────────────────────

    /// Record a new transaction from a form submission.
    ///
    /// The ledger is updated and persisted before the call returns; on
    /// any failure the in-memory state is exactly as before.
    /// Returns the id assigned to the new transaction.
    pub async fn add_transaction(
        &mut self,
        draft: &TransactionDraft,
    ) -> Result<uuid::Uuid, CoreError> {
        let mut next = self.ledger.clone();
        let id = self.ledger_service.submit(&mut next, draft, None)?;
        self.persist_and_commit(next).await?;
        Ok(id)
    }

    /// Replace an existing transaction with a new form submission.
    ///
    /// The transaction keeps its slot in the list and its id. The
    /// submission's full amount moves the running scalars on top of
    /// whatever the replaced transaction already contributed.
    pub async fn update_transaction(
        &mut self,
        id: uuid::Uuid,
        draft: &TransactionDraft,
    ) -> Result<(), CoreError> {
        let mut next = self.ledger.clone();
        self.ledger_service.submit(&mut next, draft, Some(id))?;
        self.persist_and_commit(next).await?;
        Ok(())
    }

    /// Delete a transaction after asking the confirmation gate.
    ///
    /// Returns `Ok(false)` when the gate declines; nothing is changed or
    /// persisted then. The running balance and cumulative income are
    /// never adjusted by a delete, and deleting an id that is not in the
    /// list still counts as success.
    pub async fn remove_transaction(&mut self, id: uuid::Uuid) -> Result<bool, CoreError> {
        if !self.gate.confirm(DELETE_TRANSACTION_PROMPT) {
            return Ok(false);
        }

        let mut next = self.ledger.clone();
        self.ledger_service.remove(&mut next, id);
        self.persist_and_commit(next).await?;
        Ok(true)
    }

    /// Set the running balance back to zero after asking the confirmation
    /// gate. The transaction list and cumulative income keep their values.
    ///
    /// Returns `Ok(false)` when the gate declines.
    pub async fn reset_balance(&mut self) -> Result<bool, CoreError> {
        if !self.gate.confirm(RESET_BALANCE_PROMPT) {
            return Ok(false);
        }

        let mut next = self.ledger.clone();
        self.ledger_service.reset_balance(&mut next);
        self.persist_and_commit(next).await?;
        Ok(true)
    }

    // ── Derived State ───────────────────────────────────────────────

    /// Income, expense, and gross sums over the current list.
    #[must_use]
    pub fn totals(&self) -> LedgerTotals {
        self.ledger_service.totals(&self.ledger)
    }

    /// The signed running balance.
    #[must_use]
    pub fn balance(&self) -> f64 {
        self.ledger.balance
    }

    /// Sum of every income amount ever applied.
    #[must_use]
    pub fn cumulative_income(&self) -> f64 {
        self.ledger.cumulative_income
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All transactions, in insertion order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    /// Get a single transaction by its id.
    #[must_use]
    pub fn transaction(&self, id: uuid::Uuid) -> Option<&Transaction> {
        self.ledger.transactions.iter().find(|t| t.id == id)
    }

    /// Transactions of one kind, in insertion order.
    #[must_use]
    pub fn transactions_by_type(&self, transaction_type: TransactionType) -> Vec<&Transaction> {
        self.ledger
            .transactions
            .iter()
            .filter(|t| t.transaction_type == transaction_type)
            .collect()
    }

    /// Number of recorded transactions.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.ledger.transactions.len()
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Write `next` to storage, then make it the in-memory state.
    /// If the write fails the previous state stays in place.
    async fn persist_and_commit(&mut self, next: Ledger) -> Result<(), CoreError> {
        self.store.save_snapshot(&next).await?;
        self.ledger = next;
        Ok(())
    }

    fn build(ledger: Ledger, store: LedgerStore, gate: Box<dyn ConfirmationGate>) -> Self {
        Self {
            ledger,
            ledger_service: LedgerService::new(),
            store,
            gate,
        }
    }
}
