use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;
use crate::models::totals::LedgerTotals;
use crate::models::transaction::{Transaction, TransactionDraft, TransactionType};

/// Applies the ledger rules: how form submissions, deletions, and balance
/// resets change the transaction list and the two running scalars.
///
/// Pure business logic, no I/O. Easy to test.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a form submission and apply it to the ledger.
    ///
    /// With `editing == None` a new transaction is appended to the end of
    /// the list under a fresh id. With `editing == Some(id)` the matching
    /// transaction is replaced in place, keeping its slot and its id; a
    /// missing id fails with [`CoreError::TransactionNotFound`].
    ///
    /// In both cases the submission's full amount moves the running
    /// scalars: income raises `balance` and `cumulative_income`, expense
    /// lowers `balance`. An edit does NOT first reverse the replaced
    /// transaction's contribution; the running balance accumulates every
    /// submission it has ever seen, and [`Self::totals`] is the
    /// list-consistent view.
    ///
    /// Returns the id of the created or edited transaction. On any
    /// failure the ledger is untouched.
    pub fn submit(
        &self,
        ledger: &mut Ledger,
        draft: &TransactionDraft,
        editing: Option<Uuid>,
    ) -> Result<Uuid, CoreError> {
        match editing {
            Some(id) => {
                let idx = ledger
                    .transactions
                    .iter()
                    .position(|t| t.id == id)
                    .ok_or_else(|| CoreError::TransactionNotFound(id.to_string()))?;

                let updated = self.validate(draft, id)?;
                Self::apply_amount(ledger, &updated);
                ledger.transactions[idx] = updated;
                Ok(id)
            }
            None => {
                let transaction = self.validate(draft, Uuid::new_v4())?;
                let id = transaction.id;
                Self::apply_amount(ledger, &transaction);
                ledger.transactions.push(transaction);
                Ok(id)
            }
        }
    }

    /// Remove the transaction with the given id, leaving `balance` and
    /// `cumulative_income` exactly as they were.
    ///
    /// Returns whether a transaction was actually removed; an unknown id
    /// leaves the list unchanged and is not an error.
    pub fn remove(&self, ledger: &mut Ledger, id: Uuid) -> bool {
        let before = ledger.transactions.len();
        ledger.transactions.retain(|t| t.id != id);
        ledger.transactions.len() != before
    }

    /// Set the running balance back to zero. The transaction list and
    /// `cumulative_income` keep their values.
    pub fn reset_balance(&self, ledger: &mut Ledger) {
        ledger.balance = 0.0;
    }

    /// Recompute the income/expense/gross sums over the current list.
    ///
    /// Always derived from the full list, so the figures reflect
    /// deletions even though those never touched the running balance.
    pub fn totals(&self, ledger: &Ledger) -> LedgerTotals {
        let mut total_income = 0.0;
        let mut total_expenses = 0.0;

        for transaction in &ledger.transactions {
            match transaction.transaction_type {
                TransactionType::Income => total_income += transaction.amount,
                TransactionType::Expense => total_expenses += transaction.amount,
            }
        }

        LedgerTotals {
            total_income,
            total_expenses,
            total_amount: total_income + total_expenses,
        }
    }

    /// Check every field of a submission and build the transaction it
    /// describes, under the given id.
    ///
    /// Rules:
    /// - date present and a real `YYYY-MM-DD` calendar date
    /// - description non-empty after trimming (stored trimmed)
    /// - category selected and valid for the transaction kind
    /// - amount a positive finite number
    /// - payment method selected
    fn validate(&self, draft: &TransactionDraft, id: Uuid) -> Result<Transaction, CoreError> {
        let date_text = draft.date.trim();
        if date_text.is_empty() {
            return Err(CoreError::ValidationError("A date is required".into()));
        }
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|_| {
            CoreError::ValidationError(format!(
                "Date '{date_text}' is not a valid YYYY-MM-DD calendar date"
            ))
        })?;

        let description = draft.description.trim();
        if description.is_empty() {
            return Err(CoreError::ValidationError(
                "A description is required".into(),
            ));
        }

        let category = draft
            .category
            .ok_or_else(|| CoreError::ValidationError("A category is required".into()))?;
        if !category.valid_for(draft.transaction_type) {
            return Err(CoreError::ValidationError(format!(
                "Category '{category}' is not available for {} transactions",
                draft.transaction_type
            )));
        }

        let amount_text = draft.amount.trim();
        if amount_text.is_empty() {
            return Err(CoreError::ValidationError("An amount is required".into()));
        }
        let amount: f64 = amount_text.parse().map_err(|_| {
            CoreError::ValidationError(format!("Amount '{amount_text}' is not a number"))
        })?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Amount must be a positive number, got '{amount_text}'"
            )));
        }

        let payment_method = draft
            .payment_method
            .ok_or_else(|| CoreError::ValidationError("A payment method is required".into()))?;

        Ok(Transaction {
            id,
            date,
            description: description.to_string(),
            category,
            amount,
            payment_method,
            transaction_type: draft.transaction_type,
        })
    }

    /// Move the running scalars by a transaction's full amount.
    fn apply_amount(ledger: &mut Ledger, transaction: &Transaction) {
        match transaction.transaction_type {
            TransactionType::Income => {
                ledger.balance += transaction.amount;
                ledger.cumulative_income += transaction.amount;
            }
            TransactionType::Expense => {
                ledger.balance -= transaction.amount;
            }
        }
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
