use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::models::ledger::Ledger;

use super::traits::KeyValueStore;

/// Storage key for the serialized transaction list.
pub const TRANSACTIONS_KEY: &str = "expenses";

/// Storage key for the running balance.
pub const BALANCE_KEY: &str = "permanentBalance";

/// Storage key for the cumulative income figure.
pub const CUMULATIVE_INCOME_KEY: &str = "totalIncome";

/// High-level ledger persistence: three JSON records in an opaque
/// key-value store.
pub struct LedgerStore {
    store: Box<dyn KeyValueStore>,
}

impl LedgerStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the persisted ledger.
    ///
    /// Each record independently falls back to its default (empty list,
    /// zero balance, zero cumulative income) when it is missing or
    /// unreadable or the store itself fails, so startup never fails on
    /// bad storage contents.
    pub async fn load_ledger(&self) -> Ledger {
        Ledger {
            transactions: self.load_record(TRANSACTIONS_KEY).await,
            balance: self.load_record(BALANCE_KEY).await,
            cumulative_income: self.load_record(CUMULATIVE_INCOME_KEY).await,
        }
    }

    /// Persist all three ledger records.
    ///
    /// Records are written one at a time (list, then balance, then
    /// cumulative income); the first failure aborts the rest and is
    /// returned, at which point already-written records are durable while
    /// later ones keep their old values. The store contract has no
    /// multi-key commit, so that window cannot be closed here.
    pub async fn save_snapshot(&self, ledger: &Ledger) -> Result<(), CoreError> {
        self.save_record(TRANSACTIONS_KEY, &ledger.transactions).await?;
        self.save_record(BALANCE_KEY, &ledger.balance).await?;
        self.save_record(CUMULATIVE_INCOME_KEY, &ledger.cumulative_income)
            .await?;
        Ok(())
    }

    async fn load_record<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("Record '{key}' not present, using default");
                return T::default();
            }
            Err(err) => {
                tracing::warn!("Failed to read record '{key}', using default: {err}");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("Record '{key}' is unreadable, using default: {err}");
                T::default()
            }
        }
    }

    async fn save_record<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value).map_err(|e| {
            CoreError::Serialization(format!("Failed to serialize record '{key}': {e}"))
        })?;

        if let Err(err) = self.store.set(key, &raw).await {
            tracing::error!("Failed to write record '{key}': {err}");
            return Err(err);
        }
        Ok(())
    }
}
