// ═══════════════════════════════════════════════════════════════════
// Storage Tests: MemoryStore, LedgerStore record handling
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use uuid::Uuid;

use expense_tracker_core::models::category::Category;
use expense_tracker_core::models::ledger::Ledger;
use expense_tracker_core::models::transaction::{PaymentMethod, Transaction, TransactionType};
use expense_tracker_core::storage::adapter::{
    LedgerStore, BALANCE_KEY, CUMULATIVE_INCOME_KEY, TRANSACTIONS_KEY,
};
use expense_tracker_core::storage::memory::MemoryStore;
use expense_tracker_core::storage::traits::KeyValueStore;

fn make_date(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_transaction(description: &str, amount: f64, kind: TransactionType) -> Transaction {
    let category = match kind {
        TransactionType::Expense => Category::Food,
        TransactionType::Income => Category::Salary,
    };
    Transaction {
        id: Uuid::new_v4(),
        date: make_date(2025, 1, 15),
        description: description.to_string(),
        category,
        amount,
        payment_method: PaymentMethod::Cash,
        transaction_type: kind,
    }
}

/// A raw handle into the same map the adapter writes through.
fn store_pair() -> (MemoryStore, LedgerStore) {
    let store = MemoryStore::new();
    let adapter = LedgerStore::new(Box::new(store.clone()));
    (store, adapter)
}

// ═══════════════════════════════════════════════════════════════════
//  Record keys
// ═══════════════════════════════════════════════════════════════════

mod record_keys {
    use super::*;

    #[test]
    fn transaction_list_key() {
        assert_eq!(TRANSACTIONS_KEY, "expenses");
    }

    #[test]
    fn balance_key() {
        assert_eq!(BALANCE_KEY, "permanentBalance");
    }

    #[test]
    fn cumulative_income_key() {
        assert_eq!(CUMULATIVE_INCOME_KEY, "totalIncome");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MemoryStore
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.raw("anything"), None);
    }

    #[test]
    fn insert_then_raw() {
        let store = MemoryStore::new();
        store.insert_raw("k", "v");
        assert_eq!(store.raw("k").as_deref(), Some("v"));
    }

    #[test]
    fn clone_shares_the_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.insert_raw("k", "v");

        assert_eq!(handle.raw("k").as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn get_returns_what_set_stored() {
        let store = MemoryStore::new();
        store.set("k", "value").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn set_replaces_the_value() {
        let store = MemoryStore::new();
        store.set("k", "1").await.unwrap();
        store.set("k", "2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("2"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  load_ledger: defaults and fallbacks
// ═══════════════════════════════════════════════════════════════════

mod load_defaults {
    use super::*;

    #[tokio::test]
    async fn empty_store_loads_an_empty_ledger() {
        let (_store, adapter) = store_pair();

        let ledger = adapter.load_ledger().await;

        assert!(ledger.transactions.is_empty());
        assert_eq!(ledger.balance, 0.0);
        assert_eq!(ledger.cumulative_income, 0.0);
    }

    #[tokio::test]
    async fn records_default_independently() {
        let (store, adapter) = store_pair();
        store.insert_raw(BALANCE_KEY, "800");

        let ledger = adapter.load_ledger().await;

        assert!(ledger.transactions.is_empty());
        assert_eq!(ledger.balance, 800.0);
        assert_eq!(ledger.cumulative_income, 0.0);
    }

    #[tokio::test]
    async fn unreadable_list_falls_back_to_empty() {
        let (store, adapter) = store_pair();
        store.insert_raw(TRANSACTIONS_KEY, "not json at all");
        store.insert_raw(BALANCE_KEY, "800");

        let ledger = adapter.load_ledger().await;

        // The bad record defaults without poisoning the good ones
        assert!(ledger.transactions.is_empty());
        assert_eq!(ledger.balance, 800.0);
    }

    #[tokio::test]
    async fn half_written_record_falls_back() {
        let (store, adapter) = store_pair();
        store.insert_raw(TRANSACTIONS_KEY, r#"[{"id":"a2f5a9a2-6f8e"#);

        let ledger = adapter.load_ledger().await;

        assert!(ledger.transactions.is_empty());
    }

    #[tokio::test]
    async fn wrong_shape_falls_back_to_zero() {
        let (store, adapter) = store_pair();
        store.insert_raw(BALANCE_KEY, "\"eight hundred\"");

        let ledger = adapter.load_ledger().await;

        assert_eq!(ledger.balance, 0.0);
    }

    #[tokio::test]
    async fn scalar_records_parse_as_numbers() {
        let (store, adapter) = store_pair();
        store.insert_raw(BALANCE_KEY, "-42.5");
        store.insert_raw(CUMULATIVE_INCOME_KEY, "1000.5");

        let ledger = adapter.load_ledger().await;

        assert_eq!(ledger.balance, -42.5);
        assert_eq!(ledger.cumulative_income, 1000.5);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  load_ledger: wire format
// ═══════════════════════════════════════════════════════════════════

mod load_wire_format {
    use super::*;

    #[tokio::test]
    async fn reads_rows_written_by_hand() {
        let (store, adapter) = store_pair();
        store.insert_raw(
            TRANSACTIONS_KEY,
            r#"[
                {
                    "id": "a2f5a9a2-6f8e-4c5b-9b62-0f3a2d6c1e44",
                    "date": "2025-02-03",
                    "description": "Groceries",
                    "category": "Food",
                    "amount": 42.5,
                    "paymentMethod": "Credit Card",
                    "type": "expense"
                },
                {
                    "id": "0b4459a4-5a40-4bf9-8f5c-6f0a2a7b91d3",
                    "date": "2025-01-31",
                    "description": "Monthly salary",
                    "category": "Salary",
                    "amount": 1000,
                    "paymentMethod": "Bank Transfer",
                    "type": "income"
                }
            ]"#,
        );
        store.insert_raw(BALANCE_KEY, "957.5");
        store.insert_raw(CUMULATIVE_INCOME_KEY, "1000");

        let ledger = adapter.load_ledger().await;

        assert_eq!(ledger.transactions.len(), 2);
        assert_eq!(ledger.balance, 957.5);
        assert_eq!(ledger.cumulative_income, 1000.0);

        let expense = &ledger.transactions[0];
        assert_eq!(expense.description, "Groceries");
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.payment_method, PaymentMethod::CreditCard);
        assert_eq!(expense.transaction_type, TransactionType::Expense);
        assert_eq!(expense.date, make_date(2025, 2, 3));

        let income = &ledger.transactions[1];
        assert_eq!(income.payment_method, PaymentMethod::BankTransfer);
        assert_eq!(income.transaction_type, TransactionType::Income);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  save_snapshot
// ═══════════════════════════════════════════════════════════════════

mod save_snapshot {
    use super::*;

    #[tokio::test]
    async fn writes_all_three_records() {
        let (store, adapter) = store_pair();

        adapter.save_snapshot(&Ledger::default()).await.unwrap();

        assert!(store.raw(TRANSACTIONS_KEY).is_some());
        assert!(store.raw(BALANCE_KEY).is_some());
        assert!(store.raw(CUMULATIVE_INCOME_KEY).is_some());
    }

    #[tokio::test]
    async fn empty_ledger_snapshot_shape() {
        let (store, adapter) = store_pair();

        adapter.save_snapshot(&Ledger::default()).await.unwrap();

        assert_eq!(store.raw(TRANSACTIONS_KEY).as_deref(), Some("[]"));
        assert_eq!(store.raw(BALANCE_KEY).as_deref(), Some("0.0"));
        assert_eq!(store.raw(CUMULATIVE_INCOME_KEY).as_deref(), Some("0.0"));
    }

    #[tokio::test]
    async fn round_trip_preserves_the_ledger() {
        let (_store, adapter) = store_pair();

        let mut ledger = Ledger::default();
        ledger
            .transactions
            .push(sample_transaction("Monthly salary", 1000.0, TransactionType::Income));
        ledger
            .transactions
            .push(sample_transaction("Groceries", 200.0, TransactionType::Expense));
        ledger.balance = 800.0;
        ledger.cumulative_income = 1000.0;

        adapter.save_snapshot(&ledger).await.unwrap();
        let loaded = adapter.load_ledger().await;

        assert_eq!(loaded.transactions, ledger.transactions);
        assert_eq!(loaded.balance, 800.0);
        assert_eq!(loaded.cumulative_income, 1000.0);
    }

    #[tokio::test]
    async fn written_rows_use_the_wire_keys() {
        let (store, adapter) = store_pair();

        let mut ledger = Ledger::default();
        ledger
            .transactions
            .push(sample_transaction("Monthly salary", 1000.0, TransactionType::Income));

        adapter.save_snapshot(&ledger).await.unwrap();

        let raw = store.raw(TRANSACTIONS_KEY).unwrap();
        assert!(raw.contains("\"paymentMethod\":\"Cash\""));
        assert!(raw.contains("\"type\":\"income\""));
        assert!(raw.contains("\"date\":\"2025-01-15\""));
        assert!(!raw.contains("transaction_type"));
    }

    #[tokio::test]
    async fn scalar_records_are_plain_numbers() {
        let (store, adapter) = store_pair();

        let mut ledger = Ledger::default();
        ledger.balance = 800.0;
        ledger.cumulative_income = 1000.0;

        adapter.save_snapshot(&ledger).await.unwrap();

        assert_eq!(store.raw(BALANCE_KEY).as_deref(), Some("800.0"));
        assert_eq!(store.raw(CUMULATIVE_INCOME_KEY).as_deref(), Some("1000.0"));
    }

    #[tokio::test]
    async fn overwrites_the_previous_snapshot() {
        let (store, adapter) = store_pair();

        let mut ledger = Ledger::default();
        ledger
            .transactions
            .push(sample_transaction("Groceries", 200.0, TransactionType::Expense));
        ledger.balance = -200.0;
        adapter.save_snapshot(&ledger).await.unwrap();

        adapter.save_snapshot(&Ledger::default()).await.unwrap();

        assert_eq!(store.raw(TRANSACTIONS_KEY).as_deref(), Some("[]"));
        assert_eq!(store.raw(BALANCE_KEY).as_deref(), Some("0.0"));

        let loaded = adapter.load_ledger().await;
        assert!(loaded.transactions.is_empty());
        assert_eq!(loaded.balance, 0.0);
    }
}
