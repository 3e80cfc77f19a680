use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Kind of a recorded transaction. Decides the sign applied to the
/// running balance and which category set is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money going out (the form's default tab)
    #[default]
    Expense,
    /// Money coming in
    Income,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Expense => write!(f, "Expense"),
            TransactionType::Income => write!(f, "Income"),
        }
    }
}

/// How a transaction was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
}

impl PaymentMethod {
    /// Every payment method, in the order the form lists them.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::BankTransfer,
    ];
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "Cash"),
            PaymentMethod::CreditCard => write!(f, "Credit Card"),
            PaymentMethod::BankTransfer => write!(f, "Bank Transfer"),
        }
    }
}

/// A single recorded income or expense entry.
///
/// **Important**: `amount` is always positive. The kind carries the sign,
/// so an expense of 200 is stored as `200.0`, never `-200.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, preserved across edits
    pub id: Uuid,

    /// Calendar date of the transaction (no time component)
    pub date: NaiveDate,

    /// Free-text description, non-empty
    pub description: String,

    /// One of the fixed categories for the transaction's kind
    pub category: Category,

    /// Amount of money moved (always positive)
    pub amount: f64,

    /// How the transaction was paid
    pub payment_method: PaymentMethod,

    /// Income or expense
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// A raw form submission, checked by the ledger before it becomes a
/// [`Transaction`]. Text inputs stay text so the engine owns the parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    /// Date input, expected as `YYYY-MM-DD`
    pub date: String,

    /// Description input
    pub description: String,

    /// Selected category, if any
    pub category: Option<Category>,

    /// Amount input, expected to parse as a positive decimal
    pub amount: String,

    /// Selected payment method, if any
    pub payment_method: Option<PaymentMethod>,

    /// Which tab the form was submitted from
    pub transaction_type: TransactionType,
}

impl TransactionDraft {
    /// A fully filled-in expense submission.
    pub fn expense(
        date: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        amount: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: Some(category),
            amount: amount.into(),
            payment_method: Some(payment_method),
            transaction_type: TransactionType::Expense,
        }
    }

    /// A fully filled-in income submission.
    pub fn income(
        date: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        amount: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: Some(category),
            amount: amount.into(),
            payment_method: Some(payment_method),
            transaction_type: TransactionType::Income,
        }
    }
}
