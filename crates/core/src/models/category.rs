use serde::{Deserialize, Serialize};

use super::transaction::TransactionType;

/// Category of a transaction. Each transaction kind has its own fixed set;
/// `Other` is the only category shared by both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    // Expense categories
    Food,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    // Income categories
    Salary,
    Bonus,
    Investment,
    Gift,
    // Valid for both kinds
    Other,
}

/// Categories offered on the expense tab, in form order.
const EXPENSE_CATEGORIES: [Category; 8] = [
    Category::Food,
    Category::Transport,
    Category::Housing,
    Category::Utilities,
    Category::Entertainment,
    Category::Health,
    Category::Shopping,
    Category::Other,
];

/// Categories offered on the income tab, in form order.
const INCOME_CATEGORIES: [Category; 5] = [
    Category::Salary,
    Category::Bonus,
    Category::Investment,
    Category::Gift,
    Category::Other,
];

impl Category {
    /// The fixed category set for a transaction kind, in the order the
    /// form presents them.
    pub fn for_type(transaction_type: TransactionType) -> &'static [Category] {
        match transaction_type {
            TransactionType::Expense => &EXPENSE_CATEGORIES,
            TransactionType::Income => &INCOME_CATEGORIES,
        }
    }

    /// Whether this category belongs to the set for the given kind.
    pub fn valid_for(&self, transaction_type: TransactionType) -> bool {
        Self::for_type(transaction_type).contains(self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Food => write!(f, "Food"),
            Category::Transport => write!(f, "Transport"),
            Category::Housing => write!(f, "Housing"),
            Category::Utilities => write!(f, "Utilities"),
            Category::Entertainment => write!(f, "Entertainment"),
            Category::Health => write!(f, "Health"),
            Category::Shopping => write!(f, "Shopping"),
            Category::Salary => write!(f, "Salary"),
            Category::Bonus => write!(f, "Bonus"),
            Category::Investment => write!(f, "Investment"),
            Category::Gift => write!(f, "Gift"),
            Category::Other => write!(f, "Other"),
        }
    }
}
