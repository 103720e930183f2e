//! Transaction model
//!
//! A transaction is a single income or expense event. It refers to its
//! category by *name*, so renaming or deleting a category is handled by the
//! category service rather than by the model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::kind::TransactionKind;
use super::money::Money;

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-text description
    pub description: String,

    /// Amount, never negative; the kind carries the direction
    pub amount: Money,

    /// Name of the category this transaction is tagged with
    pub category: String,

    /// Income or expense
    pub kind: TransactionKind,

    /// Transaction date
    pub date: NaiveDate,

    /// Optional notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            category: category.into(),
            kind,
            date,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach notes (builder style)
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = normalize_notes(Some(notes.into()));
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The amount with its direction applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Replace every user-editable field at once
    pub fn apply(&mut self, fields: TransactionFields) {
        self.description = fields.description;
        self.amount = fields.amount;
        self.category = fields.category;
        self.kind = fields.kind;
        self.date = fields.date;
        self.notes = normalize_notes(fields.notes);
        self.updated_at = Utc::now();
    }

    /// The user-editable fields of this transaction
    pub fn fields(&self) -> TransactionFields {
        TransactionFields {
            description: self.description.clone(),
            amount: self.amount,
            category: self.category.clone(),
            kind: self.kind,
            date: self.date,
            notes: self.notes.clone(),
        }
    }

    /// Largest amount a single transaction may carry
    pub const MAX_AMOUNT: Money = Money::from_units(1_000_000_000_000, 0);

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Self::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

/// The complete set of user-editable transaction fields
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub notes: Option<String>,
}

fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount(),
            self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    EmptyCategory,
    NegativeAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::EmptyCategory => write!(f, "Category is required"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} exceeds the limit of {}",
                amount,
                Transaction::MAX_AMOUNT
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
