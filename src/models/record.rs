use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest amount a single record may carry (1e15). Keeps totals over any
/// realistic ledger well inside `Decimal` range.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RecordType {
    Income,
    Expense,
}

impl RecordType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "i" => Some(Self::Income),
            "expense" | "out" | "e" => Some(Self::Expense),
            _ => None,
        }
    }

    pub(crate) fn toggled(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }

    /// `+` for income, `-` for expense.
    pub(crate) fn sign(&self) -> &'static str {
        match self {
            Self::Income => "+",
            Self::Expense => "-",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// One income or expense entry. Field names match the stored JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Record {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecordType,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub category: String,
    #[serde(default)]
    pub note: String,
    pub date: NaiveDate,
}

/// Validated fields for a new record; the ledger assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordInput {
    pub kind: RecordType,
    pub amount: Decimal,
    pub category: String,
    pub note: String,
    pub date: NaiveDate,
}

impl RecordInput {
    pub(crate) fn into_record(self, id: String) -> Record {
        Record {
            id,
            kind: self.kind,
            amount: self.amount,
            category: self.category,
            note: self.note,
            date: self.date,
        }
    }
}
