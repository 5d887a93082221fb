use rust_decimal::Decimal;

use crate::models::{Record, RecordType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Totals over `records`. Callers pass the whole ledger, not a filtered view.
///
/// Totals saturate at the `Decimal` bounds instead of panicking, so a store
/// holding oversized amounts still opens.
pub(crate) fn summarize(records: &[Record]) -> Summary {
    let total = |kind: RecordType| -> Decimal {
        records
            .iter()
            .filter(|r| r.kind == kind)
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.amount))
    };
    let income = total(RecordType::Income);
    let expense = total(RecordType::Expense);
    Summary {
        income,
        expense,
        balance: income.saturating_sub(expense),
    }
}
