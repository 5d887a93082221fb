//! Display-ready projection of the ledger. Nothing here touches the terminal;
//! `render` draws whatever these types describe.

use rust_decimal::Decimal;

use super::util::format_money;
use crate::ledger::{summarize, Ledger, Summary};
use crate::models::{Filter, Record, RecordType};

/// Shown as an item title when a record has neither note nor category.
pub(crate) const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    NonNegative,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SummaryView {
    pub income: String,
    pub expense: String,
    pub balance: String,
    pub polarity: Polarity,
}

impl From<&Summary> for SummaryView {
    fn from(summary: &Summary) -> Self {
        Self {
            income: format_money(summary.income),
            expense: format_money(summary.expense),
            balance: format_money(summary.balance),
            polarity: if summary.balance >= Decimal::ZERO {
                Polarity::NonNegative
            } else {
                Polarity::Negative
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListItem {
    pub id: String,
    pub title: String,
    pub meta: String,
    pub amount: String,
    pub kind: RecordType,
}

impl From<&Record> for ListItem {
    fn from(record: &Record) -> Self {
        let title = [record.note.as_str(), record.category.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(UNTITLED)
            .to_string();
        Self {
            id: record.id.clone(),
            title,
            meta: format!("{} · {}", record.category, record.date.format("%Y-%m-%d")),
            amount: format!("{}{}", record.kind.sign(), format_money(record.amount)),
            kind: record.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListView {
    /// Nothing to list; the empty-state message is shown instead.
    Empty,
    Items(Vec<ListItem>),
}

impl ListView {
    pub(crate) fn build<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let items: Vec<ListItem> = records.into_iter().map(ListItem::from).collect();
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }

    pub(crate) fn items(&self) -> &[ListItem] {
        match self {
            Self::Empty => &[],
            Self::Items(items) => items,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items().len()
    }
}

/// Everything the screen shows, derived from the ledger and the active filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ViewModel {
    pub filter: Filter,
    pub summary: SummaryView,
    pub list: ListView,
}

impl ViewModel {
    /// `records` is the full ledger. The summary always covers all of it; only
    /// the list honours `filter`.
    pub(crate) fn build(records: &[Record], filter: Filter) -> Self {
        Self {
            filter,
            summary: SummaryView::from(&summarize(records)),
            list: ListView::build(records.iter().filter(|r| filter.matches(r))),
        }
    }

    pub(crate) fn of(ledger: &Ledger, filter: Filter) -> Self {
        Self {
            filter,
            summary: SummaryView::from(&ledger.summary()),
            list: ListView::build(ledger.filtered(filter)),
        }
    }
}
