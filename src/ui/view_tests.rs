#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::view::*;
use crate::ledger::Summary;
use crate::models::{Filter, Record, RecordType};

fn record(id: &str, kind: RecordType, amount: Decimal, category: &str, note: &str) -> Record {
    Record {
        id: id.into(),
        kind,
        amount,
        category: category.into(),
        note: note.into(),
        date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
    }
}

fn sample() -> Vec<Record> {
    vec![
        record("id_3", RecordType::Expense, dec!(30), "Food", "lunch"),
        record("id_2", RecordType::Income, dec!(1500), "Salary", ""),
        record("id_1", RecordType::Expense, dec!(2.5), "Transport", ""),
    ]
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_view_formats_totals() {
    let view = SummaryView::from(&Summary {
        income: dec!(1500),
        expense: dec!(32.5),
        balance: dec!(1467.5),
    });
    assert_eq!(view.income, "1,500.00");
    assert_eq!(view.expense, "32.50");
    assert_eq!(view.balance, "1,467.50");
    assert_eq!(view.polarity, Polarity::NonNegative);
}

#[test]
fn test_summary_view_negative_balance() {
    let view = SummaryView::from(&Summary {
        income: dec!(10),
        expense: dec!(25),
        balance: dec!(-15),
    });
    assert_eq!(view.balance, "-15.00");
    assert_eq!(view.polarity, Polarity::Negative);
}

#[test]
fn test_summary_view_zero_is_non_negative() {
    let view = SummaryView::from(&Summary::default());
    assert_eq!(view.balance, "0.00");
    assert_eq!(view.polarity, Polarity::NonNegative);
}

// ── List items ────────────────────────────────────────────────

#[test]
fn test_item_title_prefers_note() {
    let item = ListItem::from(&record("id", RecordType::Expense, dec!(1), "Food", "lunch"));
    assert_eq!(item.title, "lunch");
}

#[test]
fn test_item_title_falls_back_to_category() {
    let item = ListItem::from(&record("id", RecordType::Expense, dec!(1), "Food", ""));
    assert_eq!(item.title, "Food");
}

#[test]
fn test_item_title_falls_back_to_placeholder() {
    let item = ListItem::from(&record("id", RecordType::Expense, dec!(1), "", ""));
    assert_eq!(item.title, UNTITLED);
}

#[test]
fn test_item_meta_and_signed_amount() {
    let expense = ListItem::from(&record("id_a", RecordType::Expense, dec!(1234.5), "Food", ""));
    assert_eq!(expense.id, "id_a");
    assert_eq!(expense.meta, "Food · 2024-03-09");
    assert_eq!(expense.amount, "-1,234.50");
    assert_eq!(expense.kind, RecordType::Expense);

    let income = ListItem::from(&record("id_b", RecordType::Income, dec!(100), "Salary", ""));
    assert_eq!(income.amount, "+100.00");
}

#[test]
fn test_list_view_empty() {
    let list = ListView::build(&Vec::<Record>::new());
    assert_eq!(list, ListView::Empty);
    assert_eq!(list.len(), 0);
    assert!(list.items().is_empty());
}

#[test]
fn test_list_view_keeps_order() {
    let records = sample();
    let list = ListView::build(&records);
    let ids: Vec<&str> = list.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["id_3", "id_2", "id_1"]);
}

// ── View model ────────────────────────────────────────────────

#[test]
fn test_view_model_summary_ignores_filter() {
    let records = sample();
    let all = ViewModel::build(&records, Filter::All);
    let income_only = ViewModel::build(&records, Filter::Income);

    assert_eq!(all.summary, income_only.summary);
    assert_eq!(all.summary.income, "1,500.00");
    assert_eq!(all.summary.expense, "32.50");
    assert_eq!(all.summary.balance, "1,467.50");
}

#[test]
fn test_view_model_list_honours_filter() {
    let records = sample();

    let view = ViewModel::build(&records, Filter::Expense);
    assert_eq!(view.filter, Filter::Expense);
    let ids: Vec<&str> = view.list.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["id_3", "id_1"]);

    let view = ViewModel::build(&records, Filter::Income);
    assert_eq!(view.list.len(), 1);
}

#[test]
fn test_view_model_empty_when_filter_matches_nothing() {
    let records = vec![record("id_1", RecordType::Expense, dec!(5), "Food", "")];
    let view = ViewModel::build(&records, Filter::Income);
    assert_eq!(view.list, ListView::Empty);
    assert_eq!(view.summary.expense, "5.00");
}

#[test]
fn test_view_model_is_idempotent() {
    let records = sample();
    let first = ViewModel::build(&records, Filter::All);
    let second = ViewModel::build(&records, Filter::All);
    assert_eq!(first, second);
}
