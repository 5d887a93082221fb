#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::form::*;
use crate::error::SubmitError;
use crate::models::{RecordType, MAX_AMOUNT};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn form(kind: RecordType, amount: &str) -> FormState {
    let mut form = FormState::new(today());
    form.set_kind(kind);
    form.amount = amount.into();
    form
}

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_new_form_defaults() {
    let form = FormState::new(today());
    assert_eq!(form.kind, RecordType::Expense);
    assert_eq!(form.date, "2024-06-01");
    assert_eq!(form.selected_category(), Some("Food"));
    assert_eq!(form.field, FormField::Amount);
    assert!(form.amount.is_empty());
    assert!(form.note.is_empty());
}

// ── Type toggle ───────────────────────────────────────────────

#[test]
fn test_toggle_selects_first_category_of_new_type() {
    let mut form = FormState::new(today());
    form.cycle_category(2);
    form.toggle_kind();
    assert_eq!(form.kind, RecordType::Income);
    assert_eq!(form.selected_category(), Some("Salary"));

    form.toggle_kind();
    assert_eq!(form.kind, RecordType::Expense);
    assert_eq!(form.selected_category(), Some("Food"));
}

#[test]
fn test_category_options_enable_only_current_type() {
    let mut form = FormState::new(today());
    form.set_kind(RecordType::Income);
    let options = form.category_options();

    let total = RecordType::Income.categories().len() + RecordType::Expense.categories().len();
    assert_eq!(options.len(), total);
    for option in &options {
        assert_eq!(option.enabled, option.kind == RecordType::Income, "{}", option.label);
    }
}

#[test]
fn test_cycle_category_wraps() {
    let mut form = form(RecordType::Income, "");
    let count = RecordType::Income.categories().len() as i32;

    form.cycle_category(-1);
    assert_eq!(form.selected_category(), Some("Other Income"));
    form.cycle_category(1);
    assert_eq!(form.selected_category(), Some("Salary"));
    form.cycle_category(count);
    assert_eq!(form.selected_category(), Some("Salary"));
}

#[test]
fn test_select_category_rejects_other_type() {
    let mut form = form(RecordType::Expense, "");
    assert!(form.select_category("shopping"));
    assert_eq!(form.selected_category(), Some("Shopping"));

    assert!(!form.select_category("Salary"));
    assert_eq!(form.selected_category(), Some("Shopping"));
}

// ── Fields ────────────────────────────────────────────────────

#[test]
fn test_field_cycle() {
    let mut form = FormState::new(today());
    form.next_field();
    assert_eq!(form.field, FormField::Category);
    assert!(form.input_mut().is_none());
    form.next_field();
    form.next_field();
    assert_eq!(form.field, FormField::Date);
    form.next_field();
    assert_eq!(form.field, FormField::Amount);
    form.prev_field();
    assert_eq!(form.field, FormField::Date);
}

#[test]
fn test_input_mut_targets_focused_field() {
    let mut form = FormState::new(today());
    form.field = FormField::Note;
    form.input_mut().unwrap().push_str("coffee");
    assert_eq!(form.note, "coffee");
}

// ── Submission ────────────────────────────────────────────────

#[test]
fn test_submission_income_defaults() {
    let mut form = form(RecordType::Income, "100");
    form.category_index = None;
    form.date.clear();

    let input = form.submission(today()).unwrap();
    assert_eq!(input.kind, RecordType::Income);
    assert_eq!(input.amount, dec!(100));
    assert_eq!(input.category, "Other Income");
    assert_eq!(input.note, "");
    assert_eq!(input.date, today());
}

#[test]
fn test_submission_uses_selected_category() {
    let form = form(RecordType::Income, "100");
    assert_eq!(form.submission(today()).unwrap().category, "Salary");
}

#[test]
fn test_submission_negative_amount_is_absolute() {
    let input = form(RecordType::Expense, "-5").submission(today()).unwrap();
    assert_eq!(input.kind, RecordType::Expense);
    assert_eq!(input.amount, dec!(5));
}

#[test]
fn test_submission_rejects_zero_and_garbage() {
    for amount in ["0", "", "abc", "-0", "0.000"] {
        let result = form(RecordType::Expense, amount).submission(today());
        assert!(
            matches!(result, Err(SubmitError::InvalidAmount)),
            "{amount:?} should be rejected"
        );
    }
}

#[test]
fn test_submission_rejects_amounts_over_ceiling() {
    for amount in ["5e28", "1e16", "1000000000000000.01", "-2e15"] {
        let result = form(RecordType::Income, amount).submission(today());
        assert!(
            matches!(result, Err(SubmitError::AmountTooLarge(ref max)) if max == "1,000,000,000,000,000.00"),
            "{amount:?} should be rejected, got {result:?}"
        );
    }
}

#[test]
fn test_submission_accepts_amounts_at_ceiling() {
    let input = form(RecordType::Income, "1e15").submission(today()).unwrap();
    assert_eq!(input.amount, MAX_AMOUNT);

    let input = form(RecordType::Income, "999999999999999.99")
        .submission(today())
        .unwrap();
    assert_eq!(input.amount, dec!(999999999999999.99));
}

#[test]
fn test_submission_trims_note() {
    let mut form = form(RecordType::Expense, "3");
    form.note = "  tea  ".into();
    assert_eq!(form.submission(today()).unwrap().note, "tea");
}

#[test]
fn test_submission_parses_date() {
    let mut form = form(RecordType::Expense, "3");
    form.date = "2023-12-31".into();
    assert_eq!(
        form.submission(today()).unwrap().date,
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    );
}

#[test]
fn test_submission_rejects_bad_date() {
    let mut form = form(RecordType::Expense, "3");
    form.date = "31/12/2023".into();
    assert!(matches!(
        form.submission(today()),
        Err(SubmitError::InvalidDate(d)) if d == "31/12/2023"
    ));
}

#[test]
fn test_submission_keeps_precision() {
    let input = form(RecordType::Expense, "0.125").submission(today()).unwrap();
    assert_eq!(input.amount, dec!(0.125));
}

// ── Reset ─────────────────────────────────────────────────────

#[test]
fn test_reset_after_submit() {
    let mut form = form(RecordType::Income, "50");
    form.note = "gift".into();
    form.date = "2024-05-20".into();
    form.cycle_category(2);
    form.field = FormField::Note;

    form.reset_after_submit(today());
    assert!(form.amount.is_empty());
    assert!(form.note.is_empty());
    assert_eq!(form.date, "2024-05-20");
    assert_eq!(form.kind, RecordType::Income);
    assert_eq!(form.selected_category(), Some("Salary"));
    assert_eq!(form.field, FormField::Amount);
}

#[test]
fn test_reset_refills_empty_date() {
    let mut form = form(RecordType::Expense, "1");
    form.date = "  ".into();
    form.reset_after_submit(today());
    assert_eq!(form.date, "2024-06-01");
}
