use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::util::{format_money, parse_amount};
use crate::error::SubmitError;
use crate::models::{RecordInput, RecordType, MAX_AMOUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Amount,
    Category,
    Note,
    Date,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[Self::Amount, Self::Category, Self::Note, Self::Date]
    }

    pub(crate) fn is_text(&self) -> bool {
        !matches!(self, Self::Category)
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Amount => write!(f, "Amount"),
            Self::Category => write!(f, "Category"),
            Self::Note => write!(f, "Note"),
            Self::Date => write!(f, "Date"),
        }
    }
}

/// One entry of the category picker. Options of the other type stay listed
/// but cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CategoryOption {
    pub label: &'static str,
    pub kind: RecordType,
    pub enabled: bool,
}

/// Raw contents of the entry form, exactly as typed.
#[derive(Debug, Clone)]
pub(crate) struct FormState {
    pub kind: RecordType,
    pub amount: String,
    /// Index into `kind.categories()`; `None` submits the type's fallback.
    pub category_index: Option<usize>,
    pub note: String,
    pub date: String,
    pub field: FormField,
}

impl FormState {
    pub(crate) fn new(today: NaiveDate) -> Self {
        let mut form = Self {
            kind: RecordType::Expense,
            amount: String::new(),
            category_index: None,
            note: String::new(),
            date: String::new(),
            field: FormField::Amount,
        };
        form.fill_default_date(today);
        form.sync_category();
        form
    }

    pub(crate) fn category_options(&self) -> Vec<CategoryOption> {
        let current = self.kind;
        [RecordType::Income, RecordType::Expense]
            .into_iter()
            .flat_map(|kind| {
                kind.categories().iter().map(move |&label| CategoryOption {
                    label,
                    kind,
                    enabled: kind == current,
                })
            })
            .collect()
    }

    pub(crate) fn selected_category(&self) -> Option<&'static str> {
        self.category_index
            .and_then(|i| self.kind.categories().get(i).copied())
    }

    /// Select `label` if it belongs to the current type.
    pub(crate) fn select_category(&mut self, label: &str) -> bool {
        match self.kind.find_category(label) {
            Some(found) => {
                self.category_index = self.kind.categories().iter().position(|c| *c == found);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_kind(&mut self, kind: RecordType) {
        self.kind = kind;
        self.sync_category();
    }

    pub(crate) fn toggle_kind(&mut self) {
        self.set_kind(self.kind.toggled());
    }

    /// Step through the enabled categories, wrapping at either end.
    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let len = self.kind.categories().len();
        if len == 0 {
            self.category_index = None;
            return;
        }
        let current = self.category_index.unwrap_or(0) as i64;
        let next = (current + i64::from(delta)).rem_euclid(len as i64);
        self.category_index = Some(next as usize);
    }

    pub(crate) fn next_field(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(idx + 1) % fields.len()];
    }

    pub(crate) fn prev_field(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// The text buffer behind the focused field, if it is a text field.
    pub(crate) fn input_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Amount => Some(&mut self.amount),
            FormField::Note => Some(&mut self.note),
            FormField::Date => Some(&mut self.date),
            FormField::Category => None,
        }
    }

    /// Validate the form into a record input. Nothing is mutated on failure.
    pub(crate) fn submission(&self, today: NaiveDate) -> Result<RecordInput, SubmitError> {
        let amount = parse_amount(&self.amount).abs();
        if amount <= Decimal::ZERO {
            return Err(SubmitError::InvalidAmount);
        }
        if amount > MAX_AMOUNT {
            return Err(SubmitError::AmountTooLarge(format_money(MAX_AMOUNT)));
        }

        let date_text = self.date.trim();
        let date = if date_text.is_empty() {
            today
        } else {
            NaiveDate::parse_from_str(date_text, "%Y-%m-%d")
                .map_err(|_| SubmitError::InvalidDate(date_text.to_string()))?
        };

        let category = self
            .selected_category()
            .unwrap_or_else(|| self.kind.fallback_category())
            .to_string();

        Ok(RecordInput {
            kind: self.kind,
            amount,
            category,
            note: self.note.trim().to_string(),
            date,
        })
    }

    /// Clear the per-entry fields after a successful submit. The type and a
    /// non-empty date carry over to the next entry.
    pub(crate) fn reset_after_submit(&mut self, today: NaiveDate) {
        self.amount.clear();
        self.note.clear();
        self.fill_default_date(today);
        self.sync_category();
        self.field = FormField::Amount;
    }

    fn fill_default_date(&mut self, today: NaiveDate) {
        if self.date.trim().is_empty() {
            self.date = today.format("%Y-%m-%d").to_string();
        }
    }

    /// Select the first category the current type allows.
    fn sync_category(&mut self) {
        self.category_index = if self.kind.categories().is_empty() {
            None
        } else {
            Some(0)
        };
    }
}
