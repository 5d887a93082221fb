use super::RecordType;

const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Bonus",
    "Investment",
    "Part-time",
    "Other Income",
];

const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Shopping",
    "Housing",
    "Utilities",
    "Entertainment",
    "Health",
    "Education",
    "Other Expense",
];

impl RecordType {
    /// Category labels selectable for this record type. The two sets are disjoint.
    pub(crate) fn categories(&self) -> &'static [&'static str] {
        match self {
            Self::Income => INCOME_CATEGORIES,
            Self::Expense => EXPENSE_CATEGORIES,
        }
    }

    /// Label used when a submission arrives without a category.
    pub(crate) fn fallback_category(&self) -> &'static str {
        match self {
            Self::Income => "Other Income",
            Self::Expense => "Other Expense",
        }
    }

    /// Case-insensitive lookup of a label within this type's set.
    pub(crate) fn find_category(&self, name: &str) -> Option<&'static str> {
        let lower = name.trim().to_lowercase();
        self.categories()
            .iter()
            .copied()
            .find(|c| c.to_lowercase() == lower)
    }
}
