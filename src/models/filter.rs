use super::{Record, RecordType};

/// Which records the list shows. Never affects the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Filter {
    #[default]
    All,
    Income,
    Expense,
}

impl Filter {
    pub(crate) fn all() -> &'static [Filter] {
        &[Self::All, Self::Income, Self::Expense]
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "a" => Some(Self::All),
            other => RecordType::parse(other).map(Self::from),
        }
    }

    pub(crate) fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Income => record.kind == RecordType::Income,
            Self::Expense => record.kind == RecordType::Expense,
        }
    }
}

impl From<RecordType> for Filter {
    fn from(kind: RecordType) -> Self {
        match kind {
            RecordType::Income => Self::Income,
            RecordType::Expense => Self::Expense,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}
