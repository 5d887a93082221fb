mod category;
mod filter;
mod record;

pub(crate) use filter::Filter;
pub(crate) use record::{Record, RecordInput, RecordType, MAX_AMOUNT};
