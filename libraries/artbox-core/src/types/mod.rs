//! Shared domain types.

mod fields;
mod outcome;

pub use fields::TrackFields;
pub use outcome::{OpKind, Outcome, SkipReason};
