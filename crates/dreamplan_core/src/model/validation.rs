//! Save-time validation errors.
//!
//! Only non-empty member names and dream titles are enforced. Dates, months
//! and categories are accepted as-is by the timeline engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record rejected before it reaches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A family member has an empty (or whitespace-only) name.
    InvalidMember { member_id: String },
    /// A dream event has an empty (or whitespace-only) title.
    EmptyTitle,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMember { member_id } => {
                write!(f, "family member `{member_id}` must have a name")
            }
            Self::EmptyTitle => write!(f, "dream title cannot be empty"),
        }
    }
}

impl Error for ValidationError {}
