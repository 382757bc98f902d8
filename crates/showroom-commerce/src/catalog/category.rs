//! Category references.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// The dealership catalog is flat: a category is just an identifier plus a
/// display name, with no parent/child structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name (e.g., "SUV", "Sedan").
    pub name: String,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
