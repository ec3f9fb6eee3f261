use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::draft::Draft;

/// Opaque identifier of a supplier.
///
/// Assigned once when the supplier is created and never reused, even after the
/// supplier is deleted. Values are random UUID v4 strings, except for records
/// that arrive with an id already set (e.g. the seed directory).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

impl SupplierId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SupplierId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SupplierId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One vendor relationship held by the directory.
///
/// `name` and `contact` are guaranteed non-empty only for suppliers created
/// through [`crate::store::SupplierDirectory::add_supplier`]. `email`, `phone`
/// and `category` are free-form and empty when not provided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category: String,
}

impl Supplier {
    /// Materializes a draft under the given id. The draft is consumed as-is,
    /// no validation happens here.
    pub fn from_draft(id: SupplierId, draft: Draft) -> Self {
        let Draft {
            name,
            contact,
            email,
            phone,
            category,
        } = draft;

        Self {
            id,
            name,
            contact,
            email,
            phone,
            category,
        }
    }
}
