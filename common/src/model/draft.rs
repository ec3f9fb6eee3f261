//! The in-flight supplier record edited by the creation form.

use serde::{Deserialize, Serialize};

/// A supplier under construction: the same fields as
/// [`crate::model::supplier::Supplier`] without the id.
///
/// Edited one field at a time via [`Draft::set`]; nothing is validated until
/// the directory tries to turn it into a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub category: String,
}

/// Names one editable field of a [`Draft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Contact,
    Email,
    Phone,
    Category,
}

impl DraftField {
    /// All fields in form order.
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Contact,
        DraftField::Email,
        DraftField::Phone,
        DraftField::Category,
    ];

    /// Stable lowercase key, used as the form input id.
    pub fn key(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Contact => "contact",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
            DraftField::Category => "category",
        }
    }
}

impl Draft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Contact => &self.contact,
            DraftField::Email => &self.email,
            DraftField::Phone => &self.phone,
            DraftField::Category => &self.category,
        }
    }

    /// Replaces a single field, leaving the others untouched.
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Contact => &mut self.contact,
            DraftField::Email => &mut self.email,
            DraftField::Phone => &mut self.phone,
            DraftField::Category => &mut self.category,
        };
        *slot = value;
    }

    /// True when every field is the empty string.
    pub fn is_blank(&self) -> bool {
        DraftField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
