use crate::model::supplier::SupplierId;

/// Signals emitted by successful directory mutations.
///
/// The presentation layer reacts to these instead of sharing UI flags with the
/// store: on `SupplierAdded` any open creation surface must be closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    SupplierAdded { id: SupplierId },
    SupplierRemoved { id: SupplierId },
}

impl StoreEvent {
    /// Whether the creation dialog should close in response to this event.
    pub fn closes_creation_surface(&self) -> bool {
        matches!(self, StoreEvent::SupplierAdded { .. })
    }
}

/// What an empty filtered view should tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// A search term is active and nothing matches it.
    NoMatches,
    /// The directory itself has no suppliers.
    NoSuppliers,
}
