//! Case-insensitive search over suppliers.
//!
//! A supplier matches when its name, contact or category contains the search
//! term as a substring after Unicode lowercasing. No index is kept; callers scan
//! the whole sequence on every query.

use crate::model::supplier::Supplier;

/// A search term lowered once so it can be tested against many suppliers.
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// An empty term is a substring of everything.
    pub fn is_match_all(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, supplier: &Supplier) -> bool {
        if self.is_match_all() {
            return true;
        }
        [&supplier.name, &supplier.contact, &supplier.category]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Order-preserving subsequence of `suppliers` that match `term`.
pub fn filter_suppliers<'a>(suppliers: &'a [Supplier], term: &str) -> Vec<&'a Supplier> {
    let query = SearchQuery::new(term);
    suppliers.iter().filter(|s| query.matches(s)).collect()
}
