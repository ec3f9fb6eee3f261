//! In-memory supplier directory.
//!
//! [`SupplierDirectory`] owns three independent pieces of session state: the
//! ordered supplier sequence, the creation [`Draft`] and the search term. Its
//! methods are the only way to change them. Filtering is derived on demand and
//! never mutates anything.
//!
//! Failed operations are no-ops: a draft without name or contact is rejected
//! without touching the directory, and deleting an unknown id does nothing.

pub mod error;
pub mod events;
pub mod filter;
pub mod seed;

use std::collections::HashSet;

use log::{debug, warn};

use crate::model::draft::{Draft, DraftField};
use crate::model::supplier::{Supplier, SupplierId};

pub use error::{DirectoryError, DraftRejection, SeedError};
pub use events::{EmptyState, StoreEvent};
pub use filter::SearchQuery;

/// Session-scoped store of suppliers, the pending draft and the search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
    draft: Draft,
    search_term: String,
}

impl SupplierDirectory {
    /// An empty directory with a blank draft and no search term.
    pub fn new() -> Self {
        Self::default()
    }

    /// A directory starting with `suppliers` in the given order.
    ///
    /// Fails if two suppliers share an id.
    pub fn with_suppliers(suppliers: Vec<Supplier>) -> Result<Self, DirectoryError> {
        ensure_unique_ids(&suppliers)?;
        Ok(Self {
            suppliers,
            ..Self::default()
        })
    }

    /// A directory populated from the embedded demo seed.
    pub fn try_seeded() -> Result<Self, SeedError> {
        Ok(Self::with_suppliers(seed::load_seed()?)?)
    }

    /// Like [`SupplierDirectory::try_seeded`], but falls back to an empty
    /// directory when the seed cannot be loaded.
    pub fn seeded() -> Self {
        Self::try_seeded().unwrap_or_else(|err| {
            warn!("Falling back to an empty supplier directory: {}", err);
            Self::new()
        })
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    pub fn get(&self, id: &SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| &s.id == id)
    }

    /// Turns the current draft into a supplier appended at the end.
    ///
    /// Requires non-empty `name` and `contact`. On rejection nothing changes,
    /// including the draft. On success the draft is reset and the returned
    /// [`StoreEvent::SupplierAdded`] tells the caller to close its creation
    /// surface.
    pub fn add_supplier(&mut self) -> Result<StoreEvent, DraftRejection> {
        if self.draft.name.is_empty() {
            debug!("Rejected supplier draft: {}", DraftRejection::MissingName);
            return Err(DraftRejection::MissingName);
        }
        if self.draft.contact.is_empty() {
            debug!("Rejected supplier draft: {}", DraftRejection::MissingContact);
            return Err(DraftRejection::MissingContact);
        }

        let id = self.fresh_id();
        let draft = std::mem::take(&mut self.draft);
        self.suppliers.push(Supplier::from_draft(id.clone(), draft));

        debug!("Added supplier {} ({} total)", id, self.suppliers.len());
        Ok(StoreEvent::SupplierAdded { id })
    }

    /// Removes the supplier with `id`, keeping the others in order.
    ///
    /// Returns `None` when no such supplier exists, which is not an error.
    pub fn delete_supplier(&mut self, id: &SupplierId) -> Option<StoreEvent> {
        let position = self.suppliers.iter().position(|s| &s.id == id)?;
        self.suppliers.remove(position);

        debug!("Removed supplier {} ({} left)", id, self.suppliers.len());
        Some(StoreEvent::SupplierRemoved { id: id.clone() })
    }

    /// Replaces the search term verbatim.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Replaces a single draft field. No validation happens until
    /// [`SupplierDirectory::add_supplier`].
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Resets the draft to all-empty fields.
    pub fn discard_draft(&mut self) {
        self.draft = Draft::default();
    }

    /// Suppliers matching the current search term, in insertion order.
    pub fn filtered_view(&self) -> Vec<&Supplier> {
        filter::filter_suppliers(&self.suppliers, &self.search_term)
    }

    /// Which empty-list message applies, or `None` if the filtered view has
    /// at least one supplier.
    pub fn empty_state(&self) -> Option<EmptyState> {
        let query = SearchQuery::new(&self.search_term);
        if self.suppliers.iter().any(|s| query.matches(s)) {
            None
        } else if self.search_term.is_empty() {
            Some(EmptyState::NoSuppliers)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    fn fresh_id(&self) -> SupplierId {
        loop {
            let id = SupplierId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

pub(crate) fn ensure_unique_ids(suppliers: &[Supplier]) -> Result<(), DirectoryError> {
    let mut seen = HashSet::new();
    for supplier in suppliers {
        if !seen.insert(&supplier.id) {
            return Err(DirectoryError::DuplicateId(supplier.id.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn supplier(id: &str, name: &str, contact: &str, category: &str) -> Supplier {
        Supplier {
            id: SupplierId::from(id),
            name: name.to_string(),
            contact: contact.to_string(),
            email: String::new(),
            phone: String::new(),
            category: category.to_string(),
        }
    }

    fn sample() -> SupplierDirectory {
        SupplierDirectory::with_suppliers(vec![
            supplier("a", "Alpha Metals", "Ann Lee", "Metal"),
            supplier("b", "Beta Foods", "Bob Stone", "Food"),
            supplier("c", "Gamma Paper", "Gus Hill", "Stationery"),
        ])
        .unwrap()
    }

    fn fill_draft(dir: &mut SupplierDirectory, name: &str, contact: &str, category: &str) {
        dir.update_draft_field(DraftField::Name, name);
        dir.update_draft_field(DraftField::Contact, contact);
        dir.update_draft_field(DraftField::Email, "info@example.com");
        dir.update_draft_field(DraftField::Phone, "+1 555 0100");
        dir.update_draft_field(DraftField::Category, category);
    }

    fn names(view: &[&Supplier]) -> Vec<String> {
        view.iter().map(|s| s.name.clone()).collect()
    }

    #[test_log::test]
    fn valid_draft_is_appended_with_a_fresh_id() {
        let mut dir = sample();
        let before: HashSet<SupplierId> = dir.suppliers().iter().map(|s| s.id.clone()).collect();
        fill_draft(&mut dir, "Delta Glass", "Dana Fox", "Glass");
        let draft = dir.draft().clone();

        let event = dir.add_supplier().unwrap();

        assert_eq!(dir.len(), 4);
        let last = dir.suppliers().last().unwrap();
        assert_eq!(last.name, draft.name);
        assert_eq!(last.contact, draft.contact);
        assert_eq!(last.email, draft.email);
        assert_eq!(last.phone, draft.phone);
        assert_eq!(last.category, draft.category);
        assert!(!before.contains(&last.id));
        assert_eq!(event, StoreEvent::SupplierAdded { id: last.id.clone() });
        assert!(event.closes_creation_surface());
    }

    #[test]
    fn successful_add_resets_the_draft() {
        let mut dir = SupplierDirectory::new();
        fill_draft(&mut dir, "Delta Glass", "Dana Fox", "Glass");
        dir.add_supplier().unwrap();
        assert_eq!(dir.draft(), &Draft::default());
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut dir = SupplierDirectory::new();
        dir.update_draft_field(DraftField::Name, "Only Name");
        dir.update_draft_field(DraftField::Contact, "Only Contact");
        dir.add_supplier().unwrap();

        let added = &dir.suppliers()[0];
        assert!(added.email.is_empty());
        assert!(added.phone.is_empty());
        assert!(added.category.is_empty());
    }

    #[test_log::test]
    fn missing_name_is_rejected_without_changes() {
        let mut dir = sample();
        fill_draft(&mut dir, "", "X", "Any");
        let snapshot = dir.clone();

        assert_eq!(dir.add_supplier(), Err(DraftRejection::MissingName));
        assert_eq!(dir, snapshot);
    }

    #[test]
    fn missing_contact_is_rejected_without_changes() {
        let mut dir = sample();
        fill_draft(&mut dir, "Named", "", "Any");
        let snapshot = dir.clone();

        assert_eq!(dir.add_supplier(), Err(DraftRejection::MissingContact));
        assert_eq!(dir, snapshot);
    }

    #[test]
    fn blank_draft_is_rejected() {
        let mut dir = SupplierDirectory::new();
        assert!(dir.add_supplier().is_err());
        assert!(dir.is_empty());
    }

    #[test]
    fn whitespace_counts_as_content() {
        let mut dir = SupplierDirectory::new();
        fill_draft(&mut dir, " ", " ", "");
        assert!(dir.add_supplier().is_ok());
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn ids_stay_unique_across_many_adds() {
        let mut dir = SupplierDirectory::new();
        for i in 0..50 {
            fill_draft(&mut dir, &format!("Supplier {i}"), "Someone", "");
            dir.add_supplier().unwrap();
        }
        let ids: HashSet<&SupplierId> = dir.suppliers().iter().map(|s| &s.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn delete_keeps_relative_order() {
        let mut dir = sample();
        let event = dir.delete_supplier(&SupplierId::from("b"));

        assert_eq!(
            event,
            Some(StoreEvent::SupplierRemoved {
                id: SupplierId::from("b")
            })
        );
        assert_eq!(names(&dir.filtered_view()), vec!["Alpha Metals", "Gamma Paper"]);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut once = sample();
        once.delete_supplier(&SupplierId::from("a"));

        let mut twice = sample();
        twice.delete_supplier(&SupplierId::from("a"));
        assert_eq!(twice.delete_supplier(&SupplierId::from("a")), None);

        assert_eq!(once, twice);
    }

    #[test]
    fn deleting_unknown_id_is_a_no_op() {
        let mut dir = sample();
        let snapshot = dir.clone();
        assert_eq!(dir.delete_supplier(&SupplierId::from("missing")), None);
        assert_eq!(dir, snapshot);
    }

    #[test]
    fn empty_term_returns_full_sequence() {
        let dir = sample();
        let view: Vec<&Supplier> = dir.filtered_view();
        let all: Vec<&Supplier> = dir.suppliers().iter().collect();
        assert_eq!(view, all);
    }

    #[test]
    fn filtered_view_contains_exactly_the_matches() {
        let mut dir = sample();
        for term in ["a", "ME", "stone", "food", "zzz", "Gus", " "] {
            dir.set_search_term(term);
            let view = dir.filtered_view();
            let query = SearchQuery::new(term);

            assert!(view.iter().all(|s| query.matches(s)), "term {term:?}");
            let excluded = dir
                .suppliers()
                .iter()
                .filter(|s| !view.iter().any(|v| v.id == s.id));
            for s in excluded {
                assert!(!query.matches(s), "term {term:?} excluded {}", s.name);
            }
        }
    }

    #[test]
    fn search_term_is_stored_verbatim_and_does_not_mutate() {
        let mut dir = sample();
        dir.set_search_term("  MeTaL ");
        assert_eq!(dir.search_term(), "  MeTaL ");
        assert_eq!(dir.len(), 3);
        assert!(dir.filtered_view().is_empty());
    }

    #[test]
    fn discard_draft_clears_every_field() {
        let mut dir = SupplierDirectory::new();
        fill_draft(&mut dir, "A", "B", "C");
        dir.discard_draft();
        assert!(dir.draft().is_blank());
    }

    #[test]
    fn update_draft_field_leaves_others_untouched() {
        let mut dir = SupplierDirectory::new();
        fill_draft(&mut dir, "A", "B", "C");
        dir.update_draft_field(DraftField::Contact, "Z");

        let draft = dir.draft();
        assert_eq!(draft.name, "A");
        assert_eq!(draft.contact, "Z");
        assert_eq!(draft.category, "C");
    }

    #[test]
    fn empty_state_distinguishes_search_from_empty_directory() {
        let mut dir = SupplierDirectory::new();
        assert_eq!(dir.empty_state(), Some(EmptyState::NoSuppliers));

        dir.set_search_term("x");
        assert_eq!(dir.empty_state(), Some(EmptyState::NoMatches));

        let mut dir = sample();
        assert_eq!(dir.empty_state(), None);
        dir.set_search_term("nothing like this");
        assert_eq!(dir.empty_state(), Some(EmptyState::NoMatches));
    }

    #[test]
    fn seeded_directory_starts_with_the_demo_supplier() {
        let dir = SupplierDirectory::seeded();
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.suppliers()[0].contact, "Иванов Иван");
        assert!(dir.draft().is_blank());
        assert_eq!(dir.search_term(), "");
    }

    #[test_log::test]
    fn procurement_session_walkthrough() {
        let mut dir = SupplierDirectory::with_suppliers(vec![supplier(
            "1",
            "ООО Торговый Дом",
            "Иванов Иван",
            "Оптовик",
        )])
        .unwrap();

        fill_draft(&mut dir, "ЗАО Ромашка", "Петров Петр", "Производитель");
        let added = match dir.add_supplier() {
            Ok(StoreEvent::SupplierAdded { id }) => id,
            other => panic!("unexpected result {other:?}"),
        };
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.suppliers()[1].name, "ЗАО Ромашка");

        dir.set_search_term("иван");
        assert_eq!(names(&dir.filtered_view()), vec!["ООО Торговый Дом"]);

        dir.set_search_term("завод");
        assert!(dir.filtered_view().is_empty());

        let first = SupplierId::from("1");
        assert!(dir.delete_supplier(&first).is_some());
        assert_eq!(dir.len(), 1);
        assert!(dir.delete_supplier(&first).is_none());
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.suppliers()[0].id, added);
    }

    #[test]
    fn empty_name_scenario_keeps_length() {
        let mut dir = sample();
        dir.update_draft_field(DraftField::Name, "");
        dir.update_draft_field(DraftField::Contact, "X");
        assert!(dir.add_supplier().is_err());
        assert_eq!(dir.len(), 3);
    }

    #[test]
    fn duplicate_ids_are_refused_at_construction() {
        let result = SupplierDirectory::with_suppliers(vec![
            supplier("a", "Alpha Metals", "Ann Lee", "Metal"),
            supplier("a", "Another Alpha", "Al Moss", "Metal"),
        ]);
        assert_eq!(result, Err(DirectoryError::DuplicateId("a".to_string())));
    }

    #[test]
    fn deleted_id_is_not_handed_out_again() {
        let mut dir = SupplierDirectory::new();
        fill_draft(&mut dir, "Delta Glass", "Dana Fox", "Glass");
        let Ok(StoreEvent::SupplierAdded { id: first }) = dir.add_supplier() else {
            panic!("first add failed");
        };

        assert!(dir.delete_supplier(&first).is_some());
        assert!(dir.is_empty());

        fill_draft(&mut dir, "Delta Glass", "Dana Fox", "Glass");
        let Ok(StoreEvent::SupplierAdded { id: second }) = dir.add_supplier() else {
            panic!("second add failed");
        };
        assert_ne!(second, first);
    }

    #[test]
    fn deleting_seed_supplier_does_not_free_its_id() {
        let mut dir = SupplierDirectory::seeded();
        let seed_id = SupplierId::from("1");
        assert!(dir.delete_supplier(&seed_id).is_some());

        fill_draft(&mut dir, "ЗАО Ромашка", "Петров Петр", "Производитель");
        let Ok(StoreEvent::SupplierAdded { id }) = dir.add_supplier() else {
            panic!("add after deleting the seed failed");
        };
        assert_ne!(id, seed_id);
        assert_eq!(dir.suppliers()[0].id, id);
    }
}
