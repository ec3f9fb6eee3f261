//! Shared domain of the supplier directory.
//!
//! - `model`: the supplier record, its identifier and the editable draft.
//! - `store`: the in-memory directory that owns suppliers, draft and search term.

pub mod model;
pub mod store;
