//! Update function for the suppliers page.
//!
//! Each `Msg` is applied to the page state; the view then passes
//! `create_dialog_open` to the top sheet, so no DOM work happens here.
//!
//! Rejected drafts produce no visible feedback; the dialog simply stays open.

use log::debug;

use super::messages::Msg;
use super::state::SuppliersPage;

/// Central update function for the component. Returns whether to re-render.
pub fn update(component: &mut SuppliersPage, msg: Msg) -> bool {
    match msg {
        Msg::SetSearchTerm(term) => {
            component.directory.set_search_term(term);
            true
        }
        Msg::UpdateDraft(field, value) => {
            component.directory.update_draft_field(field, value);
            true
        }
        Msg::OpenCreateDialog => {
            component.create_dialog_open = true;
            true
        }
        Msg::CloseCreateDialog => {
            // The draft survives closing, so reopening shows what was typed.
            let was_open = component.create_dialog_open;
            component.create_dialog_open = false;
            was_open
        }
        Msg::AddSupplier => match component.directory.add_supplier() {
            Ok(event) => {
                if event.closes_creation_surface() {
                    component.create_dialog_open = false;
                }
                true
            }
            Err(rejection) => {
                debug!("Supplier not added: {}", rejection);
                false
            }
        },
        Msg::DeleteSupplier(id) => {
            if component.directory.delete_supplier(&id).is_some() {
                true
            } else {
                debug!("Supplier {} already gone", id);
                false
            }
        }
    }
}
