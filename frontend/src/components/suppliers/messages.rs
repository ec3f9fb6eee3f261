use common::model::draft::DraftField;
use common::model::supplier::SupplierId;

#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    SetSearchTerm(String),
    UpdateDraft(DraftField, String),
    OpenCreateDialog,
    CloseCreateDialog,
    AddSupplier,
    DeleteSupplier(SupplierId),
}
