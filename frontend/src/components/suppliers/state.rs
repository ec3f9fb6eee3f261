use common::store::SupplierDirectory;

/// State of the suppliers page.
///
/// The directory holds all supplier data. Whether the creation dialog is shown
/// is purely a presentation concern and is kept here, outside the store.
pub struct SuppliersPage {
    /// Suppliers, creation draft and search term for this session.
    pub directory: SupplierDirectory,

    /// Whether the "new supplier" dialog is shown. Passed to the top sheet as
    /// its `open` prop, which keeps the DOM in line with it.
    pub create_dialog_open: bool,
}

impl SuppliersPage {
    pub fn new(seeded: bool) -> Self {
        let directory = if seeded {
            SupplierDirectory::seeded()
        } else {
            SupplierDirectory::new()
        };

        Self {
            directory,
            create_dialog_open: false,
        }
    }
}
