pub mod contacts;
pub mod suppliers;
