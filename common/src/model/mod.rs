pub mod draft;
pub mod supplier;
