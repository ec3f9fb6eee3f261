use thiserror::Error;

/// Why a draft was not turned into a supplier.
///
/// Callers receive this for logging and branching only; the directory itself
/// stays unchanged and nothing is meant to be shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRejection {
    #[error("draft has no supplier name")]
    MissingName,

    #[error("draft has no contact person")]
    MissingContact,
}

/// A supplier list that cannot back a directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("duplicate supplier id '{0}'")]
    DuplicateId(String),
}

/// Failure to load the embedded seed directory.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("seed document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("seed is not a valid directory: {0}")]
    Invalid(#[from] DirectoryError),
}
