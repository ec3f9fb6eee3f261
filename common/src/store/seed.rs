//! The demo directory a fresh session starts with.

use crate::model::supplier::Supplier;
use crate::store::ensure_unique_ids;
use crate::store::error::SeedError;

const SEED_JSON: &str = include_str!("seed.json");

/// Parses the embedded seed document.
pub fn load_seed() -> Result<Vec<Supplier>, SeedError> {
    parse_seed(SEED_JSON)
}

/// Parses a JSON array of suppliers, rejecting duplicate ids.
pub fn parse_seed(json: &str) -> Result<Vec<Supplier>, SeedError> {
    let suppliers: Vec<Supplier> = serde_json::from_str(json)?;
    ensure_unique_ids(&suppliers)?;
    Ok(suppliers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::error::DirectoryError;

    #[test]
    fn embedded_seed_has_the_demo_supplier() {
        let suppliers = load_seed().unwrap();
        assert_eq!(suppliers.len(), 1);

        let first = &suppliers[0];
        assert_eq!(first.id.as_str(), "1");
        assert_eq!(first.name, "ООО \"Торговый Дом\"");
        assert_eq!(first.contact, "Иванов Иван");
        assert_eq!(first.email, "ivanov@td.ru");
        assert_eq!(first.phone, "+7 (495) 123-45-67");
        assert_eq!(first.category, "Оптовик");
    }

    #[test]
    fn malformed_seed_is_reported() {
        let err = parse_seed("[{").unwrap_err();
        assert!(matches!(err, SeedError::Malformed(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":"a","name":"One","contact":"X"},
            {"id":"a","name":"Two","contact":"Y"}
        ]"#;
        match parse_seed(json) {
            Err(SeedError::Invalid(DirectoryError::DuplicateId(id))) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }
}
