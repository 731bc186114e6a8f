// crates/farmer/src/infrastructure/postgres/rows/postgres_document_row.rs

use serde_json::{Map, Value};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::{FarmRecord, FarmerProfile};
use crate::domain::value_objects::FarmerId;

/// Ligne commune aux tables `farmers` et `farms` (clé + document JSONB)
#[derive(Debug, sqlx::FromRow)]
pub struct PostgresDocumentRow {
    pub farmer_id: String,
    pub document: Value,
}

impl PostgresDocumentRow {
    fn into_parts(self) -> Result<(FarmerId, Map<String, Value>)> {
        let farmer_id = FarmerId::try_new(self.farmer_id)?;
        match self.document {
            Value::Object(document) => Ok((farmer_id, document)),
            other => Err(DomainError::Internal(format!(
                "Stored document for '{}' is not an object: {}",
                farmer_id, other
            ))),
        }
    }
}

impl TryFrom<PostgresDocumentRow> for FarmerProfile {
    type Error = DomainError;

    fn try_from(row: PostgresDocumentRow) -> Result<Self> {
        let (farmer_id, document) = row.into_parts()?;
        Ok(FarmerProfile::restore(farmer_id, document))
    }
}

impl TryFrom<PostgresDocumentRow> for FarmRecord {
    type Error = DomainError;

    fn try_from(row: PostgresDocumentRow) -> Result<Self> {
        let (farmer_id, document) = row.into_parts()?;
        Ok(FarmRecord::restore(farmer_id, document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_restores_document_verbatim() {
        let row = PostgresDocumentRow {
            farmer_id: "uid-1".into(),
            document: json!({ "farmerID": "uid-1", "crops": ["tea"] }),
        };

        let farm = FarmRecord::try_from(row).unwrap();

        assert_eq!(farm.farmer_id().as_str(), "uid-1");
        assert_eq!(farm.document()["crops"], json!(["tea"]));
    }

    #[test]
    fn test_non_object_document_is_internal_error() {
        let row = PostgresDocumentRow { farmer_id: "uid-1".into(), document: json!([1]) };

        let err = FarmerProfile::try_from(row).unwrap_err();

        assert!(matches!(err, DomainError::Internal(_)));
    }
}
