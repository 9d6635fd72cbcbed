//! # Backup Documents
//!
//! Export writes one JSON document holding both collections:
//!
//! ```json
//! {
//!   "products": [ ... ],
//!   "categories": [ ... ],
//!   "exportedAt": "2024-05-02T10:11:12.345Z"
//! }
//! ```
//!
//! Import reads the same shape back, but loosely: `products` and `categories` are each
//! optional, and unknown top-level fields are ignored. A present collection must be an
//! array whose every record reads as a [`Product`] or [`Category`]. Anything else is
//! [`ShelfError::InvalidFormat`], raised before storage is touched.

use crate::error::{Result, ShelfError};
use crate::model::{Category, Product};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub exported_at: DateTime<Utc>,
}

impl ExportDocument {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            exported_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// File name for a backup taken on `date`: `inventory-backup-YYYY-MM-DD.json`.
pub fn backup_filename(date: NaiveDate) -> String {
    format!("inventory-backup-{}.json", date.format("%Y-%m-%d"))
}

/// The collections found in an import document. `None` means the document did not
/// carry that collection.
#[derive(Debug, Default)]
pub struct ImportPayload {
    pub products: Option<Vec<Product>>,
    pub categories: Option<Vec<Category>>,
}

impl ImportPayload {
    pub fn parse(raw: &str) -> Result<Self> {
        let doc: Value = serde_json::from_str(raw)
            .map_err(|e| ShelfError::InvalidFormat(format!("not valid JSON ({})", e)))?;
        let Value::Object(mut fields) = doc else {
            return Err(ShelfError::InvalidFormat(
                "expected a JSON object at the top level".to_string(),
            ));
        };

        Ok(Self {
            products: take_records(&mut fields, "products")?,
            categories: take_records(&mut fields, "categories")?,
        })
    }
}

fn take_records<T: DeserializeOwned>(
    fields: &mut serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<T>>> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(items @ Value::Array(_)) => serde_json::from_value(items).map(Some).map_err(|e| {
            ShelfError::InvalidFormat(format!("`{}` holds an unreadable record ({})", key, e))
        }),
        Some(_) => Err(ShelfError::InvalidFormat(format!(
            "`{}` must be an array",
            key
        ))),
    }
}

/// How many records each collection received on import. `None` means the document
/// did not carry that collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub products: Option<usize>,
    pub categories: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_categories;

    #[test]
    fn filename_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(backup_filename(date), "inventory-backup-2024-03-07.json");
    }

    #[test]
    fn export_has_three_top_level_fields() {
        let doc = ExportDocument::new(Vec::new(), default_categories());
        let value: Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj["products"].is_array());
        assert_eq!(obj["categories"].as_array().unwrap().len(), 4);
        assert!(obj["exportedAt"].is_string());
    }

    #[test]
    fn parse_accepts_partial_documents() {
        let payload =
            ImportPayload::parse(r#"{"categories": [{"id": "1", "name": "Tools", "color": "red"}]}"#)
                .unwrap();
        assert_eq!(payload.categories.unwrap()[0].name, "Tools");
        assert!(payload.products.is_none());
    }

    #[test]
    fn parse_rejects_incomplete_records() {
        for raw in [
            r#"{"products": [{"id": "1", "name": "x"}]}"#,
            r#"{"categories": [{"id": "1"}]}"#,
            r#"{"products": [1, 2]}"#,
        ] {
            assert!(
                matches!(ImportPayload::parse(raw), Err(ShelfError::InvalidFormat(_))),
                "{raw}"
            );
        }
    }

    #[test]
    fn parse_treats_null_as_absent() {
        let payload = ImportPayload::parse(r#"{"products": null, "categories": []}"#).unwrap();
        assert!(payload.products.is_none());
        assert_eq!(payload.categories.unwrap().len(), 0);
    }

    #[test]
    fn parse_ignores_unknown_fields() {
        let payload = ImportPayload::parse(r#"{"exportedAt": "x", "version": 3}"#).unwrap();
        assert!(payload.products.is_none());
        assert!(payload.categories.is_none());
    }

    #[test]
    fn parse_rejects_bad_shapes() {
        for raw in ["", "{", "42", "[]", r#"{"categories": {"a": 1}}"#] {
            assert!(
                matches!(ImportPayload::parse(raw), Err(ShelfError::InvalidFormat(_))),
                "accepted {raw:?}"
            );
        }
    }
}
