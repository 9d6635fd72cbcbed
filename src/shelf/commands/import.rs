use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::backend::StorageBackend;
use crate::store::InventoryStore;
use std::fs;
use std::path::Path;

/// Restore the collections found in the backup at `path`, then reload the store.
pub fn run<B: StorageBackend>(store: &mut InventoryStore<B>, path: &Path) -> Result<CmdResult> {
    let raw = fs::read_to_string(path).map_err(ShelfError::Io)?;
    import_content(store, &raw)
}

pub fn import_content<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    raw: &str,
) -> Result<CmdResult> {
    let summary = store.import_document(raw)?;

    let mut result = CmdResult::default();
    match (summary.products, summary.categories) {
        (None, None) => {
            result.add_message(CmdMessage::warning(
                "The file holds neither products nor categories; nothing was imported.",
            ));
        }
        (products, categories) => {
            if let Some(n) = products {
                result.add_message(CmdMessage::info(format!("Products replaced: {}", n)));
            }
            if let Some(n) = categories {
                result.add_message(CmdMessage::info(format!("Categories replaced: {}", n)));
            }
            result.add_message(CmdMessage::success("Import successful."));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::export;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn export_file_imports_into_another_store() {
        let source = StoreFixture::new()
            .with_product_in("A", "Electronics", 5, 10)
            .with_product("B", 20, 5)
            .with_category("Tools")
            .store;
        let dir = tempfile::tempdir().unwrap();
        let path = export::run(&source, dir.path()).unwrap().export_path.unwrap();

        let mut target = StoreFixture::new().with_product("Z", 1, 1).store;
        let res = run(&mut target, &path).unwrap();

        assert!(!res.has_problems());
        assert_eq!(target.products(), source.products());
        assert_eq!(target.categories(), source.categories());
    }

    #[test]
    fn document_without_collections_warns() {
        let mut store = StoreFixture::new().with_product("A", 1, 1).store;
        let res = import_content(&mut store, r#"{"exportedAt": "2024-01-01"}"#).unwrap();
        assert!(res.has_problems());
        assert_eq!(store.products().len(), 1);
    }

    #[test]
    fn invalid_file_is_invalid_format() {
        let mut store = StoreFixture::new().store;
        let err = import_content(&mut store, "<html>").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidFormat(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let mut store = StoreFixture::new().store;
        let err = run(&mut store, Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ShelfError::Io(_)));
    }
}
