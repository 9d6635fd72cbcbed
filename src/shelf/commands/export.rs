use crate::backup::backup_filename;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::backend::StorageBackend;
use crate::store::InventoryStore;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write a backup of both collections into `dir`, named after today's date.
/// An existing backup from the same day is overwritten.
pub fn run<B: StorageBackend>(store: &InventoryStore<B>, dir: &Path) -> Result<CmdResult> {
    let doc = store.export_document();
    let filename = backup_filename(doc.exported_at.date_naive());

    if !dir.exists() {
        fs::create_dir_all(dir).map_err(ShelfError::Io)?;
    }
    let path = dir.join(filename);
    fs::write(&path, doc.to_json()?).map_err(ShelfError::Io)?;
    info!(path = %path.display(), products = doc.products.len(), "Exported backup");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} products and {} categories to {}",
        doc.products.len(),
        doc.categories.len(),
        path.display()
    )));
    result.export_path = Some(path);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::ExportDocument;
    use crate::store::fixtures::StoreFixture;

    #[test]
    fn writes_dated_backup_file() {
        let store = StoreFixture::new().with_product("A", 1, 1).store;
        let dir = tempfile::tempdir().unwrap();

        let res = run(&store, dir.path()).unwrap();
        let path = res.export_path.unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("inventory-backup-"));
        assert!(name.ends_with(".json"));

        let doc: ExportDocument =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc.products, store.products());
        assert_eq!(doc.categories, store.categories());
    }

    #[test]
    fn creates_missing_directory() {
        let store = StoreFixture::new().store;
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("backups").join("shelf");

        let res = run(&store, &nested).unwrap();
        assert!(res.export_path.unwrap().exists());
    }
}
