use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::InventoryStore;

/// Remove every stored product and category. The store reloads to a fresh inventory
/// (no products, default categories).
pub fn run<B: StorageBackend>(store: &mut InventoryStore<B>) -> Result<CmdResult> {
    let removed = store.products().len();
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data cleared: {} product(s) removed, categories reset to defaults.",
        removed
    )));
    Ok(result)
}

/// Remove every stored product and category straight from `backend`, without loading
/// the store. Works even when the stored data can no longer be read.
pub fn wipe<B: StorageBackend>(backend: &B) -> Result<CmdResult> {
    InventoryStore::remove_all(backend)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(
        "Data cleared: all products removed, categories reset to defaults.",
    ));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_categories;
    use crate::store::fixtures::StoreFixture;
    use crate::store::mem_backend::MemBackend;
    use crate::store::PRODUCTS_KEY;

    #[test]
    fn clear_resets_inventory() {
        let mut store = StoreFixture::new()
            .with_product("A", 1, 1)
            .with_product("B", 1, 1)
            .with_category("Tools")
            .store;
        let res = run(&mut store).unwrap();
        assert!(res.messages[0].content.contains("2 product(s)"));
        assert!(store.products().is_empty());
        assert_eq!(store.categories(), default_categories().as_slice());
    }

    #[test]
    fn wipe_works_on_unreadable_data() {
        let backend = MemBackend::new().with_entry(PRODUCTS_KEY, r#"[{"id":"1"}]"#);
        let res = wipe(&backend).unwrap();
        assert!(!res.has_problems());
        assert!(!backend.contains(PRODUCTS_KEY).unwrap());
    }
}
