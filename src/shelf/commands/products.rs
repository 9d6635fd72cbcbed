use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewProduct, Product, ProductPatch};
use crate::store::backend::StorageBackend;
use crate::store::InventoryStore;

/// Narrowing applied by [`list`]. All conditions must hold.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring of name, SKU or category label.
    pub search: Option<String>,
    /// Exact, case-sensitive category label.
    pub category: Option<String>,
    pub low_stock_only: bool,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if self.low_stock_only && !product.is_low_stock() {
            return false;
        }
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        match &self.search {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                product.name.to_lowercase().contains(&term)
                    || product.sku.to_lowercase().contains(&term)
                    || product.category.to_lowercase().contains(&term)
            }
            _ => true,
        }
    }
}

pub fn add<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    data: NewProduct,
) -> Result<CmdResult> {
    let product = store.add_product(data)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added: {} ({})",
        product.name, product.sku
    )));
    if product.is_low_stock() {
        result.add_message(CmdMessage::info(format!(
            "{} is at or below its minimum stock of {}",
            product.sku, product.min_stock
        )));
    }
    Ok(result.with_affected_products(vec![product]))
}

pub fn update<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    id: &str,
    patch: ProductPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.update_product(id, patch)? {
        Some(product) => {
            result.add_message(CmdMessage::success(format!(
                "Product updated: {} ({})",
                product.name, product.sku
            )));
            Ok(result.with_affected_products(vec![product]))
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No product with id {}", id)));
            Ok(result)
        }
    }
}

pub fn delete<B: StorageBackend>(store: &mut InventoryStore<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.delete_product(id)? {
        Some(product) => {
            result.add_message(CmdMessage::success(format!(
                "Product deleted: {} ({})",
                product.name, product.sku
            )));
            Ok(result.with_affected_products(vec![product]))
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No product with id {}", id)));
            Ok(result)
        }
    }
}

pub fn get<B: StorageBackend>(store: &InventoryStore<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.product(id) {
        Some(product) => Ok(result.with_listed_products(vec![product.clone()])),
        None => {
            result.add_message(CmdMessage::warning(format!("No product with id {}", id)));
            Ok(result)
        }
    }
}

/// Products matching `filter`, in stored order.
pub fn list<B: StorageBackend>(store: &InventoryStore<B>, filter: &ProductFilter) -> Result<CmdResult> {
    let listed: Vec<Product> = store
        .products()
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        let note = if filter.search.as_deref().is_some_and(|s| !s.is_empty()) {
            "No products match your search."
        } else if filter.low_stock_only {
            "All items are well stocked!"
        } else if store.products().is_empty() {
            "No products yet. Add your first product!"
        } else {
            "No products match the filter."
        };
        result.add_message(CmdMessage::info(note));
    }
    Ok(result.with_listed_products(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::fixtures::{product_data, StoreFixture};

    fn skus(result: &CmdResult) -> Vec<&str> {
        result
            .listed_products
            .iter()
            .map(|p| p.sku.as_str())
            .collect()
    }

    #[test]
    fn add_reports_and_returns_created_product() {
        let mut store = StoreFixture::new().store;
        let res = add(&mut store, product_data("A", 20, 5)).unwrap();
        assert_eq!(res.affected_products.len(), 1);
        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert_eq!(store.products().len(), 1);
    }

    #[test]
    fn add_low_stock_product_adds_note() {
        let mut store = StoreFixture::new().store;
        let res = add(&mut store, product_data("A", 5, 5)).unwrap();
        assert_eq!(res.messages.len(), 2);
        assert!(res.messages[1].content.contains("minimum stock"));
    }

    #[test]
    fn update_unknown_id_warns_without_error() {
        let mut store = StoreFixture::new().with_product("A", 1, 1).store;
        let res = update(&mut store, "ghost", ProductPatch::default()).unwrap();
        assert!(res.affected_products.is_empty());
        assert!(res.has_problems());
    }

    #[test]
    fn update_returns_merged_record() {
        let mut store = StoreFixture::new().with_product("A", 1, 1).store;
        let id = store.products()[0].id.clone();
        let patch = ProductPatch {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        let res = update(&mut store, &id, patch).unwrap();
        assert_eq!(res.affected_products[0].name, "Renamed");
        assert!(!res.has_problems());
    }

    #[test]
    fn delete_unknown_id_keeps_collection() {
        let mut store = StoreFixture::new()
            .with_product("A", 1, 1)
            .with_product("B", 1, 1)
            .store;
        let before = store.products().to_vec();
        let res = delete(&mut store, "ghost").unwrap();
        assert!(res.has_problems());
        assert_eq!(store.products(), before.as_slice());
    }

    #[test]
    fn get_finds_by_id() {
        let store = StoreFixture::new().with_product("A", 1, 1).store;
        let id = store.products()[0].id.clone();
        assert_eq!(skus(&get(&store, &id).unwrap()), vec!["A"]);
        assert!(get(&store, "nope").unwrap().has_problems());
    }

    #[test]
    fn search_is_case_insensitive_over_name_sku_and_category() {
        let store = StoreFixture::new()
            .with_product_in("CAB-01", "Electronics", 3, 1)
            .with_product_in("DSK-01", "Furniture", 3, 1)
            .with_product_in("TSH-01", "Clothing", 3, 1)
            .store;

        let by_sku = ProductFilter {
            search: Some("cab".into()),
            ..Default::default()
        };
        assert_eq!(skus(&list(&store, &by_sku).unwrap()), vec!["CAB-01"]);

        let by_category = ProductFilter {
            search: Some("FURN".into()),
            ..Default::default()
        };
        assert_eq!(skus(&list(&store, &by_category).unwrap()), vec!["DSK-01"]);

        // Names from the fixture are "Product <sku>"
        let by_name = ProductFilter {
            search: Some("product".into()),
            ..Default::default()
        };
        assert_eq!(list(&store, &by_name).unwrap().listed_products.len(), 3);
    }

    #[test]
    fn category_filter_is_exact() {
        let store = StoreFixture::new()
            .with_product_in("A", "Tools", 3, 1)
            .with_product_in("B", "tools", 3, 1)
            .store;
        let filter = ProductFilter {
            category: Some("Tools".into()),
            ..Default::default()
        };
        assert_eq!(skus(&list(&store, &filter).unwrap()), vec!["A"]);
    }

    #[test]
    fn low_stock_filter_uses_inclusive_boundary() {
        let store = StoreFixture::new()
            .with_product("AT", 10, 10)
            .with_product("ABOVE", 11, 10)
            .with_product("BELOW", 2, 10)
            .store;
        let filter = ProductFilter {
            low_stock_only: true,
            ..Default::default()
        };
        assert_eq!(skus(&list(&store, &filter).unwrap()), vec!["AT", "BELOW"]);
    }

    #[test]
    fn empty_results_explain_why() {
        let store = StoreFixture::new().store;
        let res = list(&store, &ProductFilter::default()).unwrap();
        assert!(res.messages[0].content.contains("No products yet"));

        let store = StoreFixture::new().with_product("A", 50, 1).store;
        let res = list(
            &store,
            &ProductFilter {
                low_stock_only: true,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(res.messages[0].content.contains("well stocked"));

        let res = list(
            &store,
            &ProductFilter {
                search: Some("zzz".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(res.messages[0].content.contains("match your search"));
    }
}
