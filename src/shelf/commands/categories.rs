use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Category, CategoryPatch, NewCategory};
use crate::stats::count_in_category;
use crate::store::backend::StorageBackend;
use crate::store::InventoryStore;
use serde::Serialize;

/// A category together with how many products carry its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub product_count: usize,
}

pub fn add<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    data: NewCategory,
) -> Result<CmdResult> {
    let duplicate = store.categories().iter().any(|c| c.name == data.name);
    let category = store.add_category(data)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category added: {}",
        category.name
    )));
    if duplicate {
        result.add_message(CmdMessage::info(format!(
            "Another category is already named {}; both will list the same products",
            category.name
        )));
    }
    Ok(result.with_affected_categories(vec![category]))
}

pub fn update<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    id: &str,
    patch: CategoryPatch,
) -> Result<CmdResult> {
    let old_name = store.category(id).map(|c| c.name.clone());

    let mut result = CmdResult::default();
    let Some(category) = store.update_category(id, patch)? else {
        result.add_message(CmdMessage::warning(format!("No category with id {}", id)));
        return Ok(result);
    };

    result.add_message(CmdMessage::success(format!(
        "Category updated: {}",
        category.name
    )));
    if let Some(old) = old_name.filter(|old| *old != category.name) {
        let stranded = count_in_category(store.products(), &old);
        if stranded > 0 {
            result.add_message(CmdMessage::info(format!(
                "{} product(s) still carry the old name {}",
                stranded, old
            )));
        }
    }
    Ok(result.with_affected_categories(vec![category]))
}

pub fn delete<B: StorageBackend>(store: &mut InventoryStore<B>, id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(category) = store.delete_category(id)? else {
        result.add_message(CmdMessage::warning(format!("No category with id {}", id)));
        return Ok(result);
    };

    result.add_message(CmdMessage::success(format!(
        "Category deleted: {}",
        category.name
    )));
    let labelled = count_in_category(store.products(), &category.name);
    if labelled > 0 {
        result.add_message(CmdMessage::info(format!(
            "{} product(s) keep the label {}",
            labelled, category.name
        )));
    }
    Ok(result.with_affected_categories(vec![category]))
}

/// All categories in stored order, each with its product count.
pub fn list<B: StorageBackend>(store: &InventoryStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.listed_categories = summarize(store);
    if result.listed_categories.is_empty() {
        result.add_message(CmdMessage::info("No categories yet."));
    }
    Ok(result)
}

pub fn summarize<B: StorageBackend>(store: &InventoryStore<B>) -> Vec<CategorySummary> {
    store
        .categories()
        .iter()
        .map(|c| CategorySummary {
            category: c.clone(),
            product_count: count_in_category(store.products(), &c.name),
        })
        .collect()
}
