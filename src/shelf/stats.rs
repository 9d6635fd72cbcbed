//! Derived inventory figures. Nothing here is stored; every value is recomputed from the
//! collections passed in.

use crate::model::{Category, Product};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    pub low_stock_items: usize,
    pub categories: usize,
}

impl InventoryStats {
    pub fn compute(products: &[Product], categories: &[Category]) -> Self {
        Self {
            total_products: products.len(),
            total_value: products
                .iter()
                .map(Product::stock_value)
                .fold(Decimal::ZERO, Decimal::saturating_add),
            low_stock_items: products.iter().filter(|p| p.is_low_stock()).count(),
            categories: categories.len(),
        }
    }
}

/// Number of products whose label equals `category_name` exactly.
pub fn count_in_category(products: &[Product], category_name: &str) -> usize {
    products
        .iter()
        .filter(|p| p.category == category_name)
        .count()
}

/// Copies of the `limit` newest products, newest first. Stored order is not touched.
pub fn recent_products(products: &[Product], limit: usize) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

/// The first `limit` low-stock products, in stored order.
pub fn low_stock_products(products: &[Product], limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_low_stock())
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_categories, NewProduct};
    use chrono::{Duration, Utc};
    use std::str::FromStr;

    fn product(sku: &str, quantity: u32, min_stock: u32, price: &str) -> Product {
        Product::new(NewProduct {
            name: sku.to_lowercase(),
            sku: sku.into(),
            quantity,
            min_stock,
            price: Decimal::from_str(price).unwrap(),
            ..Default::default()
        })
    }

    #[test]
    fn counts_low_stock_and_totals() {
        let products = vec![product("A", 5, 10, "1"), product("B", 20, 5, "1")];
        let stats = InventoryStats::compute(&products, &default_categories());
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.low_stock_items, 1);
        assert_eq!(stats.categories, 4);
    }

    #[test]
    fn total_value_sums_price_times_quantity() {
        let products = vec![product("A", 3, 0, "19.99"), product("B", 2, 0, "0.50")];
        let stats = InventoryStats::compute(&products, &[]);
        assert_eq!(stats.total_value, Decimal::from_str("60.97").unwrap());
    }

    #[test]
    fn huge_stock_values_saturate() {
        let products = vec![
            product("A", 1_000_000_000, 0, "100000000000000000000"),
            product("B", 4_000_000_000, 0, "100000000000000000000"),
        ];
        let stats = InventoryStats::compute(&products, &[]);
        assert_eq!(stats.total_value, Decimal::MAX);
        assert_eq!(stats.total_products, 2);
    }

    #[test]
    fn empty_inventory_is_all_zero() {
        let stats = InventoryStats::compute(&[], &[]);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.total_value, Decimal::ZERO);
        assert_eq!(stats.low_stock_items, 0);
        assert_eq!(stats.categories, 0);
    }

    #[test]
    fn category_count_is_case_sensitive() {
        let mut a = product("A", 1, 0, "1");
        a.category = "Tools".into();
        let mut b = product("B", 1, 0, "1");
        b.category = "tools".into();
        let products = vec![a, b];
        assert_eq!(count_in_category(&products, "Tools"), 1);
        assert_eq!(count_in_category(&products, "Garden"), 0);
    }

    #[test]
    fn recent_sorts_copy_newest_first() {
        let now = Utc::now();
        let mut old = product("OLD", 1, 0, "1");
        old.created_at = now - Duration::days(2);
        let mut mid = product("MID", 1, 0, "1");
        mid.created_at = now - Duration::days(1);
        let new = product("NEW", 1, 0, "1");
        let products = vec![old, new, mid];

        let recent = recent_products(&products, 2);
        let skus: Vec<_> = recent.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["NEW", "MID"]);
        // Stored order untouched
        assert_eq!(products[0].sku, "OLD");
        assert_eq!(products[1].sku, "NEW");
    }

    #[test]
    fn low_stock_keeps_stored_order_and_limit() {
        let products = vec![
            product("A", 1, 5, "1"),
            product("B", 9, 5, "1"),
            product("C", 5, 5, "1"),
            product("D", 0, 0, "1"),
        ];
        let low = low_stock_products(&products, 2);
        let skus: Vec<_> = low.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["A", "C"]);
    }
}
