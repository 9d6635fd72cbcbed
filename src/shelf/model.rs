//! # Domain Model: Products and Categories
//!
//! This module defines the records shelf stores: [`Product`] and [`Category`], plus the
//! input shapes used to create and patch them.
//!
//! ## Categories Are Labels, Not Keys
//!
//! A product's `category` is a free-text label. It is matched against [`Category::name`]
//! by exact, case-sensitive string equality, never by id:
//!
//! - Renaming a category does not rename the label on existing products.
//! - Deleting a category leaves the label on products untouched (a dangling label).
//! - Two categories may share a name; both then "own" the same products.
//!
//! ## Wire Format
//!
//! Records are serialized with camelCase field names (`minStock`, `createdAt`) and the
//! price as a plain JSON number, so backups produced by older versions of the tracker
//! load without conversion:
//!
//! ```json
//! {
//!   "id": "9b0c…",
//!   "name": "USB-C Cable",
//!   "sku": "CAB-001",
//!   "category": "Electronics",
//!   "quantity": 5,
//!   "minStock": 10,
//!   "price": 9.99,
//!   "description": "",
//!   "createdAt": "2024-05-02T10:11:12.000Z",
//!   "updatedAt": "2024-05-02T10:11:12.000Z"
//! }
//! ```
//!
//! ## Low Stock
//!
//! A product is low stock when `quantity <= min_stock`. The boundary is inclusive: a
//! product sitting exactly at its threshold already needs restocking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color token given to new categories when none is picked.
pub const DEFAULT_CATEGORY_COLOR: &str = "hsl(175, 70%, 45%)";

/// Preset color tokens offered for categories.
pub const CATEGORY_COLOR_PRESETS: [&str; 8] = [
    "hsl(175, 70%, 45%)",
    "hsl(45, 70%, 50%)",
    "hsl(280, 60%, 55%)",
    "hsl(120, 50%, 45%)",
    "hsl(0, 70%, 55%)",
    "hsl(200, 70%, 50%)",
    "hsl(320, 60%, 55%)",
    "hsl(30, 80%, 55%)",
];

/// Resolve a category color given as a 1-based preset number, or keep it as a raw token.
pub fn category_color(input: &str) -> String {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=CATEGORY_COLOR_PRESETS.len()).contains(&n) => {
            CATEGORY_COLOR_PRESETS[n - 1].to_string()
        }
        _ => input.trim().to_string(),
    }
}

/// The value `price` reads back as once stored, where it is kept as a JSON number.
pub fn stored_price(price: Decimal) -> Decimal {
    #[derive(Serialize, Deserialize)]
    struct Wire(#[serde(with = "rust_decimal::serde::float")] Decimal);

    serde_json::to_value(Wire(price))
        .and_then(serde_json::from_value::<Wire>)
        .map(|wire| wire.0)
        .unwrap_or(price)
}

/// Generate a fresh opaque record id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub min_stock: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a product from form data, stamping a new id and both timestamps. The price is
    /// normalized to its stored form.
    pub fn new(data: NewProduct) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: data.name,
            sku: data.sku,
            category: data.category,
            quantity: data.quantity,
            min_stock: data.min_stock,
            price: stored_price(data.price),
            description: data.description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Stock value of this line: price × quantity, saturating at `Decimal::MAX`.
    pub fn stock_value(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Merge the supplied fields and refresh `updated_at`. `id` and `created_at` never change.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(sku) = patch.sku {
            self.sku = sku;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = min_stock;
        }
        if let Some(price) = patch.price {
            self.price = stored_price(price);
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        self.updated_at = Utc::now();
    }
}

/// Everything a product needs except the fields the store assigns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub category: String,
    pub quantity: u32,
    pub min_stock: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
}

/// Partial update for a product. `None` leaves the field as is.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub min_stock: Option<u32>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
}

impl Category {
    pub fn new(data: NewCategory) -> Self {
        Self {
            id: new_id(),
            name: data.name,
            color: data.color,
        }
    }

    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}

impl NewCategory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// The categories a fresh inventory starts with.
pub fn default_categories() -> Vec<Category> {
    [
        ("1", "Electronics", "hsl(180, 70%, 45%)"),
        ("2", "Furniture", "hsl(45, 70%, 50%)"),
        ("3", "Clothing", "hsl(280, 60%, 55%)"),
        ("4", "Food & Beverages", "hsl(120, 50%, 45%)"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}
