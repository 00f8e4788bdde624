//! Collection-level aggregates for the dashboard.
//!
//! Every figure is recomputed from the products passed in; nothing is cached.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stocklens_core::{Entity, ProductId, ValueObject};

use crate::abc::{AbcClass, AbcClassification};
use crate::product::{DAYS_PER_YEAR, Product};
use crate::status::{StockStatus, classify_stock_status};

/// Turnover divides by on-hand stock floored at this value, so empty or negative
/// stock never divides by zero.
pub const MIN_TURNOVER_DIVISOR: i64 = 1;

/// Annualised turns: `demand_rate * 365 / max(1, stock_level)`.
pub fn turnover_rate(product: &Product) -> f64 {
    let divisor = product.stock_level.max(MIN_TURNOVER_DIVISOR);
    product.demand_rate * DAYS_PER_YEAR / divisor as f64
}

/// Mean turnover across the collection. An empty collection has turnover `0`.
pub fn average_turnover(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let sum: f64 = products.iter().map(turnover_rate).sum();
    sum / products.len() as f64
}

/// Σ `stock_level * unit_cost`.
pub fn total_inventory_value(products: &[Product]) -> f64 {
    products.iter().map(Product::inventory_value).sum()
}

/// Number of products in each stock status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub ok: usize,
    pub low: usize,
    pub out_of_stock: usize,
    pub overstock: usize,
}

impl ValueObject for StatusCounts {}

impl StatusCounts {
    pub fn get(&self, status: StockStatus) -> usize {
        match status {
            StockStatus::Ok => self.ok,
            StockStatus::Low => self.low,
            StockStatus::OutOfStock => self.out_of_stock,
            StockStatus::Overstock => self.overstock,
        }
    }

    pub fn total(&self) -> usize {
        self.ok + self.low + self.out_of_stock + self.overstock
    }

    fn record(&mut self, status: StockStatus) {
        match status {
            StockStatus::Ok => self.ok += 1,
            StockStatus::Low => self.low += 1,
            StockStatus::OutOfStock => self.out_of_stock += 1,
            StockStatus::Overstock => self.overstock += 1,
        }
    }
}

pub fn status_counts(products: &[Product]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for p in products {
        counts.record(classify_stock_status(p));
    }
    counts
}

/// Stock value of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    pub name: String,
    pub value: f64,
}

impl ValueObject for CategoryValue {}

/// Stock value grouped by category, in the order each category is first seen.
pub fn value_by_category(products: &[Product]) -> Vec<CategoryValue> {
    let mut groups: Vec<CategoryValue> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for p in products {
        match positions.get(p.category.as_str()) {
            Some(&i) => groups[i].value += p.inventory_value(),
            None => {
                positions.insert(p.category.as_str(), groups.len());
                groups.push(CategoryValue {
                    name: p.category.clone(),
                    value: p.inventory_value(),
                });
            }
        }
    }

    groups
}

/// Headline figures of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_inventory_value: f64,
    pub total_items: usize,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    pub average_turnover_rate: f64,
}

impl ValueObject for DashboardMetrics {}

impl DashboardMetrics {
    pub fn compute(products: &[Product]) -> Self {
        let counts = status_counts(products);
        Self {
            total_inventory_value: total_inventory_value(products),
            total_items: products.len(),
            low_stock_count: counts.low,
            out_of_stock_count: counts.out_of_stock,
            average_turnover_rate: average_turnover(products),
        }
    }
}

/// Derived view of a single product (detail page / list row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInsight {
    pub product_id: ProductId,
    pub status: StockStatus,
    pub eoq: i64,
    pub inventory_value: f64,
    pub turnover_rate: f64,
    /// `None` when the product was not part of the classified collection.
    pub abc_class: Option<AbcClass>,
}

impl ValueObject for ProductInsight {}

impl ProductInsight {
    pub fn for_product(product: &Product, abc: &AbcClassification) -> Self {
        Self {
            product_id: product.id().clone(),
            status: product.status(),
            eoq: product.eoq(),
            inventory_value: product.inventory_value(),
            turnover_rate: product.turnover_rate(),
            abc_class: abc.get(product.id()),
        }
    }
}
