use serde::{Deserialize, Serialize};

use stocklens_inventory::Product;

/// Maximum number of products included in a digest sent to the generator.
pub const MAX_DIGEST_PRODUCTS: usize = 15;

/// Coarse stock flag used in digests.
///
/// Deliberately separate from `StockStatus`: a product is critical when stock has
/// fallen to or below its safety buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigestStatus {
    CriticalLow,
    Ok,
}

/// One product row of a digest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub sku: String,
    pub name: String,
    pub stock: i64,
    pub status: DigestStatus,
    /// Stock value at cost.
    pub value: f64,
    /// Annual demand in units.
    pub turnover_potential: f64,
}

impl ProductSummary {
    pub fn from_product(product: &Product) -> Self {
        let status = if product.stock_level <= product.safety_stock {
            DigestStatus::CriticalLow
        } else {
            DigestStatus::Ok
        };
        Self {
            sku: product.sku.clone(),
            name: product.name.clone(),
            stock: product.stock_level,
            status,
            value: product.inventory_value(),
            turnover_potential: product.annual_demand(),
        }
    }
}

/// Structured digest of a product collection, capped at [`MAX_DIGEST_PRODUCTS`]
/// rows taken in collection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDigest {
    pub products: Vec<ProductSummary>,
    /// Number of products left out by the cap.
    pub omitted: usize,
}

impl InventoryDigest {
    pub fn from_products(products: &[Product]) -> Self {
        let included = products.len().min(MAX_DIGEST_PRODUCTS);
        Self {
            products: products[..included]
                .iter()
                .map(ProductSummary::from_product)
                .collect(),
            omitted: products.len() - included,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.omitted > 0
    }

    /// JSON array of the included rows.
    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(&self.products).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stocklens_core::ProductId;

    fn product(i: usize, stock: i64, safety: i64) -> Product {
        let mut p = Product::new(
            ProductId::parse(format!("p-{i}")).unwrap(),
            format!("SKU-{i}"),
            format!("Item {i}"),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        p.stock_level = stock;
        p.safety_stock = safety;
        p.unit_cost = 2.0;
        p.demand_rate = 1.5;
        p
    }

    #[test]
    fn summary_flags_stock_at_or_below_safety_as_critical() {
        assert_eq!(
            ProductSummary::from_product(&product(1, 5, 5)).status,
            DigestStatus::CriticalLow
        );
        assert_eq!(
            ProductSummary::from_product(&product(1, 6, 5)).status,
            DigestStatus::Ok
        );
    }

    #[test]
    fn summary_carries_value_and_annual_demand() {
        let summary = ProductSummary::from_product(&product(3, 10, 0));
        assert_eq!(summary.sku, "SKU-3");
        assert_eq!(summary.value, 20.0);
        assert_eq!(summary.turnover_potential, 547.5);
    }

    #[test]
    fn digest_caps_at_fifteen_products_in_order() {
        let products: Vec<Product> = (0..20).map(|i| product(i, 10, 1)).collect();
        let digest = InventoryDigest::from_products(&products);

        assert_eq!(digest.products.len(), MAX_DIGEST_PRODUCTS);
        assert_eq!(digest.omitted, 5);
        assert!(digest.is_truncated());
        assert_eq!(digest.products[0].sku, "SKU-0");
        assert_eq!(digest.products[14].sku, "SKU-14");
    }

    #[test]
    fn digest_json_uses_camel_case_keys() {
        let digest = InventoryDigest::from_products(&[product(1, 0, 2)]);
        let json: serde_json::Value = serde_json::from_str(&digest.to_json()).unwrap();

        assert_eq!(json[0]["status"], "CRITICAL_LOW");
        assert_eq!(json[0]["turnoverPotential"], 547.5);
        assert!(!digest.is_truncated());
    }
}
