use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stocklens_core::{DomainError, DomainResult, Entity, ProductId, TransactionId, ValueObject};

use crate::abc::annual_usage_value;
use crate::analytics::turnover_rate;
use crate::eoq::compute_eoq;
use crate::status::{StockStatus, classify_stock_status};

/// Demand rates are expressed per day; annualised figures use a 365-day year.
pub const DAYS_PER_YEAR: f64 = 365.0;

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_SUPPLIER: &str = "Unknown";
pub const DEFAULT_LOCATION: &str = "Unassigned";
pub const DEFAULT_HOLDING_COST_PERCENT: f64 = 0.15;

/// Direction of a recorded stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    In,
    Out,
    Adjustment,
}

/// Entry in a product's append-only movement ledger.
///
/// Transactions are recorded for audit only; they are never reconciled against
/// `Product::stock_level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: i64,
    pub note: String,
}

impl ValueObject for Transaction {}

/// A stock-keeping unit and its replenishment parameters.
///
/// Only source fields live here. Status, ABC class and EOQ are derived on every
/// read (see the accessor methods below), so mutating a public field can never
/// leave stale derived state behind.
///
/// The analytics functions accept any numeric values, including negative ones;
/// range checks belong to [`NewProduct`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub stock_level: i64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub unit_cost: f64,
    pub unit_price: f64,
    pub lead_time_days: i64,
    /// Average daily demand (units/day).
    pub demand_rate: f64,
    /// Annual holding cost as a fraction of unit cost.
    pub holding_cost_percent: f64,
    /// Fixed cost of placing one replenishment order.
    pub ordering_cost: f64,
    pub supplier: String,
    pub location: String,
    pub last_count_date: NaiveDate,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Product {
    /// Create a product with zeroed stock and costs, the default holding cost
    /// percent and default descriptive fields.
    pub fn new(
        id: ProductId,
        sku: impl Into<String>,
        name: impl Into<String>,
        last_count_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            sku: sku.into(),
            name: name.into(),
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
            stock_level: 0,
            safety_stock: 0,
            reorder_point: 0,
            unit_cost: 0.0,
            unit_price: 0.0,
            lead_time_days: 0,
            demand_rate: 0.0,
            holding_cost_percent: DEFAULT_HOLDING_COST_PERCENT,
            ordering_cost: 0.0,
            supplier: DEFAULT_SUPPLIER.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            last_count_date,
            transactions: Vec::new(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append a movement to the ledger. Stock level is left untouched.
    pub fn record_transaction(
        &mut self,
        kind: TransactionKind,
        quantity: i64,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> &Transaction {
        self.transactions.push(Transaction {
            id: TransactionId::generate(),
            date,
            kind,
            quantity,
            note: note.into(),
        });
        // Just pushed, so the ledger is non-empty.
        let last = self.transactions.len() - 1;
        &self.transactions[last]
    }

    pub fn status(&self) -> StockStatus {
        classify_stock_status(self)
    }

    pub fn eoq(&self) -> i64 {
        compute_eoq(
            self.demand_rate,
            self.ordering_cost,
            self.holding_cost_percent,
            self.unit_cost,
        )
    }

    /// On-hand value at cost (`stock_level * unit_cost`).
    pub fn inventory_value(&self) -> f64 {
        self.stock_level as f64 * self.unit_cost
    }

    /// Expected units consumed per year.
    pub fn annual_demand(&self) -> f64 {
        self.demand_rate * DAYS_PER_YEAR
    }

    pub fn annual_usage_value(&self) -> f64 {
        annual_usage_value(self)
    }

    pub fn turnover_rate(&self) -> f64 {
        turnover_rate(self)
    }

    /// Check the stored-record invariants: quantities, costs and demand are
    /// non-negative and finite. Products built through [`NewProduct`] always hold
    /// them; imported records may not.
    pub fn check_invariants(&self) -> DomainResult<()> {
        let quantities = [
            ("stock_level", self.stock_level),
            ("safety_stock", self.safety_stock),
            ("reorder_point", self.reorder_point),
            ("lead_time_days", self.lead_time_days),
        ];
        for (field, value) in quantities {
            if value < 0 {
                return Err(DomainError::invariant(format!(
                    "product {}: {field} is negative ({value})",
                    self.id
                )));
            }
        }

        let amounts = [
            ("unit_cost", self.unit_cost),
            ("unit_price", self.unit_price),
            ("demand_rate", self.demand_rate),
            ("ordering_cost", self.ordering_cost),
            ("holding_cost_percent", self.holding_cost_percent),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::invariant(format!(
                    "product {}: {field} must be a non-negative number ({value})",
                    self.id
                )));
            }
        }

        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Data-entry payload for creating a product (form submission or import).
///
/// Blank descriptive fields fall back to defaults, a zero or missing holding cost
/// falls back to [`DEFAULT_HOLDING_COST_PERCENT`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub stock_level: i64,
    pub safety_stock: i64,
    pub reorder_point: i64,
    pub unit_cost: f64,
    pub unit_price: f64,
    pub lead_time_days: i64,
    pub demand_rate: f64,
    pub holding_cost_percent: Option<f64>,
    pub ordering_cost: f64,
    pub supplier: Option<String>,
    pub location: Option<String>,
}

impl NewProduct {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }

        let quantities = [
            ("stock_level", self.stock_level),
            ("safety_stock", self.safety_stock),
            ("reorder_point", self.reorder_point),
            ("lead_time_days", self.lead_time_days),
        ];
        for (field, value) in quantities {
            if value < 0 {
                return Err(DomainError::validation(format!("{field} cannot be negative")));
            }
        }

        let amounts = [
            ("unit_cost", self.unit_cost),
            ("unit_price", self.unit_price),
            ("demand_rate", self.demand_rate),
            ("ordering_cost", self.ordering_cost),
            ("holding_cost_percent", self.holding_cost_percent.unwrap_or(0.0)),
        ];
        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(DomainError::validation(format!("{field} must be a finite number")));
            }
            if value < 0.0 {
                return Err(DomainError::validation(format!("{field} cannot be negative")));
            }
        }

        Ok(())
    }

    /// Validate and build a product with a freshly generated id.
    pub fn into_product(self, today: NaiveDate) -> DomainResult<Product> {
        self.into_product_with_id(ProductId::generate(), today)
    }

    pub fn into_product_with_id(self, id: ProductId, today: NaiveDate) -> DomainResult<Product> {
        self.validate()?;

        let holding_cost_percent = match self.holding_cost_percent {
            Some(h) if h != 0.0 => h,
            _ => DEFAULT_HOLDING_COST_PERCENT,
        };

        Ok(Product {
            id,
            sku: self.sku.trim().to_string(),
            name: self.name.trim().to_string(),
            category: or_default(self.category, DEFAULT_CATEGORY),
            description: self.description.unwrap_or_default(),
            stock_level: self.stock_level,
            safety_stock: self.safety_stock,
            reorder_point: self.reorder_point,
            unit_cost: self.unit_cost,
            unit_price: self.unit_price,
            lead_time_days: self.lead_time_days,
            demand_rate: self.demand_rate,
            holding_cost_percent,
            ordering_cost: self.ordering_cost,
            supplier: or_default(self.supplier, DEFAULT_SUPPLIER),
            location: or_default(self.location, DEFAULT_LOCATION),
            last_count_date: today,
            transactions: Vec::new(),
        })
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn widget_form() -> NewProduct {
        NewProduct {
            sku: "ME-105".to_string(),
            name: "Steel Bearing".to_string(),
            stock_level: 40,
            reorder_point: 10,
            unit_cost: 2.5,
            demand_rate: 3.0,
            ..NewProduct::default()
        }
    }

    #[test]
    fn bare_product_has_zero_figures_and_default_holding_cost() {
        let product = Product::new(ProductId::parse("p-7").unwrap(), "BR-7", "Bracket", today());

        assert_eq!(product.stock_level, 0);
        assert_eq!(product.unit_cost, 0.0);
        assert_eq!(product.demand_rate, 0.0);
        assert_eq!(product.holding_cost_percent, DEFAULT_HOLDING_COST_PERCENT);
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert!(product.check_invariants().is_ok());
    }

    #[test]
    fn new_product_applies_defaults() {
        let product = widget_form().into_product(today()).unwrap();

        assert!(product.id().as_str().starts_with("p-"));
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.supplier, DEFAULT_SUPPLIER);
        assert_eq!(product.location, DEFAULT_LOCATION);
        assert_eq!(product.holding_cost_percent, DEFAULT_HOLDING_COST_PERCENT);
        assert_eq!(product.last_count_date, today());
        assert!(product.transactions().is_empty());
    }

    #[test]
    fn zero_holding_cost_falls_back_to_default() {
        let form = NewProduct {
            holding_cost_percent: Some(0.0),
            ..widget_form()
        };
        let product = form.into_product(today()).unwrap();
        assert_eq!(product.holding_cost_percent, DEFAULT_HOLDING_COST_PERCENT);
    }

    #[test]
    fn blank_descriptive_fields_fall_back_to_defaults() {
        let form = NewProduct {
            category: Some("  ".to_string()),
            supplier: Some(String::new()),
            location: Some("Aisle 4".to_string()),
            ..widget_form()
        };
        let product = form.into_product(today()).unwrap();
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.supplier, DEFAULT_SUPPLIER);
        assert_eq!(product.location, "Aisle 4");
    }

    #[test]
    fn new_product_rejects_blank_sku() {
        let form = NewProduct {
            sku: "  ".to_string(),
            ..widget_form()
        };
        match form.into_product(today()).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("sku")),
            _ => panic!("Expected Validation error for blank sku"),
        }
    }

    #[test]
    fn new_product_rejects_blank_name() {
        let form = NewProduct {
            name: String::new(),
            ..widget_form()
        };
        assert!(matches!(
            form.into_product(today()),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn new_product_rejects_negative_stock() {
        let form = NewProduct {
            stock_level: -1,
            ..widget_form()
        };
        match form.into_product(today()).unwrap_err() {
            DomainError::Validation(msg) => assert!(msg.contains("stock_level")),
            _ => panic!("Expected Validation error for negative stock"),
        }
    }

    #[test]
    fn new_product_rejects_non_finite_cost() {
        let form = NewProduct {
            unit_cost: f64::NAN,
            ..widget_form()
        };
        assert!(form.into_product(today()).is_err());
    }

    #[test]
    fn recording_a_transaction_does_not_touch_stock() {
        let mut product = widget_form().into_product(today()).unwrap();
        let before = product.stock_level;

        let tx = product
            .record_transaction(TransactionKind::Out, 15, "pick for order 7", today())
            .clone();

        assert_eq!(product.stock_level, before);
        assert_eq!(product.transactions().len(), 1);
        assert_eq!(tx.kind, TransactionKind::Out);
        assert_eq!(tx.quantity, 15);
    }

    #[test]
    fn derived_values_follow_field_mutation() {
        let mut product = widget_form().into_product(today()).unwrap();
        assert_eq!(product.status(), StockStatus::Overstock);

        product.stock_level = 0;
        assert_eq!(product.status(), StockStatus::OutOfStock);
        assert_eq!(product.inventory_value(), 0.0);
    }

    #[test]
    fn product_round_trips_through_camel_case_json() {
        let product = widget_form()
            .into_product_with_id(ProductId::parse("p-1").unwrap(), today())
            .unwrap();
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["stockLevel"], 40);
        assert_eq!(json["lastCountDate"], "2024-03-01");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn transaction_kind_uses_upper_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Adjustment).unwrap(),
            "\"ADJUSTMENT\""
        );
    }
}
