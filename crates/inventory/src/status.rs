//! Stock status classification.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Stock above `reorder_point * OVERSTOCK_REORDER_MULTIPLIER + safety_stock` is overstock.
pub const OVERSTOCK_REORDER_MULTIPLIER: i64 = 3;

/// Health of a product's on-hand quantity. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Ok,
    Low,
    OutOfStock,
    Overstock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 4] = [
        StockStatus::Ok,
        StockStatus::Low,
        StockStatus::OutOfStock,
        StockStatus::Overstock,
    ];

    /// Human-facing badge text.
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Ok => "Healthy",
            StockStatus::Low => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::Overstock => "Overstock",
        }
    }

    pub fn needs_replenishment(self) -> bool {
        matches!(self, StockStatus::Low | StockStatus::OutOfStock)
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            StockStatus::Ok => "OK",
            StockStatus::Low => "LOW",
            StockStatus::OutOfStock => "OUT_OF_STOCK",
            StockStatus::Overstock => "OVERSTOCK",
        };
        f.write_str(s)
    }
}

/// Classify raw stock figures. Checks run in order and the first match wins:
/// empty, at or below reorder point, above the overstock ceiling, otherwise ok.
pub fn stock_status(stock_level: i64, reorder_point: i64, safety_stock: i64) -> StockStatus {
    if stock_level == 0 {
        return StockStatus::OutOfStock;
    }
    if stock_level <= reorder_point {
        return StockStatus::Low;
    }

    let overstock_ceiling = reorder_point
        .saturating_mul(OVERSTOCK_REORDER_MULTIPLIER)
        .saturating_add(safety_stock);
    if stock_level > overstock_ceiling {
        return StockStatus::Overstock;
    }

    StockStatus::Ok
}

pub fn classify_stock_status(product: &Product) -> StockStatus {
    stock_status(
        product.stock_level,
        product.reorder_point,
        product.safety_stock,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_shelf_is_out_of_stock_regardless_of_thresholds() {
        assert_eq!(stock_status(0, 0, 0), StockStatus::OutOfStock);
        assert_eq!(stock_status(0, 10, 5), StockStatus::OutOfStock);
        assert_eq!(stock_status(0, -10, -5), StockStatus::OutOfStock);
    }

    #[test]
    fn at_or_below_reorder_point_is_low() {
        assert_eq!(stock_status(5, 10, 0), StockStatus::Low);
        assert_eq!(stock_status(5, 10, 1_000), StockStatus::Low);
        assert_eq!(stock_status(10, 10, 2), StockStatus::Low);
    }

    #[test]
    fn above_ceiling_is_overstock() {
        // 100 > 10 * 3 + 5
        assert_eq!(stock_status(100, 10, 5), StockStatus::Overstock);
        assert_eq!(stock_status(36, 10, 5), StockStatus::Overstock);
    }

    #[test]
    fn between_reorder_point_and_ceiling_is_ok() {
        assert_eq!(stock_status(20, 10, 5), StockStatus::Ok);
        assert_eq!(stock_status(35, 10, 5), StockStatus::Ok);
    }

    #[test]
    fn extreme_thresholds_do_not_overflow() {
        assert_eq!(stock_status(i64::MAX, i64::MAX - 1, i64::MAX), StockStatus::Ok);
        assert_eq!(stock_status(-3, 10, 0), StockStatus::Low);
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(StockStatus::OutOfStock.to_string(), "OUT_OF_STOCK");
        assert_eq!(
            serde_json::to_string(&StockStatus::Overstock).unwrap(),
            "\"OVERSTOCK\""
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: classification is total, deterministic and honours check order.
        #[test]
        fn classification_follows_priority_order(
            stock in 0i64..10_000,
            reorder in 0i64..10_000,
            safety in 0i64..10_000,
        ) {
            let status = stock_status(stock, reorder, safety);
            prop_assert_eq!(status, stock_status(stock, reorder, safety));

            let expected = if stock == 0 {
                StockStatus::OutOfStock
            } else if stock <= reorder {
                StockStatus::Low
            } else if stock > reorder * 3 + safety {
                StockStatus::Overstock
            } else {
                StockStatus::Ok
            };
            prop_assert_eq!(status, expected);
        }
    }
}
