//! Inventory analytics engine.
//!
//! Pure, deterministic functions over product records: stock status, economic
//! order quantity, ABC classification and dashboard aggregates. Derived values are
//! computed on every call and never stored on the product.

pub mod abc;
pub mod analytics;
pub mod catalog;
pub mod currency;
pub mod eoq;
pub mod filter;
pub mod product;
pub mod status;

pub use abc::{
    AbcClass, AbcClassification, AbcEntry, CLASS_A_CUMULATIVE_SHARE, CLASS_B_CUMULATIVE_SHARE,
    annual_usage_value, classify_abc,
};
pub use analytics::{
    CategoryValue, DashboardMetrics, MIN_TURNOVER_DIVISOR, ProductInsight, StatusCounts,
    average_turnover, status_counts, total_inventory_value, turnover_rate, value_by_category,
};
pub use catalog::Catalog;
pub use currency::format_currency;
pub use eoq::compute_eoq;
pub use filter::{ProductFilter, StatusFilter};
pub use product::{DAYS_PER_YEAR, NewProduct, Product, Transaction, TransactionKind};
pub use status::{OVERSTOCK_REORDER_MULTIPLIER, StockStatus, classify_stock_status, stock_status};
