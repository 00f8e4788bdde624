//! Inventory list filtering (search box + status dropdown).

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stocklens_core::DomainError;

use crate::product::Product;
use crate::status::StockStatus;

/// Status dropdown of the inventory list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    All,
    /// Low *or* out of stock.
    Low,
    Overstock,
    Ok,
}

impl StatusFilter {
    pub fn allows(self, status: StockStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Low => status.needs_replenishment(),
            StatusFilter::Overstock => status == StockStatus::Overstock,
            StatusFilter::Ok => status == StockStatus::Ok,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(StatusFilter::All),
            "LOW" => Ok(StatusFilter::Low),
            "OVERSTOCK" => Ok(StatusFilter::Overstock),
            "OK" => Ok(StatusFilter::Ok),
            other => Err(DomainError::validation(format!(
                "unknown status filter: {other}"
            ))),
        }
    }
}

/// Case-insensitive name/SKU search combined with a status filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    search: String,
    status: StatusFilter,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into().to_lowercase();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.is_empty()
            || product.name.to_lowercase().contains(&self.search)
            || product.sku.to_lowercase().contains(&self.search);

        matches_search && self.status.allows(product.status())
    }

    /// Matching products in collection order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
