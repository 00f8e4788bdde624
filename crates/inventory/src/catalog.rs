//! In-memory product collection.
//!
//! The catalog owns identity rules (unique id and SKU) and the newest-first
//! ordering of the inventory list. Analytics never read through a cache here:
//! every accessor hands out the current products.

use chrono::NaiveDate;
use tracing::info;

use stocklens_core::{DomainError, DomainResult, Entity, ProductId};

use crate::abc::{AbcClassification, classify_abc};
use crate::analytics::DashboardMetrics;
use crate::product::{NewProduct, Product, Transaction, TransactionKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from imported products, keeping their order.
    ///
    /// Records with negative or non-finite figures are rejected with
    /// [`DomainError::InvariantViolation`].
    pub fn from_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut catalog = Self::new();
        for product in products {
            product.check_invariants()?;
            catalog.ensure_unique(&product)?;
            catalog.products.push(product);
        }
        Ok(catalog)
    }

    /// Insert a product at the front of the list (newest first).
    pub fn add(&mut self, product: Product) -> DomainResult<&Product> {
        product.check_invariants()?;
        self.ensure_unique(&product)?;
        info!(product_id = %product.id(), sku = %product.sku, "product added to catalog");
        self.products.insert(0, product);
        Ok(&self.products[0])
    }

    /// Validate a creation payload and add the resulting product.
    pub fn create(&mut self, new_product: NewProduct, today: NaiveDate) -> DomainResult<&Product> {
        let product = new_product.into_product(today)?;
        self.add(product)
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn get_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku.eq_ignore_ascii_case(sku))
    }

    /// Append a movement to a product's ledger (stock level is not changed).
    pub fn record_transaction(
        &mut self,
        id: &ProductId,
        kind: TransactionKind,
        quantity: i64,
        note: impl Into<String>,
        date: NaiveDate,
    ) -> DomainResult<&Transaction> {
        let product = self.get_mut(id).ok_or_else(DomainError::not_found)?;
        Ok(product.record_transaction(kind, quantity, note, date))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::compute(&self.products)
    }

    pub fn abc(&self) -> AbcClassification {
        classify_abc(&self.products)
    }

    fn ensure_unique(&self, product: &Product) -> DomainResult<()> {
        if self.get(product.id()).is_some() {
            return Err(DomainError::conflict(format!(
                "product id already exists: {}",
                product.id()
            )));
        }
        if self.find_by_sku(&product.sku).is_some() {
            return Err(DomainError::conflict(format!(
                "sku already exists: {}",
                product.sku
            )));
        }
        Ok(())
    }
}
