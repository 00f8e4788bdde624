//! Demo catalog used when no products are supplied.

use chrono::NaiveDate;

use stocklens_core::{DomainResult, ProductId};
use stocklens_inventory::{Catalog, NewProduct, TransactionKind};

struct Seed {
    id: &'static str,
    sku: &'static str,
    name: &'static str,
    category: &'static str,
    stock_level: i64,
    safety_stock: i64,
    reorder_point: i64,
    unit_cost: f64,
    unit_price: f64,
    lead_time_days: i64,
    demand_rate: f64,
    ordering_cost: f64,
    supplier: &'static str,
    location: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "p-1",
        sku: "EL-1001",
        name: "Wireless Barcode Scanner",
        category: "Electronics",
        stock_level: 45,
        safety_stock: 10,
        reorder_point: 20,
        unit_cost: 85.0,
        unit_price: 149.99,
        lead_time_days: 14,
        demand_rate: 2.5,
        ordering_cost: 75.0,
        supplier: "ScanTech Ltd",
        location: "A1-03",
    },
    Seed {
        id: "p-2",
        sku: "PK-2040",
        name: "Corrugated Shipping Box (M)",
        category: "Packaging",
        stock_level: 120,
        safety_stock: 200,
        reorder_point: 400,
        unit_cost: 0.85,
        unit_price: 1.5,
        lead_time_days: 5,
        demand_rate: 60.0,
        ordering_cost: 40.0,
        supplier: "BoxCo",
        location: "C4-01",
    },
    Seed {
        id: "p-3",
        sku: "HW-3300",
        name: "Steel Shelf Bracket",
        category: "Hardware",
        stock_level: 0,
        safety_stock: 25,
        reorder_point: 50,
        unit_cost: 3.2,
        unit_price: 6.0,
        lead_time_days: 10,
        demand_rate: 8.0,
        ordering_cost: 30.0,
        supplier: "FerroWorks",
        location: "B2-11",
    },
    Seed {
        id: "p-4",
        sku: "EL-1050",
        name: "Thermal Label Printer",
        category: "Electronics",
        stock_level: 140,
        safety_stock: 4,
        reorder_point: 8,
        unit_cost: 210.0,
        unit_price: 329.0,
        lead_time_days: 21,
        demand_rate: 0.6,
        ordering_cost: 120.0,
        supplier: "LabelPro",
        location: "A1-07",
    },
    Seed {
        id: "p-5",
        sku: "OF-0410",
        name: "Thermal Label Roll (500)",
        category: "Office",
        stock_level: 300,
        safety_stock: 60,
        reorder_point: 150,
        unit_cost: 4.75,
        unit_price: 9.5,
        lead_time_days: 7,
        demand_rate: 18.0,
        ordering_cost: 25.0,
        supplier: "LabelPro",
        location: "D1-02",
    },
];

/// Build the demo catalog, counted on `today`.
pub fn demo_catalog(today: NaiveDate) -> DomainResult<Catalog> {
    let mut products = Vec::with_capacity(SEEDS.len());
    for seed in SEEDS {
        let new_product = NewProduct {
            sku: seed.sku.to_string(),
            name: seed.name.to_string(),
            category: Some(seed.category.to_string()),
            description: None,
            stock_level: seed.stock_level,
            safety_stock: seed.safety_stock,
            reorder_point: seed.reorder_point,
            unit_cost: seed.unit_cost,
            unit_price: seed.unit_price,
            lead_time_days: seed.lead_time_days,
            demand_rate: seed.demand_rate,
            holding_cost_percent: None,
            ordering_cost: seed.ordering_cost,
            supplier: Some(seed.supplier.to_string()),
            location: Some(seed.location.to_string()),
        };
        products.push(new_product.into_product_with_id(ProductId::parse(seed.id)?, today)?);
    }

    let mut catalog = Catalog::from_products(products)?;
    let boxes = ProductId::parse("p-2")?;
    catalog.record_transaction(&boxes, TransactionKind::Out, 80, "Peak season picks", today)?;
    Ok(catalog)
}
