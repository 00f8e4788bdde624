//! Prompt construction for the inventory advisor.
//!
//! Each request is split into a *context* (the data the model reasons over) and a
//! *prompt* (instructions plus the user's question).

use stocklens_inventory::{Product, format_currency};

use crate::summary::InventoryDigest;

pub const ANALYST_ROLE: &str = "You are an expert Inventory Manager and Supply Chain Analyst (CPIM certified).";

/// Data section for a catalog-wide question.
pub fn analysis_context(digest: &InventoryDigest) -> String {
    let mut context = format!("Data Summary:\n{}", digest.to_json());
    if digest.is_truncated() {
        context.push_str(&format!(
            "\n...({} more products truncated for brevity)",
            digest.omitted
        ));
    }
    context
}

/// Instructions for a catalog-wide question.
pub fn analysis_prompt(query: &str) -> String {
    format!(
        "{ANALYST_ROLE}\n\
         Analyze the inventory data summary provided and answer the user's query.\n\
         \n\
         User Query: \"{query}\"\n\
         \n\
         Provide a concise, actionable, and professional response. Use markdown formatting.\n\
         If suggesting actions, prioritize by financial impact (High Value items or Stockouts)."
    )
}

/// Data section for a single-product deep dive.
pub fn optimization_context(product: &Product) -> String {
    format!(
        "Name: {name}\n\
         SKU: {sku}\n\
         Unit Cost: {unit_cost}\n\
         Holding Cost %: {holding}%\n\
         Ordering Cost: {ordering}\n\
         Avg Daily Demand: {demand}\n\
         Lead Time: {lead} days\n\
         Current Stock: {stock}\n\
         Safety Stock: {safety}\n\
         Reorder Point: {reorder}\n\
         Stock Status: {status}\n\
         Computed EOQ: {eoq} units",
        name = product.name,
        sku = product.sku,
        unit_cost = format_currency(product.unit_cost),
        holding = percent(product.holding_cost_percent),
        ordering = format_currency(product.ordering_cost),
        demand = product.demand_rate,
        lead = product.lead_time_days,
        stock = product.stock_level,
        safety = product.safety_stock,
        reorder = product.reorder_point,
        status = product.status(),
        eoq = product.eoq(),
    )
}

/// Fraction as a percentage rounded to two decimals (`0.15` -> `15`).
fn percent(fraction: f64) -> f64 {
    (fraction * 10_000.0).round() / 100.0
}

/// Instructions for a single-product deep dive.
pub fn optimization_prompt(product: &Product) -> String {
    format!(
        "Perform a deep dive inventory optimization analysis for the product described.\n\
         Explain the Economic Order Quantity (EOQ) and what it implies for ordering.\n\
         Analyze if the current Reorder Point ({reorder}) is sufficient given demand and lead time.\n\
         Suggest strategies to reduce carrying costs or stockout risks.\n\
         Keep it professional and structured.",
        reorder = product.reorder_point,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stocklens_core::ProductId;

    fn bearing() -> Product {
        let mut p = Product::new(
            ProductId::parse("p-1").unwrap(),
            "ME-105",
            "Steel Bearing",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        p.stock_level = 20;
        p.reorder_point = 10;
        p.safety_stock = 5;
        p.demand_rate = 10.0;
        p.ordering_cost = 50.0;
        p.holding_cost_percent = 0.15;
        p.unit_cost = 20.0;
        p
    }

    #[test]
    fn analysis_prompt_embeds_query() {
        let prompt = analysis_prompt("Which items should I reorder?");
        assert!(prompt.starts_with(ANALYST_ROLE));
        assert!(prompt.contains("User Query: \"Which items should I reorder?\""));
    }

    #[test]
    fn analysis_context_notes_truncation() {
        let products: Vec<Product> = (0..17)
            .map(|i| {
                Product::new(
                    ProductId::parse(format!("p-{i}")).unwrap(),
                    format!("S-{i}"),
                    "x",
                    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                )
            })
            .collect();
        let context = analysis_context(&InventoryDigest::from_products(&products));

        assert!(context.starts_with("Data Summary:\n["));
        assert!(context.contains("2 more products truncated"));
    }

    #[test]
    fn optimization_context_lists_replenishment_parameters() {
        let context = optimization_context(&bearing());

        assert!(context.contains("SKU: ME-105"));
        assert!(context.contains("Unit Cost: $20.00"));
        assert!(context.contains("Holding Cost %: 15%"));
        assert!(context.contains("Stock Status: OK"));
        assert!(context.contains("Computed EOQ: 349 units"));
        assert!(optimization_prompt(&bearing()).contains("Reorder Point (10)"));
    }
}
