//! Plain-text rendering of the dashboard and inventory list.

use std::fmt;

use stocklens_inventory::{
    AbcClassification, Catalog, DashboardMetrics, ProductFilter, ProductInsight, StatusCounts,
    StockStatus, format_currency, status_counts, value_by_category,
};

/// Everything the dashboard page shows, computed from one catalog snapshot.
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub metrics: DashboardMetrics,
    pub health: StatusCounts,
    pub categories: Vec<(String, String)>,
    pub rows: Vec<ReportRow>,
}

/// One line of the inventory list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub sku: String,
    pub name: String,
    pub insight: ProductInsight,
}

impl DashboardReport {
    pub fn build(catalog: &Catalog, filter: &ProductFilter) -> Self {
        let products = catalog.products();
        let abc: AbcClassification = catalog.abc();

        let rows = filter
            .apply(products)
            .into_iter()
            .map(|p| ReportRow {
                sku: p.sku.clone(),
                name: p.name.clone(),
                insight: ProductInsight::for_product(p, &abc),
            })
            .collect();

        Self {
            metrics: DashboardMetrics::compute(products),
            health: status_counts(products),
            categories: value_by_category(products)
                .into_iter()
                .map(|c| (c.name, format_currency(c.value)))
                .collect(),
            rows,
        }
    }
}

impl fmt::Display for DashboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.metrics;

        writeln!(f, "Total Inventory Value : {}", format_currency(m.total_inventory_value))?;
        writeln!(
            f,
            "Low Stock Items       : {} ({} out of stock)",
            m.low_stock_count, m.out_of_stock_count
        )?;
        writeln!(f, "Avg Turnover Rate     : {:.1}x", m.average_turnover_rate)?;
        writeln!(f, "Total SKUs            : {}", m.total_items)?;

        writeln!(f, "\nStock Health")?;
        for status in StockStatus::ALL {
            writeln!(f, "  {:<13} {}", status.label(), self.health.get(status))?;
        }

        writeln!(f, "\nValue by Category")?;
        for (name, value) in &self.categories {
            writeln!(f, "  {name:<13} {value}")?;
        }

        writeln!(f, "\nInventory")?;
        for row in &self.rows {
            let abc = row
                .insight
                .abc_class
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "  {:<9} {:<30} {} {:<13} EOQ {:>5}  {}",
                row.sku,
                row.name,
                abc,
                row.insight.status.label(),
                row.insight.eoq,
                format_currency(row.insight.inventory_value),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_catalog;
    use chrono::NaiveDate;
    use stocklens_inventory::StatusFilter;

    fn catalog() -> Catalog {
        demo_catalog(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()).unwrap()
    }

    #[test]
    fn report_counts_match_catalog() {
        let report = DashboardReport::build(&catalog(), &ProductFilter::new());

        assert_eq!(report.metrics.total_items, 5);
        assert_eq!(report.health.total(), 5);
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.categories[0].0, "Electronics");
    }

    #[test]
    fn filter_limits_rows_but_not_metrics() {
        let filter = ProductFilter::new().with_status(StatusFilter::Low);
        let report = DashboardReport::build(&catalog(), &filter);

        assert_eq!(report.metrics.total_items, 5);
        let skus: Vec<&str> = report.rows.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["PK-2040", "HW-3300"]);
    }

    #[test]
    fn display_includes_headline_figures() {
        let text = DashboardReport::build(&catalog(), &ProductFilter::new()).to_string();

        assert!(text.contains("Total SKUs            : 5"));
        assert!(text.contains("Out of Stock"));
        assert!(text.contains("HW-3300"));
        assert!(text.ends_with('\n'));
    }
}
