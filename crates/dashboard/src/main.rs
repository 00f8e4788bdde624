use anyhow::Context;
use chrono::Utc;

use stocklens_ai::{AdvisorConfig, GeminiClient, InventoryAdvisor};
use stocklens_dashboard::{DashboardReport, demo_catalog};
use stocklens_inventory::{ProductFilter, StatusFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stocklens_observability::init();

    let mut args = std::env::args().skip(1);
    let status = match args.next() {
        Some(raw) => raw.parse::<StatusFilter>().context("invalid status filter")?,
        None => StatusFilter::All,
    };
    let query: Vec<String> = args.collect();

    let catalog = demo_catalog(Utc::now().date_naive()).context("failed to build demo catalog")?;
    let filter = ProductFilter::new().with_status(status);

    let report = DashboardReport::build(&catalog, &filter);
    println!("{report}");
    tracing::info!(
        products = catalog.len(),
        rows = report.rows.len(),
        "dashboard rendered"
    );

    if !query.is_empty() {
        let config = AdvisorConfig::from_env().context("invalid advisor configuration")?;
        let client = GeminiClient::new(&config).context("failed to build Gemini client")?;
        let advisor = InventoryAdvisor::new(client).with_timeout(config.timeout);

        let advice = advisor
            .analyze_inventory(catalog.products(), &query.join(" "))
            .await;
        println!("\nAdvisor\n{}", advice.text);
    }

    Ok(())
}
