use crate::core::batch::BatchOutcome;
use crate::core::engine::FulfillmentReport;
use crate::utils::error::{Result, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FULFILLED_FILE: &str = "fulfilled.csv";
pub const MISSED_FILE: &str = "missed.csv";
pub const INVENTORY_FILE: &str = "inventory.csv";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Serialize)]
struct FulfilledRow<'a> {
    customer: &'a str,
    cake_type: &'a str,
    recipe: &'a str,
    quantity: u64,
    revenue: f64,
    cost: f64,
}

#[derive(Debug, Serialize)]
struct MissedRow<'a> {
    customer: &'a str,
    cake_type: &'a str,
    quantity: u64,
    reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    pub generated_at: DateTime<Utc>,
    pub store: String,
    pub orders: usize,
    pub fulfilled: usize,
    pub missed: usize,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
}

impl SalesSummary {
    pub fn from_outcome(outcome: &BatchOutcome) -> Self {
        let report = &outcome.report;
        Self {
            generated_at: Utc::now(),
            store: outcome.store_name.clone(),
            orders: report.order_count(),
            fulfilled: report.fulfilled.len(),
            missed: report.missed.len(),
            total_revenue: report.total_revenue,
            total_cost: report.total_cost,
            net_profit: report.net_profit(),
        }
    }
}

fn csv_writer(header: &[&str]) -> Result<csv::Writer<Vec<u8>>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(header)?;
    Ok(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| StoreError::IoError(e.into_error()))
}

pub fn fulfilled_csv(report: &FulfillmentReport) -> Result<Vec<u8>> {
    let mut writer = csv_writer(&["customer", "cake_type", "recipe", "quantity", "revenue", "cost"])?;
    for fulfilled in &report.fulfilled {
        writer.serialize(FulfilledRow {
            customer: &fulfilled.order.customer,
            cake_type: &fulfilled.order.cake_type,
            recipe: &fulfilled.recipe.name,
            quantity: fulfilled.order.quantity,
            revenue: fulfilled.revenue,
            cost: fulfilled.cost,
        })?;
    }
    finish(writer)
}

pub fn missed_csv(report: &FulfillmentReport) -> Result<Vec<u8>> {
    let mut writer = csv_writer(&["customer", "cake_type", "quantity", "reason"])?;
    for missed in &report.missed {
        writer.serialize(MissedRow {
            customer: &missed.order.customer,
            cake_type: &missed.order.cake_type,
            quantity: missed.order.quantity,
            reason: missed.reason.to_string(),
        })?;
    }
    finish(writer)
}

pub fn summary_json(summary: &SalesSummary) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(summary)?)
}
