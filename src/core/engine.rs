use crate::core::catalog::RecipeCatalog;
use crate::core::ledger::{InventoryLedger, StockError};
use crate::domain::model::{Order, Recipe};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct FulfilledOrder {
    pub order: Order,
    pub recipe: Recipe,
    pub cost: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MissReason {
    UnknownCake,
    OutOfStock(StockError),
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::UnknownCake => write!(f, "unknown cake type"),
            MissReason::OutOfStock(e) => write!(f, "{}", e),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissedOrder {
    pub order: Order,
    pub reason: MissReason,
}

/// Outcome of one pass over an order batch, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FulfillmentReport {
    pub fulfilled: Vec<FulfilledOrder>,
    pub missed: Vec<MissedOrder>,
    pub total_revenue: f64,
    pub total_cost: f64,
}

impl FulfillmentReport {
    pub fn net_profit(&self) -> f64 {
        self.total_revenue - self.total_cost
    }

    pub fn order_count(&self) -> usize {
        self.fulfilled.len() + self.missed.len()
    }
}

pub struct FulfillmentEngine<'a> {
    catalog: &'a RecipeCatalog,
    ledger: &'a mut InventoryLedger,
}

impl<'a> FulfillmentEngine<'a> {
    pub fn new(catalog: &'a RecipeCatalog, ledger: &'a mut InventoryLedger) -> Self {
        Self { catalog, ledger }
    }

    /// Process every order once, in order. Earlier deductions are never rolled back.
    pub fn run(&mut self, orders: &[Order]) -> FulfillmentReport {
        let mut report = FulfillmentReport::default();

        for order in orders {
            match self.fulfill(order) {
                Ok(fulfilled) => {
                    report.total_revenue += fulfilled.revenue;
                    report.total_cost += fulfilled.cost;
                    report.fulfilled.push(fulfilled);
                }
                Err(reason) => report.missed.push(MissedOrder {
                    order: order.clone(),
                    reason,
                }),
            }
        }

        tracing::info!(
            "Processed {} orders: {} fulfilled, {} missed, revenue ${:.2}, cost ${:.2}",
            report.order_count(),
            report.fulfilled.len(),
            report.missed.len(),
            report.total_revenue,
            report.total_cost
        );
        report
    }

    fn fulfill(&mut self, order: &Order) -> Result<FulfilledOrder, MissReason> {
        let Some(recipe) = self.catalog.resolve(&order.cake_type) else {
            tracing::warn!("Unknown cake type: {}", order.cake_type);
            return Err(MissReason::UnknownCake);
        };

        let cost = self
            .ledger
            .deduct(&recipe.ingredients, order.quantity)
            .map_err(|e| {
                tracing::info!("Missed order ({}): {}", order, e);
                MissReason::OutOfStock(e)
            })?;

        let revenue = recipe.price * order.quantity as f64;
        tracing::debug!("Fulfilled order ({}): revenue ${:.2}", order, revenue);
        Ok(FulfilledOrder {
            order: order.clone(),
            recipe,
            cost,
            revenue,
        })
    }
}
