use crate::core::catalog::RecipeCatalog;
use crate::core::engine::FulfillmentReport;
use crate::core::ledger::InventoryLedger;
use crate::core::Pipeline;
use crate::domain::model::Order;
use crate::utils::error::Result;

/// Everything read from the input files, before any order is processed.
#[derive(Debug, Clone, Default)]
pub struct StoreInputs {
    pub catalog: RecipeCatalog,
    pub ledger: InventoryLedger,
    pub orders: Vec<Order>,
}

/// State after a batch run: the ledger reflects every successful deduction.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub store_name: String,
    pub catalog: RecipeCatalog,
    pub ledger: InventoryLedger,
    pub report: FulfillmentReport,
}

pub struct BatchRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchOutcome> {
        tracing::info!("Loading inventory, recipes and orders...");
        let inputs = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} recipes, {} ingredients, {} orders",
            inputs.catalog.len(),
            inputs.ledger.len(),
            inputs.orders.len()
        );

        tracing::info!("Processing orders...");
        let outcome = self.pipeline.transform(inputs).await?;

        if let Some(path) = self.pipeline.load(&outcome).await? {
            tracing::info!("Results exported to: {}", path);
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::FulfillmentEngine;
    use crate::domain::model::{InventoryEntry, Recipe};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FixedPipeline {
        loaded: AtomicBool,
    }

    #[async_trait]
    impl Pipeline for FixedPipeline {
        async fn extract(&self) -> Result<StoreInputs> {
            let mut ledger = InventoryLedger::new();
            ledger.insert("Flour", InventoryEntry::new(4, 0.5));
            Ok(StoreInputs {
                catalog: [Recipe::new("Pound", 10.0).with_ingredient("Flour", 2)]
                    .into_iter()
                    .collect(),
                ledger,
                orders: vec![Order::new("Ada", "pound", 1), Order::new("Grace", "Pound", 2)],
            })
        }

        async fn transform(&self, mut inputs: StoreInputs) -> Result<BatchOutcome> {
            let report =
                FulfillmentEngine::new(&inputs.catalog, &mut inputs.ledger).run(&inputs.orders);
            Ok(BatchOutcome {
                store_name: "Test".to_string(),
                catalog: inputs.catalog,
                ledger: inputs.ledger,
                report,
            })
        }

        async fn load(&self, _outcome: &BatchOutcome) -> Result<Option<String>> {
            self.loaded.store(true, Ordering::SeqCst);
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_run_goes_through_every_stage() {
        let runner = BatchRunner::new(FixedPipeline {
            loaded: AtomicBool::new(false),
        });

        let outcome = runner.run().await.unwrap();

        assert!(runner.pipeline.loaded.load(Ordering::SeqCst));
        assert_eq!(outcome.report.fulfilled.len(), 1);
        assert_eq!(outcome.report.missed.len(), 1);
        assert_eq!(outcome.ledger.available("Flour"), 2);
    }
}
