use crate::adapters::inventory_file::{parse_inventory, write_inventory};
use crate::adapters::order_file::parse_orders;
use crate::adapters::recipe_file::parse_recipes;
use crate::app::export::{
    fulfilled_csv, missed_csv, summary_json, SalesSummary, FULFILLED_FILE, INVENTORY_FILE,
    MISSED_FILE, SUMMARY_FILE,
};
use crate::core::batch::{BatchOutcome, StoreInputs};
use crate::core::engine::FulfillmentEngine;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::{Result, StoreError};

/// Reads the three flat files from `storage` and, when an export storage is
/// attached, writes result snapshots to it.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    export: Option<S>,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            export: None,
            config,
        }
    }

    pub fn with_export(mut self, storage: S) -> Self {
        self.export = Some(storage);
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    async fn extract(&self) -> Result<StoreInputs> {
        let inventory_path = self.config.inventory_file();
        tracing::debug!("Reading inventory from: {}", inventory_path);
        let ledger = self
            .storage
            .read_file(inventory_path)
            .await
            .and_then(|data| parse_inventory(&data))
            .map_err(|e| StoreError::InventoryLoadError {
                path: inventory_path.to_string(),
                source: Box::new(e),
            })?;

        let recipe_path = self.config.recipe_file();
        tracing::debug!("Reading recipes from: {}", recipe_path);
        let catalog = self
            .storage
            .read_file(recipe_path)
            .await
            .and_then(|data| parse_recipes(&data))
            .map_err(|e| StoreError::RecipeLoadError {
                path: recipe_path.to_string(),
                source: Box::new(e),
            })?;

        let order_path = self.config.order_file();
        tracing::debug!("Reading orders from: {}", order_path);
        let orders = match self.storage.read_file(order_path).await {
            Ok(data) => parse_orders(&data).map_err(|e| StoreError::OrderLoadError {
                path: order_path.to_string(),
                source: Box::new(e),
            })?,
            Err(e) if e.is_not_found() => {
                tracing::warn!("File not found: {}", order_path);
                Vec::new()
            }
            Err(e) => {
                return Err(StoreError::OrderLoadError {
                    path: order_path.to_string(),
                    source: Box::new(e),
                })
            }
        };

        Ok(StoreInputs {
            catalog,
            ledger,
            orders,
        })
    }

    async fn transform(&self, inputs: StoreInputs) -> Result<BatchOutcome> {
        let StoreInputs {
            catalog,
            mut ledger,
            orders,
        } = inputs;

        let report = FulfillmentEngine::new(&catalog, &mut ledger).run(&orders);

        Ok(BatchOutcome {
            store_name: self.config.store_name().to_string(),
            catalog,
            ledger,
            report,
        })
    }

    async fn load(&self, outcome: &BatchOutcome) -> Result<Option<String>> {
        let (Some(export), Some(path)) = (&self.export, self.config.export_path()) else {
            return Ok(None);
        };

        tracing::debug!("Exporting results to {}", path);
        export
            .write_file(FULFILLED_FILE, &fulfilled_csv(&outcome.report)?)
            .await?;
        export
            .write_file(MISSED_FILE, &missed_csv(&outcome.report)?)
            .await?;
        export
            .write_file(INVENTORY_FILE, &write_inventory(&outcome.ledger)?)
            .await?;
        let summary = SalesSummary::from_outcome(outcome);
        export
            .write_file(SUMMARY_FILE, &summary_json(&summary)?)
            .await?;

        Ok(Some(path.to_string()))
    }
}
