use crate::core::batch::{BatchOutcome, StoreInputs};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_STORE_NAME: &str = "Bundt Cake Empire";
pub const DEFAULT_INVENTORY_FILE: &str = "bundt_inventory.txt";
pub const DEFAULT_RECIPE_FILE: &str = "bundt_recipes.txt";
pub const DEFAULT_ORDER_FILE: &str = "bundt_orders.txt";

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn store_name(&self) -> &str;
    fn data_dir(&self) -> &str;
    fn inventory_file(&self) -> &str;
    fn recipe_file(&self) -> &str;
    fn order_file(&self) -> &str;
    /// Directory for result snapshots; `None` disables export.
    fn export_path(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<StoreInputs>;
    async fn transform(&self, inputs: StoreInputs) -> Result<BatchOutcome>;
    async fn load(&self, outcome: &BatchOutcome) -> Result<Option<String>>;
}
