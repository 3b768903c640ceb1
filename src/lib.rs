pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::StoreConfig;

pub use adapters::storage::LocalStorage;
pub use app::menu::{Menu, MenuAction};
pub use app::report::ReportKind;
pub use core::{
    batch::{BatchOutcome, BatchRunner, StoreInputs},
    catalog::RecipeCatalog,
    engine::{FulfillmentEngine, FulfillmentReport},
    ledger::{InventoryLedger, StockError},
    pipeline::FilePipeline,
};
pub use utils::error::{Result, StoreError};
