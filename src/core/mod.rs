pub mod batch;
pub mod catalog;
pub mod engine;
pub mod ledger;
pub mod pipeline;

pub use crate::domain::model::{IngredientAmount, InventoryEntry, Order, Recipe, Variant};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
