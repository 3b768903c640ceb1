use crate::app::report::ReportKind;
use crate::core::ConfigProvider;
use crate::domain::ports::{
    DEFAULT_INVENTORY_FILE, DEFAULT_ORDER_FILE, DEFAULT_RECIPE_FILE, DEFAULT_STORE_NAME,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "bundt-store")]
#[command(about = "Fulfil a batch of bundt cake orders and report on sales and inventory")]
pub struct CliConfig {
    /// Directory the input files are read from
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Inventory file (IngredientName,Quantity,UnitCost)
    #[arg(long)]
    pub inventory: Option<String>,

    /// Recipe file (Name,Price,Ingredient1,Qty1,...)
    #[arg(long)]
    pub recipes: Option<String>,

    /// Order file (CustomerName,CakeType,Quantity)
    #[arg(long)]
    pub orders: Option<String>,

    /// Write result snapshots to this directory
    #[arg(long)]
    pub export_dir: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print a report and exit instead of opening the menu
    #[arg(long, value_enum)]
    pub report: Option<ReportKind>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn store_name(&self) -> &str {
        DEFAULT_STORE_NAME
    }

    fn data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(".")
    }

    fn inventory_file(&self) -> &str {
        self.inventory.as_deref().unwrap_or(DEFAULT_INVENTORY_FILE)
    }

    fn recipe_file(&self) -> &str {
        self.recipes.as_deref().unwrap_or(DEFAULT_RECIPE_FILE)
    }

    fn order_file(&self) -> &str {
        self.orders.as_deref().unwrap_or(DEFAULT_ORDER_FILE)
    }

    fn export_path(&self) -> Option<&str> {
        self.export_dir.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("--data-dir", self.data_dir())?;
        validate_path("--inventory", self.inventory_file())?;
        validate_path("--recipes", self.recipe_file())?;
        validate_path("--orders", self.order_file())?;
        if let Some(export) = self.export_path() {
            validate_path("--export-dir", export)?;
        }
        Ok(())
    }
}
