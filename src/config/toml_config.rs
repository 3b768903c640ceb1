use crate::core::ConfigProvider;
use crate::domain::ports::{
    DEFAULT_INVENTORY_FILE, DEFAULT_ORDER_FILE, DEFAULT_RECIPE_FILE, DEFAULT_STORE_NAME,
};
use crate::utils::error::{Result, StoreError};
use crate::utils::validation::{
    validate_log_level, validate_non_empty_string, validate_path, validate_required_field,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: Option<StoreInfo>,
    #[serde(default)]
    pub files: FilesConfig,
    pub export: Option<ExportConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    pub data_dir: Option<String>,
    pub inventory: Option<String>,
    pub recipes: Option<String>,
    pub orders: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub enabled: Option<bool>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl StoreConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StoreError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BAKERY_DATA})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StoreError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Command-line file flags take precedence over the file.
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        let files = &mut self.files;
        for (target, value) in [
            (&mut files.data_dir, &cli.data_dir),
            (&mut files.inventory, &cli.inventory),
            (&mut files.recipes, &cli.recipes),
            (&mut files.orders, &cli.orders),
        ] {
            if let Some(value) = value {
                *target = Some(value.clone());
            }
        }

        if let Some(dir) = &cli.export_dir {
            self.export = Some(ExportConfig {
                enabled: Some(true),
                output_path: Some(dir.clone()),
            });
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn export_enabled(&self) -> bool {
        self.export
            .as_ref()
            .map(|e| e.enabled.unwrap_or(true))
            .unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(store) = &self.store {
            validate_non_empty_string("store.name", &store.name)?;
        }

        validate_path("files.data_dir", self.data_dir())?;
        validate_path("files.inventory", self.inventory_file())?;
        validate_path("files.recipes", self.recipe_file())?;
        validate_path("files.orders", self.order_file())?;

        if let Some(export) = self.export.as_ref().filter(|_| self.export_enabled()) {
            let output_path = validate_required_field("export.output_path", &export.output_path)?;
            validate_path("export.output_path", output_path)?;
        }

        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}

impl ConfigProvider for StoreConfig {
    fn store_name(&self) -> &str {
        self.store
            .as_ref()
            .map(|s| s.name.as_str())
            .unwrap_or(DEFAULT_STORE_NAME)
    }

    fn data_dir(&self) -> &str {
        self.files.data_dir.as_deref().unwrap_or(".")
    }

    fn inventory_file(&self) -> &str {
        self.files.inventory.as_deref().unwrap_or(DEFAULT_INVENTORY_FILE)
    }

    fn recipe_file(&self) -> &str {
        self.files.recipes.as_deref().unwrap_or(DEFAULT_RECIPE_FILE)
    }

    fn order_file(&self) -> &str {
        self.files.orders.as_deref().unwrap_or(DEFAULT_ORDER_FILE)
    }

    fn export_path(&self) -> Option<&str> {
        if !self.export_enabled() {
            return None;
        }
        self.export.as_ref().and_then(|e| e.output_path.as_deref())
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
