use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Error reading inventory file '{path}': {source}")]
    InventoryLoadError {
        path: String,
        #[source]
        source: Box<StoreError>,
    },

    #[error("Error reading recipe file '{path}': {source}")]
    RecipeLoadError {
        path: String,
        #[source]
        source: Box<StoreError>,
    },

    #[error("Error reading order file '{path}': {source}")]
    OrderLoadError {
        path: String,
        #[source]
        source: Box<StoreError>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputData,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::IoError(e) => e.kind() == std::io::ErrorKind::NotFound,
            StoreError::InventoryLoadError { source, .. }
            | StoreError::RecipeLoadError { source, .. }
            | StoreError::OrderLoadError { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::ConfigError { .. }
            | StoreError::ConfigValidationError { .. }
            | StoreError::InvalidConfigValueError { .. }
            | StoreError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StoreError::InventoryLoadError { .. }
            | StoreError::RecipeLoadError { .. }
            | StoreError::OrderLoadError { .. }
            | StoreError::CsvError(_) => ErrorCategory::InputData,
            StoreError::IoError(_) | StoreError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::InputData => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::InventoryLoadError { path, .. } => {
                format!("Could not load the inventory from '{}'", path)
            }
            StoreError::RecipeLoadError { path, .. } => {
                format!("Could not load the recipes from '{}'", path)
            }
            StoreError::OrderLoadError { path, .. } => {
                format!("Could not load the orders from '{}'", path)
            }
            StoreError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::InventoryLoadError { source, .. }
            | StoreError::RecipeLoadError { source, .. }
            | StoreError::OrderLoadError { source, .. }
                if matches!(**source, StoreError::CsvError(_)) =>
            {
                "Save the file as UTF-8 text"
            }
            StoreError::InventoryLoadError { .. }
            | StoreError::RecipeLoadError { .. }
            | StoreError::OrderLoadError { .. } => {
                "Check that the file exists under the data directory and is readable"
            }
            StoreError::ConfigError { .. } | StoreError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            StoreError::InvalidConfigValueError { .. } | StoreError::MissingConfigError { .. } => {
                "Fix the reported setting on the command line or in the config file"
            }
            StoreError::CsvError(_) => "Check the input file for invalid characters",
            StoreError::IoError(_) | StoreError::SerializationError(_) => {
                "Check that the export directory is writable"
            }
        }
    }
}
