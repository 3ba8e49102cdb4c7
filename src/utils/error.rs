use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Invalid selection: {selection} (menu has {catalog_len} items)")]
    InvalidSelection { selection: i64, catalog_len: usize },

    #[error("Invalid quantity: {quantity} (must be between 1 and {max})")]
    InvalidQuantity { quantity: i64, max: u32 },

    #[error("Could not read {field} from input '{input}'")]
    InputParseError { field: String, input: String },

    #[error("Number '{input}' is out of range for {field}")]
    NumberOutOfRange { field: String, input: String },

    #[error("Amount overflow while computing {context}")]
    AmountOverflow { context: String },

    #[error("Invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },

    #[error("Invalid configuration value for '{field}': '{value}' - {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShopError::InvalidSelection { .. }
            | ShopError::InvalidQuantity { .. }
            | ShopError::InputParseError { .. }
            | ShopError::NumberOutOfRange { .. }
            | ShopError::AmountOverflow { .. } => ErrorCategory::Input,
            ShopError::InvalidPrice { .. }
            | ShopError::InvalidConfigValue { .. }
            | ShopError::ConfigParse { .. } => ErrorCategory::Configuration,
            ShopError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Input errors are reported to the operator and the loop carries on.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// Message shown to the operator at the prompt.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ShopError::InvalidSelection { .. } => "Invalid selection.".to_string(),
            ShopError::InvalidQuantity { max, .. } => {
                format!("Invalid quantity. Please enter a number from 1 to {}.", max)
            }
            ShopError::InputParseError { field, input } => {
                format!("'{}' is not a valid {}. Please enter a whole number.", input, field)
            }
            ShopError::NumberOutOfRange { field, input } => {
                format!("'{}' is out of range for a {}.", input, field)
            }
            ShopError::AmountOverflow { .. } => {
                "That order is too large to total. Please try a smaller quantity.".to_string()
            }
            ShopError::InvalidPrice { value, .. } => format!("Menu price '{}' is invalid.", value),
            ShopError::InvalidConfigValue { field, .. } => {
                format!("Configuration value '{}' is invalid.", field)
            }
            ShopError::ConfigParse { .. } => "The menu file could not be read.".to_string(),
            ShopError::Io(_) => "Lost connection to the terminal.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ShopError::InvalidSelection { catalog_len, .. } => {
                format!("Choose a menu number between 1 and {}", catalog_len)
            }
            ShopError::InvalidQuantity { max, .. } => {
                format!("Order between 1 and {} cups at a time", max)
            }
            ShopError::InputParseError { .. } => "Type digits only, e.g. 2".to_string(),
            ShopError::NumberOutOfRange { .. } => "Enter a small number, e.g. 2".to_string(),
            ShopError::AmountOverflow { .. } => "Split the order into smaller ones".to_string(),
            ShopError::InvalidPrice { .. } => {
                "Write prices as decimal strings with at most two fractional digits, e.g. \"3.50\""
                    .to_string()
            }
            ShopError::InvalidConfigValue { .. } | ShopError::ConfigParse { .. } => {
                "Check the menu file and command-line flags".to_string()
            }
            ShopError::Io(_) => "Restart the program from an interactive terminal".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShopError>;
