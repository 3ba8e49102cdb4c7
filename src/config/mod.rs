pub mod menu_file;

pub use menu_file::MenuFile;

#[cfg(feature = "cli")]
use crate::core::DEFAULT_MAX_QUANTITY;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "brew-cart")]
#[command(about = "Order coffee from the terminal")]
pub struct CliConfig {
    /// Customer name; skips the name prompt
    #[arg(long)]
    pub name: Option<String>,

    /// TOML file replacing the default menu
    #[arg(long)]
    pub menu: Option<String>,

    #[arg(long, default_value_t = DEFAULT_MAX_QUANTITY)]
    pub max_quantity: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("max_quantity", self.max_quantity, 1)?;
        if let Some(menu) = &self.menu {
            validate_path("menu", menu)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["brew-cart"]);
        assert_eq!(config.max_quantity, DEFAULT_MAX_QUANTITY);
        assert!(config.name.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_quantity_rejected() {
        let config = CliConfig::parse_from(["brew-cart", "--max-quantity", "0", "--name", "Ann"]);
        assert_eq!(config.name.as_deref(), Some("Ann"));
        assert!(config.validate().is_err());
    }
}
