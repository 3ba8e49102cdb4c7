use crate::adapters::InMemoryCatalog;
use crate::domain::MenuItem;
use crate::utils::error::{Result, ShopError};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SHOP_NAME: &str = "Java Coffee Shop";

/// Menu definition loaded from TOML.
///
/// ```toml
/// [shop]
/// name = "Corner Cafe"
///
/// [[items]]
/// name = "Latte"
/// price = "3.50"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFile {
    pub shop: Option<ShopSection>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSection {
    pub name: Option<String>,
}

impl MenuFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ShopError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn shop_name(&self) -> &str {
        self.shop
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or(DEFAULT_SHOP_NAME)
    }

    pub fn into_catalog(self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.items)
    }
}

impl Validate for MenuFile {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.shop.as_ref().and_then(|s| s.name.as_deref()) {
            validate_non_empty_string("shop.name", name)?;
        }
        validate_non_empty_list("items", &self.items)?;
        for (i, item) in self.items.iter().enumerate() {
            validate_non_empty_string(&format!("items[{}].name", i), &item.name)?;
        }
        Ok(())
    }
}
