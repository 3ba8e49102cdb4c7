use crate::domain::money::Money;
use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};

/// A purchasable drink. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: Money,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// One menu item plus the quantity requested for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    item: MenuItem,
    quantity: u32,
    line_total: Money,
}

impl LineItem {
    /// Fails when `unit_price * quantity` does not fit in `Money`.
    pub fn new(item: MenuItem, quantity: u32) -> Result<Self> {
        let line_total = item.unit_price.checked_mul(quantity).ok_or_else(|| {
            ShopError::AmountOverflow {
                context: format!("{} x {}", quantity, item.name),
            }
        })?;
        Ok(Self {
            item,
            quantity,
            line_total,
        })
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn unit_price(&self) -> Money {
        self.item.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.line_total
    }
}
