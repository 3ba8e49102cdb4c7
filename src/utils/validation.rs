use crate::utils::error::{Result, ShopError};
use std::num::IntErrorKind;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShopError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShopError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(ShopError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShopError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(ShopError::InvalidConfigValue {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

/// Parses one line of operator input as a signed integer.
pub fn parse_integer(field_name: &str, input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ShopError::NumberOutOfRange {
            field: field_name.to_string(),
            input: trimmed.to_string(),
        },
        _ => ShopError::InputParseError {
            field: field_name.to_string(),
            input: trimmed.to_string(),
        },
    })
}

/// Checks that `quantity` lies in `[1, max]` and narrows it.
pub fn validate_quantity(quantity: i64, max: u32) -> Result<u32> {
    if quantity < 1 || quantity > i64::from(max) {
        return Err(ShopError::InvalidQuantity { quantity, max });
    }
    u32::try_from(quantity).map_err(|_| ShopError::InvalidQuantity { quantity, max })
}
