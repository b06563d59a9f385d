//! Asset classification constants and validation helpers.

/// Asset must come back when the employee leaves (laptops, monitors, ...).
pub const TYPE_RETURNABLE: &str = "returnable";

/// Asset is consumed or kept by the employee (accessories, swag, ...).
pub const TYPE_NON_RETURNABLE: &str = "non_returnable";

/// All valid asset type values.
pub const VALID_ASSET_TYPES: &[&str] = &[TYPE_RETURNABLE, TYPE_NON_RETURNABLE];

/// Validate that an asset type string is one of the accepted values.
pub fn validate_asset_type(asset_type: &str) -> Result<(), String> {
    if VALID_ASSET_TYPES.contains(&asset_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid asset type '{asset_type}'. Must be one of: {}",
            VALID_ASSET_TYPES.join(", ")
        ))
    }
}

/// Validate a stock quantity. Stock is authoritative and never negative.
pub fn validate_quantity(quantity: i32) -> Result<(), String> {
    if quantity < 0 {
        return Err(format!("Quantity must not be negative (got {quantity})"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_types_accepted() {
        assert!(validate_asset_type(TYPE_RETURNABLE).is_ok());
        assert!(validate_asset_type(TYPE_NON_RETURNABLE).is_ok());
    }

    #[test]
    fn test_invalid_type_rejected() {
        let result = validate_asset_type("leased");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid asset type"));
    }

    #[test]
    fn test_empty_type_rejected() {
        assert!(validate_asset_type("").is_err());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(40).is_ok());
    }
}
