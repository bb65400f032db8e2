//! Field-level checks shared by the entity modules.

use crate::errors::ModelError;

/// A required text field must contain something other than whitespace.
pub fn required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub fn non_negative_i32(field: &str, value: i32) -> Result<(), ModelError> {
    if value < 0 {
        return Err(ModelError::validation(format!("{field} must be >= 0")));
    }
    Ok(())
}

pub fn non_negative_f64(field: &str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::validation(format!("{field} must be a finite number >= 0")));
    }
    Ok(())
}

pub fn finite(field: &str, value: f64) -> Result<(), ModelError> {
    if !value.is_finite() {
        return Err(ModelError::validation(format!("{field} must be a finite number")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_rejected() {
        assert!(required("address", "   ").is_err());
        assert!(required("address", "Av. Siempre Viva 742").is_ok());
    }

    #[test]
    fn zero_is_a_valid_quantity() {
        assert!(non_negative_i32("current_quantity", 0).is_ok());
        assert!(non_negative_i32("current_quantity", -1).is_err());
    }

    #[test]
    fn nan_prices_are_rejected() {
        assert!(non_negative_f64("sale_price", f64::NAN).is_err());
        assert!(non_negative_f64("sale_price", 0.0).is_ok());
        assert!(finite("minimum_temperature", -18.5).is_ok());
    }
}
