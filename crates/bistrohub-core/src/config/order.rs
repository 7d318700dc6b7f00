//! Order pricing configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Order checkout and pricing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Sales tax rate applied to every order subtotal (e.g. `0.0825`).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
}

impl OrderConfig {
    /// The tax rate as an exact decimal, for pricing arithmetic.
    pub fn tax_rate_decimal(&self) -> Result<Decimal, AppError> {
        Decimal::try_from(self.tax_rate).map_err(|e| {
            AppError::configuration(format!("Invalid tax rate {}: {e}", self.tax_rate))
        })
    }
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
        }
    }
}

fn default_tax_rate() -> f64 {
    0.0825
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tax_rate_converts_exactly() {
        let config = OrderConfig::default();
        let rate = config.tax_rate_decimal().unwrap();
        assert_eq!(rate.to_string(), "0.0825");
    }
}
