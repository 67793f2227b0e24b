//! Tax engine configuration

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{DocumentError, DocumentResult};

/// Standard GST rate applied to taxable lines that carry no rate of their own
pub const DEFAULT_GST_RATE_PERCENT: u32 = 18;

/// Decimal places used when totals are rounded for display
pub const DEFAULT_CURRENCY_SCALE: i64 = 2;

/// Jurisdiction-level settings for the calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// Rate used for Domestic/InterState lines without an explicit rate
    pub default_gst_rate_percent: BigDecimal,
    /// Decimal places for rounded totals
    pub currency_scale: i64,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            default_gst_rate_percent: BigDecimal::from(DEFAULT_GST_RATE_PERCENT),
            currency_scale: DEFAULT_CURRENCY_SCALE,
        }
    }
}

impl TaxConfig {
    /// Load configuration from a JSON document; missing keys take defaults
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| DocumentError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the calculation cannot use
    pub fn validate(&self) -> DocumentResult<()> {
        if self.default_gst_rate_percent < BigDecimal::from(0) {
            return Err(DocumentError::Config(
                "Default GST rate cannot be negative".to_string(),
            ));
        }

        if !(0..=6).contains(&self.currency_scale) {
            return Err(DocumentError::Config(format!(
                "Currency scale must be between 0 and 6, got {}",
                self.currency_scale
            )));
        }

        Ok(())
    }
}
