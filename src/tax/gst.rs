//! GST (Goods and Services Tax) calculation for Indian tax compliance

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::types::{DocumentError, DocumentResult, TaxMode};
use crate::utils::numeric::clamp_non_negative;

/// GST split for one taxable amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Central GST (intra-state only)
    pub cgst: BigDecimal,
    /// State GST (intra-state only)
    pub sgst: BigDecimal,
    /// Integrated GST (inter-state only)
    pub igst: BigDecimal,
    /// Total GST (CGST + SGST + IGST)
    pub tax_amount: BigDecimal,
}

impl TaxBreakdown {
    /// Breakdown with every component zero
    pub fn zero() -> Self {
        Self {
            cgst: BigDecimal::zero(),
            sgst: BigDecimal::zero(),
            igst: BigDecimal::zero(),
            tax_amount: BigDecimal::zero(),
        }
    }

    /// Split a GST-inclusive amount into its base and breakdown
    ///
    /// Returns `(base_amount, breakdown)`. Untaxed modes return the amount
    /// unchanged as the base.
    pub fn reverse(
        inclusive_amount: &BigDecimal,
        mode: TaxMode,
        rate_percent: &BigDecimal,
    ) -> (BigDecimal, Self) {
        let inclusive_amount = clamp_non_negative(inclusive_amount);
        let rate = clamp_non_negative(rate_percent);

        if !mode.is_taxable() || rate.is_zero() {
            return (inclusive_amount, Self::zero());
        }

        let divisor = BigDecimal::from(100) + &rate;
        let base_amount = (&inclusive_amount * BigDecimal::from(100)) / divisor;
        let breakdown = compute_tax(&base_amount, mode, &rate);

        (base_amount, breakdown)
    }

    /// Check the structural rules of a breakdown
    pub fn validate(&self) -> DocumentResult<()> {
        let calculated_total = &self.cgst + &self.sgst + &self.igst;

        if calculated_total != self.tax_amount {
            return Err(DocumentError::InvalidTax(format!(
                "GST components don't add up to tax amount: {} != {}",
                calculated_total, self.tax_amount
            )));
        }

        if self.cgst != self.sgst {
            return Err(DocumentError::InvalidTax(
                "CGST and SGST must be equal for intra-state supplies".to_string(),
            ));
        }

        if !self.igst.is_zero() && !self.cgst.is_zero() {
            return Err(DocumentError::InvalidTax(
                "Only IGST should be applicable for inter-state supplies".to_string(),
            ));
        }

        Ok(())
    }
}

/// Compute the GST breakdown for a taxable amount
///
/// Negative inputs are clamped to zero. Non-taxable and zero-rated supplies
/// always produce an all-zero breakdown.
pub fn compute_tax(
    taxable_amount: &BigDecimal,
    mode: TaxMode,
    rate_percent: &BigDecimal,
) -> TaxBreakdown {
    let amount = clamp_non_negative(taxable_amount);
    let rate = clamp_non_negative(rate_percent);

    if amount.is_zero() {
        return TaxBreakdown::zero();
    }

    match mode {
        TaxMode::NonTaxable | TaxMode::ZeroRated => TaxBreakdown::zero(),
        TaxMode::Domestic => {
            let half = &amount * &rate / BigDecimal::from(100) / BigDecimal::from(2);
            let tax_amount = &half * BigDecimal::from(2);
            TaxBreakdown {
                cgst: half.clone(),
                sgst: half,
                igst: BigDecimal::zero(),
                tax_amount,
            }
        }
        TaxMode::InterState => {
            let full = &amount * &rate / BigDecimal::from(100);
            TaxBreakdown {
                cgst: BigDecimal::zero(),
                sgst: BigDecimal::zero(),
                igst: full.clone(),
                tax_amount: full,
            }
        }
    }
}

/// Standard GST rate slabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GstSlab {
    /// Exempt / nil-rated items - 0%
    Nil,
    /// Essential goods - 5%
    Reduced,
    /// Standard rate items - 12%
    Standard,
    /// Most services - 18%
    Higher,
    /// Luxury/Sin goods - 28%
    Luxury,
}

impl GstSlab {
    /// All slabs in ascending order of rate
    pub const ALL: [GstSlab; 5] = [
        GstSlab::Nil,
        GstSlab::Reduced,
        GstSlab::Standard,
        GstSlab::Higher,
        GstSlab::Luxury,
    ];

    /// Rate percentage of this slab
    pub fn rate(&self) -> BigDecimal {
        match self {
            GstSlab::Nil => BigDecimal::from(0),
            GstSlab::Reduced => BigDecimal::from(5),
            GstSlab::Standard => BigDecimal::from(12),
            GstSlab::Higher => BigDecimal::from(18),
            GstSlab::Luxury => BigDecimal::from(28),
        }
    }

    /// Find the slab matching a rate, if it is a standard one
    pub fn from_rate(rate_percent: &BigDecimal) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|slab| slab.rate() == *rate_percent)
    }
}
