//! Document totals: discount, GST, withholding and adjustment

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::document::aggregate::{discount_amount, subtotal};
use crate::types::*;
use crate::utils::numeric::{clamp_non_negative, round_currency};

/// Payable totals of a document
///
/// `grand_total = subtotal - discount_amount + tax_total + withholding_amount
/// + manual_adjustment`, with `withholding_amount` negative for TDS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: BigDecimal,
    pub discount_amount: BigDecimal,
    pub total_cgst: BigDecimal,
    pub total_sgst: BigDecimal,
    pub total_igst: BigDecimal,
    pub tax_total: BigDecimal,
    /// Pre-GST discounted value the withholding is charged on
    pub withholding_base: BigDecimal,
    /// Signed withholding: negative for TDS, positive for TCS
    pub withholding_amount: BigDecimal,
    pub manual_adjustment: BigDecimal,
    pub grand_total: BigDecimal,
}

impl DocumentTotals {
    /// Copy of these totals rounded half-up for display
    ///
    /// Components are rounded individually and `grand_total` is summed from
    /// the rounded figures, so the printed totals always add up. It can
    /// differ from the unrounded grand total by a unit in the last place.
    pub fn rounded(&self, scale: i64) -> Self {
        let subtotal = round_currency(&self.subtotal, scale);
        let discount_amount = round_currency(&self.discount_amount, scale);
        let tax_total = round_currency(&self.tax_total, scale);
        let withholding_amount = round_currency(&self.withholding_amount, scale);
        let manual_adjustment = round_currency(&self.manual_adjustment, scale);
        let grand_total =
            &subtotal - &discount_amount + &tax_total + &withholding_amount + &manual_adjustment;

        Self {
            subtotal,
            discount_amount,
            total_cgst: round_currency(&self.total_cgst, scale),
            total_sgst: round_currency(&self.total_sgst, scale),
            total_igst: round_currency(&self.total_igst, scale),
            tax_total,
            withholding_base: round_currency(&self.withholding_base, scale),
            withholding_amount,
            manual_adjustment,
            grand_total,
        }
    }
}

/// Signed withholding for a base amount (TDS negative, TCS positive)
pub fn withholding_amount(base: &BigDecimal, withholding: Option<&Withholding>) -> BigDecimal {
    match withholding {
        Some(w) => {
            let amount = base * clamp_non_negative(&w.rate_percent) / BigDecimal::from(100);
            w.kind.signed(amount)
        }
        None => BigDecimal::zero(),
    }
}

/// Combine line taxes, discount, withholding and adjustment into totals
///
/// Line tax fields are read as left by the last
/// [`recompute`](crate::document::recompute); call that first after any edit.
/// A negative grand total is returned as-is.
pub fn totalize(document: &Document) -> DocumentTotals {
    let subtotal = subtotal(document);
    let discount_amount =
        discount_amount(&subtotal, &document.discount_value, document.discount_mode);

    let total_cgst: BigDecimal = document.line_items.iter().map(|item| &item.cgst).sum();
    let total_sgst: BigDecimal = document.line_items.iter().map(|item| &item.sgst).sum();
    let total_igst: BigDecimal = document.line_items.iter().map(|item| &item.igst).sum();
    let tax_total: BigDecimal = document.line_items.iter().map(|item| &item.tax_amount).sum();

    // Withholding is charged on the discounted value before GST.
    let withholding_base = &subtotal - &discount_amount;
    let withholding_amount = withholding_amount(&withholding_base, document.withholding.as_ref());
    let manual_adjustment = document.manual_adjustment.clone();

    let grand_total =
        &subtotal - &discount_amount + &tax_total + &withholding_amount + &manual_adjustment;

    tracing::debug!(
        subtotal = %subtotal,
        tax_total = %tax_total,
        withholding = %withholding_amount,
        grand_total = %grand_total,
        "totalized document"
    );

    DocumentTotals {
        subtotal,
        discount_amount,
        total_cgst,
        total_sgst,
        total_igst,
        tax_total,
        withholding_base,
        withholding_amount,
        manual_adjustment,
        grand_total,
    }
}
