//! Line-item aggregation: amounts, discount distribution and per-line GST

use bigdecimal::{BigDecimal, Zero};

use crate::config::TaxConfig;
use crate::tax::gst::compute_tax;
use crate::tax::state::{resolve_mode, StateResolution};
use crate::types::*;
use crate::utils::numeric::clamp_non_negative;

/// Amount of a line before discount: the manual override, or quantity × rate
pub fn line_amount(item: &LineItem) -> BigDecimal {
    match &item.amount_override {
        Some(amount) => clamp_non_negative(amount),
        None => clamp_non_negative(&item.quantity) * clamp_non_negative(&item.unit_rate),
    }
}

/// Sum of all line amounts
pub fn subtotal(document: &Document) -> BigDecimal {
    document.line_items.iter().map(line_amount).sum()
}

/// Document-level discount for a given subtotal
pub fn discount_amount(
    subtotal: &BigDecimal,
    value: &BigDecimal,
    mode: DiscountMode,
) -> BigDecimal {
    let value = clamp_non_negative(value);
    match mode {
        DiscountMode::Percentage => subtotal * value / BigDecimal::from(100),
        DiscountMode::Flat => value,
    }
}

/// Share of the discount carried by a line, proportional to its amount
pub fn discount_share(
    discount_amount: &BigDecimal,
    line_amount: &BigDecimal,
    subtotal: &BigDecimal,
) -> BigDecimal {
    if subtotal.is_zero() {
        return BigDecimal::zero();
    }
    discount_amount * line_amount / subtotal
}

/// Rate a line is taxed at, falling back to the configured default
pub fn effective_rate(item: &LineItem, config: &TaxConfig) -> BigDecimal {
    match &item.tax_rate_percent {
        Some(rate) => clamp_non_negative(rate),
        None if item.tax_mode.is_taxable() => config.default_gst_rate_percent.clone(),
        None => BigDecimal::zero(),
    }
}

/// Recompute every derived field on the document's lines
///
/// Reads only the input fields of each line, so running it again on an
/// unchanged document gives identical results. Returns the subtotal.
pub fn recompute(document: &mut Document, config: &TaxConfig) -> BigDecimal {
    let subtotal = subtotal(document);
    let discount = discount_amount(&subtotal, &document.discount_value, document.discount_mode);

    for item in document.line_items.iter_mut() {
        let amount = line_amount(item);
        let share = discount_share(&discount, &amount, &subtotal);
        let taxable_amount = &amount - &share;
        let rate = effective_rate(item, config);

        let breakdown = compute_tax(&taxable_amount, item.tax_mode, &rate);

        item.amount = amount;
        item.discount_share = share;
        item.taxable_amount = taxable_amount;
        item.cgst = breakdown.cgst;
        item.sgst = breakdown.sgst;
        item.igst = breakdown.igst;
        item.tax_amount = breakdown.tax_amount;
    }

    tracing::debug!(
        lines = document.line_items.len(),
        subtotal = %subtotal,
        discount = %discount,
        "recomputed line items"
    );

    subtotal
}

/// Point every GST-bearing line at the mode implied by the place of supply
///
/// Non-taxable and zero-rated lines keep their mode.
pub fn align_tax_modes(document: &mut Document, company: &CompanyProfile) -> StateResolution {
    let place = document.place_of_supply.as_deref().unwrap_or("");
    let resolution = resolve_mode(&company.state_label, place);

    for item in document.line_items.iter_mut() {
        if item.tax_mode.is_taxable() {
            item.tax_mode = resolution.mode;
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(amount: i64, mode: TaxMode) -> LineItem {
        LineItem::new(
            format!("Item {}", amount),
            BigDecimal::from(1),
            BigDecimal::from(amount),
            mode,
            Some(BigDecimal::from(18)),
        )
    }

    #[test]
    fn test_line_amount_override_wins() {
        let mut item = LineItem::new(
            "Widget".to_string(),
            BigDecimal::from(3),
            BigDecimal::from(250),
            TaxMode::Domestic,
            None,
        );
        assert_eq!(line_amount(&item), BigDecimal::from(750));

        item.amount_override = Some(BigDecimal::from(700));
        assert_eq!(line_amount(&item), BigDecimal::from(700));
    }

    #[test]
    fn test_percentage_discount_distribution() {
        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items = vec![line(600, TaxMode::Domestic), line(400, TaxMode::Domestic)];
        document.discount_value = BigDecimal::from(10);
        document.discount_mode = DiscountMode::Percentage;

        let subtotal = recompute(&mut document, &TaxConfig::default());

        assert_eq!(subtotal, BigDecimal::from(1000));
        assert_eq!(document.line_items[0].discount_share, BigDecimal::from(60));
        assert_eq!(document.line_items[1].discount_share, BigDecimal::from(40));
        assert_eq!(document.line_items[0].taxable_amount, BigDecimal::from(540));
        assert_eq!(document.line_items[1].taxable_amount, BigDecimal::from(360));
    }

    #[test]
    fn test_discount_shares_sum_to_discount() {
        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items = vec![
            line(333, TaxMode::Domestic),
            line(333, TaxMode::InterState),
            line(334, TaxMode::NonTaxable),
            line(7, TaxMode::ZeroRated),
        ];
        document.discount_value = BigDecimal::from(100);
        document.discount_mode = DiscountMode::Flat;

        recompute(&mut document, &TaxConfig::default());

        let total_share: BigDecimal = document.line_items.iter().map(|i| &i.discount_share).sum();
        let drift = (total_share - BigDecimal::from(100)).abs();
        assert!(drift < BigDecimal::from_str("0.000001").unwrap());
    }

    #[test]
    fn test_zero_subtotal_with_flat_discount() {
        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items = vec![line(0, TaxMode::Domestic), line(0, TaxMode::InterState)];
        document.discount_value = BigDecimal::from(50);
        document.discount_mode = DiscountMode::Flat;

        let subtotal = recompute(&mut document, &TaxConfig::default());

        assert!(subtotal.is_zero());
        for item in &document.line_items {
            assert!(item.discount_share.is_zero());
            assert!(item.tax_amount.is_zero());
        }
    }

    #[test]
    fn test_empty_document() {
        let mut document = Document::sales_order("Acme Traders".to_string());
        document.discount_value = BigDecimal::from(25);
        document.discount_mode = DiscountMode::Flat;

        assert!(recompute(&mut document, &TaxConfig::default()).is_zero());
    }

    #[test]
    fn test_default_rate_applies_to_taxable_lines_only() {
        let config = TaxConfig::default();
        let taxable = LineItem::new(
            "Service".to_string(),
            BigDecimal::from(1),
            BigDecimal::from(100),
            TaxMode::InterState,
            None,
        );
        let exempt = LineItem::new(
            "Export".to_string(),
            BigDecimal::from(1),
            BigDecimal::from(100),
            TaxMode::ZeroRated,
            None,
        );

        assert_eq!(effective_rate(&taxable, &config), BigDecimal::from(18));
        assert!(effective_rate(&exempt, &config).is_zero());

        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items = vec![taxable, exempt];
        recompute(&mut document, &config);

        assert_eq!(document.line_items[0].igst, BigDecimal::from(18));
        assert!(document.line_items[1].tax_amount.is_zero());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items = vec![line(123, TaxMode::Domestic), line(877, TaxMode::InterState)];
        document.discount_value = BigDecimal::from_str("7.5").unwrap();

        let config = TaxConfig::default();
        recompute(&mut document, &config);
        let first = serde_json::to_string(&document).unwrap();
        recompute(&mut document, &config);
        let second = serde_json::to_string(&document).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_inputs_are_clamped() {
        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items = vec![LineItem::new(
            "Refund row".to_string(),
            BigDecimal::from(-2),
            BigDecimal::from(100),
            TaxMode::Domestic,
            None,
        )];

        let subtotal = recompute(&mut document, &TaxConfig::default());
        assert!(subtotal.is_zero());
        assert!(document.line_items[0].amount.is_zero());
    }

    #[test]
    fn test_align_tax_modes() {
        let company =
            CompanyProfile::new("RoboBooks Pvt Ltd".to_string(), "29-Karnataka".to_string());
        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items = vec![line(100, TaxMode::Domestic), line(100, TaxMode::ZeroRated)];
        document.place_of_supply = Some("Maharashtra".to_string());

        let resolution = align_tax_modes(&mut document, &company);

        assert!(!resolution.is_intra_state);
        assert_eq!(document.line_items[0].tax_mode, TaxMode::InterState);
        assert_eq!(document.line_items[1].tax_mode, TaxMode::ZeroRated);

        document.place_of_supply = None;
        align_tax_modes(&mut document, &company);
        assert_eq!(document.line_items[0].tax_mode, TaxMode::Domestic);
    }
}
