//! Validation utilities

use bigdecimal::BigDecimal;

use crate::document::aggregate::{discount_amount, subtotal};
use crate::tax::state::state_label_for;
use crate::traits::*;
use crate::types::*;

/// Validate that the customer name is present and of sane length
pub fn validate_customer_name(name: &str) -> DocumentResult<()> {
    if name.trim().is_empty() {
        return Err(DocumentError::Validation(
            "Customer name cannot be empty".to_string(),
        ));
    }

    if name.chars().count() > 100 {
        return Err(DocumentError::Validation(
            "Customer name cannot exceed 100 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate that an explicit place of supply names a known GST state
pub fn validate_place_of_supply(place: Option<&str>) -> DocumentResult<()> {
    match place {
        None => Ok(()),
        Some(place) if state_label_for(place).is_some() => Ok(()),
        Some(place) => Err(DocumentError::Validation(format!(
            "Unknown place of supply: {}",
            place
        ))),
    }
}

/// Validate that a percentage lies within 0..=100
pub fn validate_percentage(label: &str, value: &BigDecimal) -> DocumentResult<()> {
    if *value < BigDecimal::from(0) || *value > BigDecimal::from(100) {
        return Err(DocumentError::Validation(format!(
            "{} must be between 0 and 100, got {}",
            label, value
        )));
    }
    Ok(())
}

/// Validate that the discount does not exceed what it is taken from
pub fn validate_discount(document: &Document) -> DocumentResult<()> {
    match document.discount_mode {
        DiscountMode::Percentage => validate_percentage("Discount", &document.discount_value),
        DiscountMode::Flat => {
            let subtotal = subtotal(document);
            let discount =
                discount_amount(&subtotal, &document.discount_value, document.discount_mode);
            if discount > subtotal {
                return Err(DocumentError::Validation(format!(
                    "Discount {} exceeds subtotal {}",
                    discount, subtotal
                )));
            }
            Ok(())
        }
    }
}

/// Strict validator used before a document is submitted for persistence
pub struct StrictDocumentValidator;

impl DocumentValidator for StrictDocumentValidator {
    fn validate_document(&self, document: &Document) -> DocumentResult<()> {
        // Basic validation
        DefaultDocumentValidator.validate_document(document)?;

        validate_customer_name(&document.customer_name)?;
        validate_place_of_supply(document.place_of_supply.as_deref())?;
        validate_discount(document)?;

        for item in &document.line_items {
            if let Some(rate) = &item.tax_rate_percent {
                validate_percentage("GST rate", rate)?;
            }
        }

        if let Some(withholding) = &document.withholding {
            validate_percentage("Withholding rate", &withholding.rate_percent)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_document() -> Document {
        let mut document = Document::invoice("Acme Traders".to_string());
        document.line_items.push(LineItem::with_amount(
            "Consulting".to_string(),
            BigDecimal::from(1000),
            TaxMode::Domestic,
            None,
        ));
        document
    }

    #[test]
    fn test_default_validator() {
        assert!(DefaultDocumentValidator.validate_document(&valid_document()).is_ok());

        let empty = Document::invoice("Acme Traders".to_string());
        assert!(DefaultDocumentValidator.validate_document(&empty).is_err());

        let mut zero_line = valid_document();
        zero_line.line_items[0].amount_override = Some(BigDecimal::from(0));
        assert!(DefaultDocumentValidator.validate_document(&zero_line).is_err());
    }

    #[test]
    fn test_strict_validator_accepts_valid() {
        let mut document = valid_document();
        document.place_of_supply = Some("tamil nadu".to_string());
        document.withholding = Some(Withholding::tds(BigDecimal::from(2)));
        assert!(StrictDocumentValidator.validate_document(&document).is_ok());
    }

    #[test]
    fn test_strict_validator_rejections() {
        let mut document = valid_document();
        document.customer_name = "   ".to_string();
        assert!(StrictDocumentValidator.validate_document(&document).is_err());

        let mut document = valid_document();
        document.place_of_supply = Some("Narnia".to_string());
        assert!(StrictDocumentValidator.validate_document(&document).is_err());

        let mut document = valid_document();
        document.discount_mode = DiscountMode::Flat;
        document.discount_value = BigDecimal::from(1500);
        assert!(StrictDocumentValidator.validate_document(&document).is_err());

        let mut document = valid_document();
        document.discount_value = BigDecimal::from(120);
        assert!(StrictDocumentValidator.validate_document(&document).is_err());

        let mut document = valid_document();
        document.withholding = Some(Withholding::tcs(BigDecimal::from(101)));
        assert!(StrictDocumentValidator.validate_document(&document).is_err());
    }

    #[test]
    fn test_customer_name_length_counts_characters() {
        let hindi = "अ".repeat(100);
        assert!(validate_customer_name(&hindi).is_ok());

        let too_long = "अ".repeat(101);
        assert!(validate_customer_name(&too_long).is_err());
    }
}
