//! Draft editing with recomputation after every change

use bigdecimal::BigDecimal;

use crate::config::TaxConfig;
use crate::document::aggregate::{align_tax_modes, recompute};
use crate::tax::state::{resolve_mode, StateResolution};
use crate::document::totals::{totalize, DocumentTotals};
use crate::types::*;
use crate::utils::numeric::{to_decimal, to_non_negative_decimal};

/// Holds a draft being edited and keeps its derived fields current
///
/// Every setter leaves the document fully recomputed, so [`totals`] can be
/// read at any point. Numeric setters take the raw form text.
///
/// [`totals`]: DocumentEditor::totals
#[derive(Debug, Clone)]
pub struct DocumentEditor {
    document: Document,
    company: CompanyProfile,
    config: TaxConfig,
}

impl DocumentEditor {
    /// Start editing a draft for the given seller
    ///
    /// Line modes of a reloaded draft are kept as stored; only derived
    /// fields are recomputed.
    pub fn new(document: Document, company: CompanyProfile, config: TaxConfig) -> Self {
        let mut editor = Self {
            document,
            company,
            config,
        };
        editor.refresh();
        editor
    }

    /// Current state of the draft
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    /// Finish editing and take the draft
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Totals for the current state
    pub fn totals(&self) -> DocumentTotals {
        totalize(&self.document)
    }

    /// Seller vs buyer state comparison for the current place of supply
    pub fn resolution(&self) -> StateResolution {
        let place = self.document.place_of_supply.as_deref().unwrap_or("");
        resolve_mode(&self.company.state_label, place)
    }

    /// Append a row; a GST-bearing row takes the mode of the place of supply
    ///
    /// Existing rows keep their modes, including ones set by hand.
    pub fn add_line(&mut self, mut item: LineItem) {
        if item.tax_mode.is_taxable() {
            item.tax_mode = self.resolution().mode;
        }
        self.document.line_items.push(item);
        self.refresh();
    }

    /// Remove a row, returning it
    pub fn remove_line(&mut self, index: usize) -> DocumentResult<LineItem> {
        self.check_index(index)?;
        let removed = self.document.line_items.remove(index);
        self.refresh();
        Ok(removed)
    }

    pub fn set_description(&mut self, index: usize, description: String) -> DocumentResult<()> {
        self.line_mut(index)?.description = description;
        Ok(())
    }

    pub fn set_quantity(&mut self, index: usize, input: &str) -> DocumentResult<()> {
        self.line_mut(index)?.quantity = to_non_negative_decimal(input);
        self.refresh();
        Ok(())
    }

    pub fn set_unit_rate(&mut self, index: usize, input: &str) -> DocumentResult<()> {
        self.line_mut(index)?.unit_rate = to_non_negative_decimal(input);
        self.refresh();
        Ok(())
    }

    /// Enter a line amount by hand; `None` goes back to quantity × rate
    pub fn override_amount(&mut self, index: usize, input: Option<&str>) -> DocumentResult<()> {
        self.line_mut(index)?.amount_override = input.map(to_non_negative_decimal);
        self.refresh();
        Ok(())
    }

    /// Change a row's GST treatment and rate
    ///
    /// A blank rate falls back to the configured default for taxable modes.
    pub fn set_line_tax(
        &mut self,
        index: usize,
        mode: TaxMode,
        rate: Option<&str>,
    ) -> DocumentResult<()> {
        let item = self.line_mut(index)?;
        item.tax_mode = mode;
        item.tax_rate_percent = rate
            .filter(|r| !r.trim().is_empty())
            .map(to_non_negative_decimal);
        self.refresh();
        Ok(())
    }

    pub fn set_discount(&mut self, input: &str, mode: DiscountMode) {
        self.document.discount_value = to_non_negative_decimal(input);
        self.document.discount_mode = mode;
        self.refresh();
    }

    /// Change the buyer's state; blank clears it back to the seller's state
    ///
    /// Every GST-bearing row is moved to the new mode.
    pub fn set_place_of_supply(&mut self, place: Option<String>) {
        self.document.place_of_supply = place.filter(|p| !p.trim().is_empty());
        align_tax_modes(&mut self.document, &self.company);
        self.refresh();
    }

    pub fn set_withholding(&mut self, withholding: Option<(WithholdingKind, &str)>) {
        self.document.withholding = withholding.map(|(kind, rate)| Withholding {
            kind,
            rate_percent: to_non_negative_decimal(rate),
        });
        self.refresh();
    }

    /// Signed adjustment, e.g. `"-0.40"` for a round-off
    ///
    /// Only the grand total depends on it, so lines are not recomputed.
    pub fn set_manual_adjustment(&mut self, input: &str) {
        self.document.manual_adjustment = to_decimal(input);
    }

    pub fn set_reference(&mut self, reference: Option<String>) {
        self.document.reference = reference;
    }

    pub fn set_customer_name(&mut self, customer_name: String) {
        self.document.customer_name = customer_name;
    }

    pub fn manual_adjustment(&self) -> &BigDecimal {
        &self.document.manual_adjustment
    }

    fn refresh(&mut self) {
        recompute(&mut self.document, &self.config);
    }

    fn check_index(&self, index: usize) -> DocumentResult<()> {
        if index >= self.document.line_items.len() {
            return Err(DocumentError::Validation(format!(
                "Line {} does not exist ({} lines)",
                index,
                self.document.line_items.len()
            )));
        }
        Ok(())
    }

    fn line_mut(&mut self, index: usize) -> DocumentResult<&mut LineItem> {
        self.check_index(index)?;
        Ok(&mut self.document.line_items[index])
    }
}
