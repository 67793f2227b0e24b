//! Core types and data structures for invoice and sales-order drafts

use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How GST applies to a single line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxMode {
    /// Intra-state supply - split into CGST and SGST
    Domestic,
    /// Inter-state supply - charged entirely as IGST
    InterState,
    /// Outside the GST net (no tax)
    NonTaxable,
    /// Zero-rated supply such as exports (no tax)
    ZeroRated,
}

impl TaxMode {
    /// Whether this mode charges GST and therefore needs a rate
    pub fn is_taxable(&self) -> bool {
        matches!(self, TaxMode::Domestic | TaxMode::InterState)
    }
}

/// How the document-level discount value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountMode {
    /// Percentage of the subtotal
    Percentage,
    /// Fixed amount
    Flat,
}

/// Withholding tax applied at the document level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WithholdingKind {
    /// Tax Deducted at Source - subtracted from the payable total
    Tds,
    /// Tax Collected at Source - added to the payable total
    Tcs,
}

impl WithholdingKind {
    /// Apply this kind's sign to an unsigned withholding amount
    pub fn signed(&self, amount: BigDecimal) -> BigDecimal {
        match self {
            WithholdingKind::Tds => -amount,
            WithholdingKind::Tcs => amount,
        }
    }
}

/// Withholding tax configuration for a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Withholding {
    pub kind: WithholdingKind,
    /// Rate percentage (e.g., 10 for 10%)
    pub rate_percent: BigDecimal,
}

impl Withholding {
    pub fn tds(rate_percent: BigDecimal) -> Self {
        Self {
            kind: WithholdingKind::Tds,
            rate_percent,
        }
    }

    pub fn tcs(rate_percent: BigDecimal) -> Self {
        Self {
            kind: WithholdingKind::Tcs,
            rate_percent,
        }
    }
}

/// Kind of draft being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Invoice,
    SalesOrder,
}

/// A single row on an invoice or sales order
///
/// `quantity`, `unit_rate`, `amount_override`, `tax_mode` and
/// `tax_rate_percent` are inputs. Everything else is derived by
/// [`recompute`](crate::document::recompute) and is overwritten on every run,
/// so stored drafts may omit the derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description
    pub description: String,
    /// Quantity
    pub quantity: BigDecimal,
    /// Unit rate (before GST)
    pub unit_rate: BigDecimal,
    /// Manually entered line amount, wins over quantity × rate
    pub amount_override: Option<BigDecimal>,
    /// GST treatment of this line
    pub tax_mode: TaxMode,
    /// GST rate percentage; the configured default applies when unset
    pub tax_rate_percent: Option<BigDecimal>,
    /// Line amount before discount and GST
    #[serde(default)]
    pub amount: BigDecimal,
    /// Proportional share of the document discount
    #[serde(default)]
    pub discount_share: BigDecimal,
    /// Amount GST is charged on
    #[serde(default)]
    pub taxable_amount: BigDecimal,
    #[serde(default)]
    pub cgst: BigDecimal,
    #[serde(default)]
    pub sgst: BigDecimal,
    #[serde(default)]
    pub igst: BigDecimal,
    /// Total GST for the line (CGST + SGST + IGST)
    #[serde(default)]
    pub tax_amount: BigDecimal,
}

impl LineItem {
    /// Create a new line item; derived fields start at zero until recomputed
    pub fn new(
        description: String,
        quantity: BigDecimal,
        unit_rate: BigDecimal,
        tax_mode: TaxMode,
        tax_rate_percent: Option<BigDecimal>,
    ) -> Self {
        Self {
            description,
            quantity,
            unit_rate,
            amount_override: None,
            tax_mode,
            tax_rate_percent,
            amount: BigDecimal::zero(),
            discount_share: BigDecimal::zero(),
            taxable_amount: BigDecimal::zero(),
            cgst: BigDecimal::zero(),
            sgst: BigDecimal::zero(),
            igst: BigDecimal::zero(),
            tax_amount: BigDecimal::zero(),
        }
    }

    /// Create a line item whose amount is entered directly
    pub fn with_amount(
        description: String,
        amount: BigDecimal,
        tax_mode: TaxMode,
        tax_rate_percent: Option<BigDecimal>,
    ) -> Self {
        let mut item = Self::new(
            description,
            BigDecimal::from(1),
            amount.clone(),
            tax_mode,
            tax_rate_percent,
        );
        item.amount_override = Some(amount);
        item
    }
}

/// An invoice or sales-order draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub kind: DocumentKind,
    /// Invoice or order number, if assigned
    pub reference: Option<String>,
    pub customer_name: String,
    /// Ordered line items
    pub line_items: Vec<LineItem>,
    /// Percentage or flat amount, depending on `discount_mode`
    pub discount_value: BigDecimal,
    pub discount_mode: DiscountMode,
    /// Buyer's state; defaults to the seller's state when unset
    pub place_of_supply: Option<String>,
    pub withholding: Option<Withholding>,
    /// Signed adjustment added to the grand total
    pub manual_adjustment: BigDecimal,
}

impl Document {
    /// Create an empty draft
    pub fn new(kind: DocumentKind, customer_name: String) -> Self {
        Self {
            kind,
            reference: None,
            customer_name,
            line_items: Vec::new(),
            discount_value: BigDecimal::zero(),
            discount_mode: DiscountMode::Percentage,
            place_of_supply: None,
            withholding: None,
            manual_adjustment: BigDecimal::zero(),
        }
    }

    /// Create an empty invoice draft
    pub fn invoice(customer_name: String) -> Self {
        Self::new(DocumentKind::Invoice, customer_name)
    }

    /// Create an empty sales-order draft
    pub fn sales_order(customer_name: String) -> Self {
        Self::new(DocumentKind::SalesOrder, customer_name)
    }
}

/// A stored draft awaiting submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    /// Unique identifier for the draft
    pub id: String,
    pub document: Document,
    /// When the draft was created
    pub created_at: NaiveDateTime,
    /// When the draft was last updated
    pub updated_at: NaiveDateTime,
}

impl Draft {
    /// Wrap a document in a new draft with a fresh id
    pub fn new(document: Document) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: Uuid::new_v4().to_string(),
            document,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the document and bump the update timestamp
    pub fn update(&mut self, document: Document) {
        self.document = document;
        self.updated_at = chrono::Utc::now().naive_utc();
    }
}

/// Seller details the tax mode is resolved against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    /// Registered state in `"<code>-<StateName>"` form, e.g. `"29-Karnataka"`
    pub state_label: String,
    pub gstin: Option<String>,
}

impl CompanyProfile {
    pub fn new(name: String, state_label: String) -> Self {
        Self {
            name,
            state_label,
            gstin: None,
        }
    }
}

/// Errors raised around the tax engine
///
/// The calculation itself never fails; these cover validation before
/// submission, configuration and draft storage.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid tax breakdown: {0}")]
    InvalidTax(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Draft not found: {0}")]
    DraftNotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
