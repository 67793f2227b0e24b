//! # RoboBooks Core
//!
//! Tax engine behind RoboBooks invoice and sales-order drafts: GST
//! breakdowns, document discounts, TDS/TCS withholding and payable totals.
//!
//! ## Features
//!
//! - **GST calculations**: Indian GST with CGST/SGST (intra-state) and IGST (inter-state)
//! - **Place of supply**: seller vs buyer state comparison with GST state codes
//! - **Discount distribution**: document discounts shared across lines by amount
//! - **Withholding**: TDS subtracted from, TCS added to, the payable total
//! - **Editing**: a draft editor that recomputes after every change
//! - **Storage abstraction**: trait-based draft storage with an in-memory store
//!
//! ## Quick Start
//!
//! ```rust
//! use robobooks_core::{CompanyProfile, Document, DocumentEditor, LineItem, TaxConfig, TaxMode};
//! use bigdecimal::BigDecimal;
//!
//! let company = CompanyProfile::new("RoboBooks".to_string(), "29-Karnataka".to_string());
//! let mut editor = DocumentEditor::new(
//!     Document::invoice("Acme Traders".to_string()),
//!     company,
//!     TaxConfig::default(),
//! );
//!
//! editor.add_line(LineItem::with_amount(
//!     "Consulting".to_string(),
//!     BigDecimal::from(1000),
//!     TaxMode::Domestic,
//!     None,
//! ));
//!
//! assert_eq!(editor.totals().grand_total, BigDecimal::from(1180));
//! ```

pub mod config;
pub mod document;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use document::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
