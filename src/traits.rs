//! Traits for storage abstraction and submission validation

use async_trait::async_trait;
use bigdecimal::{BigDecimal, Zero};

use crate::document::aggregate::line_amount;
use crate::types::*;

/// Storage abstraction for document drafts
///
/// Lets the tax engine sit in front of any persistence backend (the REST
/// API, local storage, in-memory) by implementing these methods.
#[async_trait]
pub trait DraftStorage: Send + Sync {
    /// Save a new draft
    async fn save_draft(&mut self, draft: &Draft) -> DocumentResult<()>;

    /// Get a draft by ID
    async fn get_draft(&self, draft_id: &str) -> DocumentResult<Option<Draft>>;

    /// List drafts, optionally filtered by document kind
    async fn list_drafts(&self, kind: Option<DocumentKind>) -> DocumentResult<Vec<Draft>>;

    /// Replace an existing draft
    async fn update_draft(&mut self, draft: &Draft) -> DocumentResult<()>;

    /// Discard a draft
    async fn delete_draft(&mut self, draft_id: &str) -> DocumentResult<()>;
}

/// Trait for implementing submission rules
///
/// Editing never fails; these checks run once, before a draft is submitted.
pub trait DocumentValidator: Send + Sync {
    /// Validate a document before it leaves the draft state
    fn validate_document(&self, document: &Document) -> DocumentResult<()>;
}

/// Default validator: the document has lines and every line has an amount
pub struct DefaultDocumentValidator;

impl DocumentValidator for DefaultDocumentValidator {
    fn validate_document(&self, document: &Document) -> DocumentResult<()> {
        if document.line_items.is_empty() {
            return Err(DocumentError::Validation(
                "Document must have at least one line item".to_string(),
            ));
        }

        for (index, item) in document.line_items.iter().enumerate() {
            if line_amount(item) <= BigDecimal::zero() {
                return Err(DocumentError::Validation(format!(
                    "Line {} ('{}') must have a positive amount",
                    index + 1,
                    item.description
                )));
            }
        }

        Ok(())
    }
}
