//! In-memory draft storage implementation for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::traits::*;
use crate::types::*;

/// In-memory draft store for testing and development
#[derive(Debug, Clone)]
pub struct MemoryDraftStore {
    drafts: Arc<RwLock<HashMap<String, Draft>>>,
}

impl MemoryDraftStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            drafts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all drafts (useful for testing)
    pub fn clear(&self) -> DocumentResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> DocumentResult<RwLockReadGuard<'_, HashMap<String, Draft>>> {
        self.drafts
            .read()
            .map_err(|e| DocumentError::Storage(e.to_string()))
    }

    fn write(&self) -> DocumentResult<RwLockWriteGuard<'_, HashMap<String, Draft>>> {
        self.drafts
            .write()
            .map_err(|e| DocumentError::Storage(e.to_string()))
    }
}

impl Default for MemoryDraftStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DraftStorage for MemoryDraftStore {
    async fn save_draft(&mut self, draft: &Draft) -> DocumentResult<()> {
        self.write()?.insert(draft.id.clone(), draft.clone());
        tracing::info!(draft_id = %draft.id, kind = ?draft.document.kind, "saved draft");
        Ok(())
    }

    async fn get_draft(&self, draft_id: &str) -> DocumentResult<Option<Draft>> {
        Ok(self.read()?.get(draft_id).cloned())
    }

    async fn list_drafts(&self, kind: Option<DocumentKind>) -> DocumentResult<Vec<Draft>> {
        let drafts = self.read()?;
        let mut filtered: Vec<Draft> = drafts
            .values()
            .filter(|draft| kind.is_none_or(|k| draft.document.kind == k))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(filtered)
    }

    async fn update_draft(&mut self, draft: &Draft) -> DocumentResult<()> {
        let mut drafts = self.write()?;
        match drafts.get_mut(&draft.id) {
            Some(existing) => {
                *existing = draft.clone();
                tracing::info!(draft_id = %draft.id, "updated draft");
                Ok(())
            }
            None => Err(DocumentError::DraftNotFound(draft.id.clone())),
        }
    }

    async fn delete_draft(&mut self, draft_id: &str) -> DocumentResult<()> {
        if self.write()?.remove(draft_id).is_some() {
            tracing::info!(draft_id, "deleted draft");
            Ok(())
        } else {
            Err(DocumentError::DraftNotFound(draft_id.to_string()))
        }
    }
}
