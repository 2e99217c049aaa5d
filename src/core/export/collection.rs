//! Collection lookup in the active document

use crate::document::{Collection, DocumentHandle};
use crate::domain::{Result, SvgSplitError};

/// Looks up named collections by exact name
#[derive(Debug, Clone)]
pub struct CollectionResolver {
    document: DocumentHandle,
}

impl CollectionResolver {
    /// Create a resolver over `document`
    pub fn new(document: DocumentHandle) -> Self {
        Self { document }
    }

    /// Resolve a collection. Matching is exact: no trimming, no case folding.
    ///
    /// # Errors
    ///
    /// Returns [`SvgSplitError::CollectionNotFound`] when no group has that name.
    pub fn resolve(&self, name: &str) -> Result<Collection> {
        let collection = self
            .document
            .borrow()
            .find_collection(name)
            .ok_or_else(|| SvgSplitError::CollectionNotFound(name.to_string()))?;

        tracing::debug!(
            collection = %name,
            members = collection.len(),
            "Resolved collection"
        );
        Ok(collection)
    }
}
