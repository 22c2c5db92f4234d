//! Contract error types for the nav panel
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! Problem Details responses.

use thiserror::Error;

/// Entity collection touched by an import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportCollection {
    Websites,
    SearchEngines,
    Settings,
}

impl std::fmt::Display for ImportCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ImportCollection::Websites => "websites",
            ImportCollection::SearchEngines => "searchEngines",
            ImportCollection::Settings => "settings",
        })
    }
}

/// Step of a bulk replace that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceStage {
    /// Listing the currently stored entities
    Enumerate,
    /// Deleting a stored entity; index into the stored list
    Delete,
    /// Inserting a document entity; index into the document list
    Insert,
    /// Overwriting the settings row
    Overwrite,
    /// Committing the collection's transaction
    Commit,
}

impl std::fmt::Display for ReplaceStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ReplaceStage::Enumerate => "enumerate",
            ReplaceStage::Delete => "delete",
            ReplaceStage::Insert => "insert",
            ReplaceStage::Overwrite => "overwrite",
            ReplaceStage::Commit => "commit",
        })
    }
}

/// Nav panel domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavPanelError {
    /// Missing or malformed input, rejected before touching storage
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Referenced entity does not exist
    #[error("{resource} not found: {id}")]
    NotFound { resource: String, id: String },

    /// Duplicate identifier
    #[error("Conflict: {reason}")]
    Conflict { reason: String },

    /// Underlying persistence failure
    #[error("Store error: {message}")]
    Store { message: String },

    /// Import stopped part way; collections replaced before `collection`
    /// stay committed, `collection` itself is rolled back
    #[error("Import failed on {collection} ({stage} at index {index}): {message}")]
    ImportPartialFailure {
        collection: ImportCollection,
        stage: ReplaceStage,
        index: usize,
        message: String,
    },

    #[error("Internal error")]
    Internal,
}

impl NavPanelError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    /// Wrap a repository error, keeping its full context chain
    pub fn store(error: anyhow::Error) -> Self {
        Self::Store {
            message: format!("{error:#}"),
        }
    }
}
