//! Host environment traits
//!
//! The exporter never touches a concrete document format directly. It talks to
//! the document and to the directory prompt through these traits.

use super::svg::IsolatedDocument;
use crate::domain::Result;
use std::path::PathBuf;

/// Canvas dimensions of a source document, kept verbatim (units included)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    /// `width` attribute of the root
    pub width: Option<String>,
    /// `height` attribute of the root
    pub height: Option<String>,
    /// `viewBox` attribute of the root
    pub view_box: Option<String>,
}

/// Reference to one exportable element of the active document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRef {
    /// Child-index path from the document root
    pub path: Vec<usize>,
    /// Display name used for the output file
    pub name: String,
    /// Whether the element was hidden when the collection was resolved
    pub hidden: bool,
}

/// A named, ordered collection of elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Name the collection was looked up by
    pub name: String,
    /// Members in stored order
    pub members: Vec<ElementRef>,
}

impl Collection {
    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the collection has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Document trait for the active source document
///
/// This trait defines the primitives the export pipeline needs from the
/// document-editing environment: lookup, visibility and duplication.
pub trait Document {
    /// Canvas dimensions used to size isolated documents
    fn canvas(&self) -> Canvas;

    /// Names of every group that can be used as a collection, in document order
    fn collection_names(&self) -> Vec<String>;

    /// Find a collection by exact name
    fn find_collection(&self, name: &str) -> Option<Collection>;

    /// Whether an element is currently hidden
    ///
    /// # Errors
    ///
    /// Returns an error if the reference no longer points at an element.
    fn is_hidden(&self, element: &ElementRef) -> Result<bool>;

    /// Force an element visible in the source document
    ///
    /// # Errors
    ///
    /// Returns an error if the reference no longer points at an element.
    fn set_visible(&mut self, element: &ElementRef) -> Result<()>;

    /// Create a transient document, sized like the canvas, holding one
    /// duplicate of `element`
    ///
    /// # Errors
    ///
    /// Returns an error if the reference no longer points at an element.
    fn isolate(&self, element: &ElementRef) -> Result<IsolatedDocument>;
}

/// Directory selection collaborator
pub trait DirectoryPrompt {
    /// Ask for a destination directory. `None` means the user cancelled.
    fn select_directory(&mut self, title: &str) -> Option<PathBuf>;
}

/// Directory chosen up front, e.g. from a command-line flag
#[derive(Debug, Clone)]
pub struct FixedDirectory(pub PathBuf);

impl DirectoryPrompt for FixedDirectory {
    fn select_directory(&mut self, title: &str) -> Option<PathBuf> {
        tracing::debug!(title = %title, directory = %self.0.display(), "Using preselected directory");
        Some(self.0.clone())
    }
}
