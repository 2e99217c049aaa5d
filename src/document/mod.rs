//! Document environment
//!
//! This module provides the host side of an export run:
//! - The [`Document`] trait and its SVG implementation ([`SvgDocument`])
//! - Transient single-element documents ([`IsolatedDocument`])
//! - The shared [`DocumentHandle`] passed to every pipeline component
//! - The [`Workspace`] holding the optional active document
//! - The [`DirectoryPrompt`] collaborator

pub mod node;
pub mod parser;
pub mod raster;
pub mod svg;
pub mod traits;
pub mod writer;

pub use svg::{IsolatedDocument, SvgDocument};
pub use traits::{Canvas, Collection, DirectoryPrompt, Document, ElementRef, FixedDirectory};

use crate::domain::Result;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::path::Path;
use std::rc::Rc;

/// Shared handle to the active source document
///
/// Export runs are single-threaded, so the handle is a plain `Rc<RefCell<_>>`.
/// The exporter mutates the document (visibility) while the resolver reads it.
#[derive(Clone)]
pub struct DocumentHandle(Rc<RefCell<dyn Document>>);

impl DocumentHandle {
    /// Wrap a document into a shared handle
    pub fn new<D: Document + 'static>(document: D) -> Self {
        Self(Rc::new(RefCell::new(document)))
    }

    /// Borrow the document for reading
    pub fn borrow(&self) -> Ref<'_, dyn Document> {
        self.0.borrow()
    }

    /// Borrow the document for mutation
    pub fn borrow_mut(&self) -> RefMut<'_, dyn Document> {
        self.0.borrow_mut()
    }
}

impl fmt::Debug for DocumentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentHandle")
            .field("canvas", &self.borrow().canvas())
            .finish_non_exhaustive()
    }
}

/// The editing session: at most one active document
#[derive(Debug, Default)]
pub struct Workspace {
    active: Option<DocumentHandle>,
}

impl Workspace {
    /// A workspace with no open document
    pub fn empty() -> Self {
        Self::default()
    }

    /// A workspace whose active document is `document`
    pub fn with_document<D: Document + 'static>(document: D) -> Self {
        Self {
            active: Some(DocumentHandle::new(document)),
        }
    }

    /// Open an SVG file as the active document
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_document(SvgDocument::open(path)?))
    }

    /// Handle to the active document, if any
    pub fn active_document(&self) -> Option<DocumentHandle> {
        self.active.clone()
    }
}
