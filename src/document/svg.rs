//! SVG-backed document implementation

use super::node::{ElementNode, Node};
use super::parser::parse_svg;
use super::raster::embed_raster_images;
use super::traits::{Canvas, Collection, Document, ElementRef};
use super::writer::{write_svg, WriteSettings};
use crate::core::export::options::ExportOptions;
use crate::domain::{Result, SvgSplitError};
use std::fs;
use std::path::{Path, PathBuf};

/// Root children that are referenced resources rather than rendered artwork
const RESOURCE_ELEMENTS: [&str; 12] = [
    "defs",
    "style",
    "linearGradient",
    "radialGradient",
    "pattern",
    "clipPath",
    "mask",
    "filter",
    "marker",
    "symbol",
    "font",
    "font-face",
];

/// An SVG file loaded into memory
#[derive(Debug, Clone)]
pub struct SvgDocument {
    root: ElementNode,
    source_path: Option<PathBuf>,
}

impl SvgDocument {
    /// Parse a document from a string
    pub fn parse(input: &str) -> Result<Self> {
        Ok(Self {
            root: parse_svg(input)?,
            source_path: None,
        })
    }

    /// Load a document from disk
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            SvgSplitError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut document = Self::parse(&contents)?;
        document.source_path = Some(path.to_path_buf());

        tracing::info!(path = %path.display(), "Opened document");
        Ok(document)
    }

    /// Path the document was loaded from
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Directory used to resolve relative resource links
    fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
    }

    fn element(&self, element: &ElementRef) -> Result<&ElementNode> {
        self.root
            .get_by_path(&element.path)
            .ok_or_else(|| stale_reference(element))
    }

    fn matches(group: &ElementNode, name: &str) -> bool {
        group.display_name().as_deref() == Some(name) || group.attr("id").as_deref() == Some(name)
    }

    /// Transforms of every ancestor between the root and `path`, outermost first
    fn ancestor_transforms(&self, path: &[usize]) -> Vec<String> {
        (1..path.len())
            .filter_map(|depth| self.root.get_by_path(&path[..depth]))
            .filter_map(|ancestor| ancestor.attr("transform").map(|t| t.into_owned()))
            .collect()
    }
}

impl Document for SvgDocument {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: self.root.attr("width").map(|v| v.into_owned()),
            height: self.root.attr("height").map(|v| v.into_owned()),
            view_box: self.root.attr("viewBox").map(|v| v.into_owned()),
        }
    }

    fn collection_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.root.walk(&mut Vec::new(), &mut |_, element| {
            if element.is_group() {
                if let Some(name) = element.display_name() {
                    names.push(name);
                }
            }
        });
        names
    }

    fn find_collection(&self, name: &str) -> Option<Collection> {
        let mut found: Option<(Vec<usize>, &ElementNode)> = None;
        self.root.walk(&mut Vec::new(), &mut |path, element| {
            if found.is_none() && element.is_group() && Self::matches(element, name) {
                found = Some((path.to_vec(), element));
            }
        });

        let (path, group) = found?;
        let members = group
            .child_elements()
            .filter(|(_, child)| child.is_group())
            .enumerate()
            .map(|(position, (index, child))| {
                let mut member_path = path.clone();
                member_path.push(index);
                ElementRef {
                    path: member_path,
                    name: child
                        .display_name()
                        .unwrap_or_else(|| format!("group-{}", position + 1)),
                    hidden: child.is_hidden(),
                }
            })
            .collect();

        Some(Collection {
            name: name.to_string(),
            members,
        })
    }

    fn is_hidden(&self, element: &ElementRef) -> Result<bool> {
        Ok(self.element(element)?.is_hidden())
    }

    fn set_visible(&mut self, element: &ElementRef) -> Result<()> {
        let node = self
            .root
            .get_by_path_mut(&element.path)
            .ok_or_else(|| stale_reference(element))?;
        if node.force_visible() {
            tracing::debug!(element = %element.name, "Made hidden element visible");
        }
        Ok(())
    }

    fn isolate(&self, element: &ElementRef) -> Result<IsolatedDocument> {
        let source = self.element(element)?;
        let canvas = self.canvas();

        let mut root = ElementNode::new(self.root.name.clone());
        for (key, value) in &self.root.attributes {
            if key == "xmlns" || key.starts_with("xmlns:") {
                root.attributes.push((key.clone(), value.clone()));
            }
        }
        for (key, value) in [
            ("width", &canvas.width),
            ("height", &canvas.height),
            ("viewBox", &canvas.view_box),
        ] {
            if let Some(value) = value {
                root.set_attr(key, value);
            }
        }

        for (_, resource) in self.root.child_elements() {
            if RESOURCE_ELEMENTS.contains(&resource.local_name()) {
                root.children.push(Node::Element(resource.clone()));
            }
        }

        let duplicate = Node::Element(source.clone());
        let transforms = self.ancestor_transforms(&element.path);
        if transforms.is_empty() {
            root.children.push(duplicate);
        } else {
            let mut wrapper = ElementNode::new("g");
            wrapper.set_attr("transform", &transforms.join(" "));
            wrapper.children.push(duplicate);
            root.children.push(Node::Element(wrapper));
        }

        Ok(IsolatedDocument {
            name: element.name.clone(),
            root,
            base_dir: self.base_dir(),
        })
    }
}

fn stale_reference(element: &ElementRef) -> SvgSplitError {
    SvgSplitError::Document(format!(
        "Element '{}' is no longer part of the document",
        element.name
    ))
}

/// Transient single-element document
///
/// Created right before an element is exported and closed right after.
#[derive(Debug)]
pub struct IsolatedDocument {
    name: String,
    root: ElementNode,
    base_dir: Option<PathBuf>,
}

impl IsolatedDocument {
    /// Name of the element this document was created for
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root of the isolated document
    pub fn root(&self) -> &ElementNode {
        &self.root
    }

    /// Write the document to `path` using `options`
    ///
    /// # Errors
    ///
    /// Returns [`SvgSplitError::Export`] if serialization or the file write fails.
    pub fn export_file(&self, path: &Path, options: &ExportOptions) -> Result<()> {
        let mut root = self.root.clone();
        options.profile.apply(&mut root);
        if options.embed_raster_images {
            embed_raster_images(&mut root, self.base_dir.as_deref());
        }

        let settings = WriteSettings {
            xml_declaration: options.xml_declaration,
            doctype: if options.doctype {
                options.profile.doctype()
            } else {
                None
            },
            pretty: options.pretty,
        };
        let bytes = write_svg(&root, &settings)?;

        fs::write(path, bytes).map_err(|e| {
            SvgSplitError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;

        tracing::debug!(element = %self.name, path = %path.display(), "Wrote isolated document");
        Ok(())
    }

    /// Discard the document without saving it anywhere else
    pub fn close(self) {
        tracing::trace!(element = %self.name, "Closed isolated document");
    }
}
