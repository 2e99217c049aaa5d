//! Owned XML tree for SVG documents
//!
//! Attribute values and text are stored in their escaped (on-disk) form so a
//! parsed document is written back byte-for-byte where nothing changed.
//! Accessors unescape on read and setters escape on write.

use quick_xml::escape::{escape, unescape};
use std::borrow::Cow;

/// Attributes that carry a group's display name, in lookup order
const NAME_ATTRIBUTES: [&str; 3] = ["data-name", "inkscape:label", "id"];

/// Elements whose character data is rendered
const TEXT_CONTENT_ELEMENTS: [&str; 3] = ["text", "tspan", "textPath"];

/// A node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Element with attributes and children
    Element(ElementNode),
    /// Character data, escaped
    Text(String),
    /// CDATA section, verbatim
    CData(String),
}

/// An XML element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    /// Qualified tag name, e.g. `g` or `svg:g`
    pub name: String,
    /// Attributes in document order, values escaped
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Create an empty element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Tag name without namespace prefix
    pub fn local_name(&self) -> &str {
        self.name.rsplit(':').next().unwrap_or(&self.name)
    }

    /// Whether whitespace between the children of this element is content
    pub fn preserves_whitespace(&self) -> bool {
        TEXT_CONTENT_ELEMENTS.contains(&self.local_name())
            || self.attr("xml:space").is_some_and(|v| v == "preserve")
    }

    /// Whether this element is a `<g>` group
    pub fn is_group(&self) -> bool {
        self.local_name() == "g"
    }

    /// Unescaped attribute value
    pub fn attr(&self, key: &str) -> Option<Cow<'_, str>> {
        self.raw_attr(key)
            .map(|raw| unescape(raw).unwrap_or(Cow::Borrowed(raw)))
    }

    /// Attribute value as stored (escaped)
    pub fn raw_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, escaping the value. Replaces an existing value in place.
    pub fn set_attr(&mut self, key: &str, value: &str) {
        let escaped = escape(value).into_owned();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = escaped,
            None => self.attributes.push((key.to_string(), escaped)),
        }
    }

    /// Remove an attribute, returning whether it was present
    pub fn remove_attr(&mut self, key: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|(k, _)| k != key);
        before != self.attributes.len()
    }

    /// Display name used for collection lookup and output naming
    pub fn display_name(&self) -> Option<String> {
        NAME_ATTRIBUTES
            .iter()
            .filter_map(|key| self.attr(key))
            .find(|value| !value.is_empty())
            .map(Cow::into_owned)
    }

    /// Iterate child elements together with their index in `children`
    pub fn child_elements(&self) -> impl Iterator<Item = (usize, &ElementNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(index, node)| match node {
                Node::Element(element) => Some((index, element)),
                _ => None,
            })
    }

    /// Descendant addressed by a path of child indices
    pub fn get_by_path(&self, path: &[usize]) -> Option<&ElementNode> {
        let mut current = self;
        for &index in path {
            current = match current.children.get(index)? {
                Node::Element(element) => element,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Mutable descendant addressed by a path of child indices
    pub fn get_by_path_mut(&mut self, path: &[usize]) -> Option<&mut ElementNode> {
        let mut current = self;
        for &index in path {
            current = match current.children.get_mut(index)? {
                Node::Element(element) => element,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Visit every descendant element (not `self`) in document order
    pub fn walk<'a>(
        &'a self,
        path: &mut Vec<usize>,
        visit: &mut dyn FnMut(&[usize], &'a ElementNode),
    ) {
        for (index, child) in self.child_elements() {
            path.push(index);
            visit(path.as_slice(), child);
            child.walk(path, visit);
            path.pop();
        }
    }

    /// Visit every element in the subtree, `self` included, mutably
    pub fn walk_mut(&mut self, visit: &mut dyn FnMut(&mut ElementNode)) {
        visit(self);
        for child in &mut self.children {
            if let Node::Element(element) = child {
                element.walk_mut(visit);
            }
        }
    }

    /// Whether the element is hidden by `display` or `visibility`
    pub fn is_hidden(&self) -> bool {
        if self.attr("display").is_some_and(|v| v.trim() == "none") {
            return true;
        }
        if self.attr("visibility").is_some_and(|v| v.trim() == "hidden") {
            return true;
        }
        self.attr("style").is_some_and(|style| style_hides(&style))
    }

    /// Remove every marker that hides the element. Returns whether anything changed.
    pub fn force_visible(&mut self) -> bool {
        let mut changed = false;

        if self.attr("display").is_some_and(|v| v.trim() == "none") {
            changed |= self.remove_attr("display");
        }
        if self.attr("visibility").is_some_and(|v| v.trim() == "hidden") {
            changed |= self.remove_attr("visibility");
        }

        if let Some(style) = self.attr("style").map(Cow::into_owned) {
            if style_hides(&style) {
                let kept: Vec<String> = style_declarations(&style)
                    .filter(|(p, v)| !hides(p, v))
                    .map(|(p, v)| format!("{p}:{v}"))
                    .collect();
                if kept.is_empty() {
                    self.remove_attr("style");
                } else {
                    self.set_attr("style", &kept.join(";"));
                }
                changed = true;
            }
        }

        changed
    }
}

/// Split an inline style into trimmed `(property, value)` pairs
fn style_declarations(style: &str) -> impl Iterator<Item = (&str, &str)> {
    style.split(';').filter_map(|declaration| {
        let (property, value) = declaration.split_once(':')?;
        Some((property.trim(), value.trim()))
    })
}

fn style_hides(style: &str) -> bool {
    style_declarations(style).any(|(p, v)| hides(p, v))
}

fn hides(property: &str, value: &str) -> bool {
    (property == "display" && value == "none") || (property == "visibility" && value == "hidden")
}
