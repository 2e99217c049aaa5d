//! SVG parsing into the owned [`ElementNode`] tree

use super::node::{ElementNode, Node};
use crate::domain::{Result, SvgSplitError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

fn entity_declaration() -> &'static Regex {
    static DECLARATION: OnceLock<Regex> = OnceLock::new();
    DECLARATION.get_or_init(|| {
        Regex::new(r#"<!ENTITY\s+([A-Za-z_:][\w.:-]*)\s+(?:"([^"]*)"|'([^']*)')\s*>"#)
            .expect("entity declaration pattern is valid")
    })
}

fn entity_reference() -> &'static Regex {
    static REFERENCE: OnceLock<Regex> = OnceLock::new();
    REFERENCE.get_or_init(|| {
        Regex::new(r"&([A-Za-z_:][\w.:-]*);").expect("entity reference pattern is valid")
    })
}

/// General entities declared in the internal DTD subset
///
/// Illustrator declares its namespace URIs this way (`xmlns="&ns_svg;"`).
/// Exported documents carry no DTD, so references are expanded on read.
#[derive(Debug, Default)]
struct Entities(HashMap<String, String>);

impl Entities {
    fn declare_from(&mut self, doctype: &str) {
        for cap in entity_declaration().captures_iter(doctype) {
            let literal = cap.get(2).or_else(|| cap.get(3)).map_or("", |m| m.as_str());
            let value = self.expand(literal).replace('"', "&quot;");
            tracing::trace!(entity = %&cap[1], value = %value, "Declared entity");
            self.0.entry(cap[1].to_string()).or_insert(value);
        }
    }

    /// Replace references to declared entities. Predefined and character
    /// references are left escaped.
    fn expand<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if self.0.is_empty() || !raw.contains('&') {
            return Cow::Borrowed(raw);
        }
        entity_reference().replace_all(raw, |cap: &Captures<'_>| match self.0.get(&cap[1]) {
            Some(value) => value.clone(),
            None => cap[0].to_string(),
        })
    }
}

/// Parse an SVG document and return its `<svg>` root element
///
/// Comments, processing instructions and the prolog are dropped. Entities
/// declared in the DOCTYPE are expanded. Whitespace-only text is dropped
/// except inside text content elements and `xml:space="preserve"` subtrees.
///
/// # Errors
///
/// Returns [`SvgSplitError::Document`] for malformed XML, a missing root or a
/// root that is not `<svg>`.
pub fn parse_svg(input: &str) -> Result<ElementNode> {
    let mut reader = Reader::from_str(input);
    let mut entities = Entities::default();
    let mut stack: Vec<ElementNode> = Vec::new();
    let mut root: Option<ElementNode> = None;

    loop {
        match reader.read_event()? {
            Event::DocType(doctype) => entities.declare_from(&String::from_utf8_lossy(&doctype)),
            Event::Start(start) => stack.push(element_from_start(&start, &entities)?),
            Event::Empty(start) => {
                let element = element_from_start(&start, &entities)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    SvgSplitError::Document("Unexpected closing tag".to_string())
                })?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let raw = String::from_utf8_lossy(&text);
                let keep = !raw.trim().is_empty()
                    || stack.iter().any(ElementNode::preserves_whitespace);
                if let Some(parent) = stack.last_mut() {
                    if keep {
                        parent
                            .children
                            .push(Node::Text(entities.expand(&raw).into_owned()));
                    }
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::CData(String::from_utf8_lossy(&data).into_owned()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(SvgSplitError::Document(format!(
            "Unclosed element <{}>",
            stack[stack.len() - 1].name
        )));
    }

    let root = root.ok_or_else(|| SvgSplitError::Document("Document is empty".to_string()))?;
    if root.local_name() != "svg" {
        return Err(SvgSplitError::Document(format!(
            "Root element is <{}>, expected <svg>",
            root.name
        )));
    }

    Ok(root)
}

fn element_from_start(start: &BytesStart<'_>, entities: &Entities) -> Result<ElementNode> {
    let mut element = ElementNode::new(String::from_utf8_lossy(start.name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute
            .map_err(|e| SvgSplitError::Document(format!("Malformed attribute: {e}")))?;
        let value = String::from_utf8_lossy(&attribute.value);
        element.attributes.push((
            String::from_utf8_lossy(attribute.key.as_ref()).into_owned(),
            entities.expand(&value).into_owned(),
        ));
    }
    Ok(element)
}

fn attach(
    stack: &mut [ElementNode],
    root: &mut Option<ElementNode>,
    element: ElementNode,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(SvgSplitError::Document(
            "Document has more than one root element".to_string(),
        ));
    }
    *root = Some(element);
    Ok(())
}
