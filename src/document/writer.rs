//! SVG serialization of the owned [`ElementNode`] tree

use super::node::{ElementNode, Node};
use crate::domain::{Result, SvgSplitError};
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;
use std::borrow::Cow;

const INDENT_WIDTH: usize = 2;

/// Output settings for [`write_svg`]
#[derive(Debug, Clone, Default)]
pub struct WriteSettings {
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>`
    pub xml_declaration: bool,
    /// DOCTYPE body to emit after the declaration
    pub doctype: Option<&'static str>,
    /// Indent nested elements by two spaces
    pub pretty: bool,
}

/// Serialize `root` into a complete SVG file
///
/// Indentation is only added between the children of elements that hold
/// nothing but elements. Mixed content and whitespace-preserving subtrees
/// are written exactly as stored.
pub fn write_svg(root: &ElementNode, settings: &WriteSettings) -> Result<Vec<u8>> {
    let mut writer = Writer::new(Vec::new());

    if settings.xml_declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(write_error)?;
        writer.get_mut().push(b'\n');
    }
    if let Some(doctype) = settings.doctype {
        writer
            .write_event(Event::DocType(BytesText::from_escaped(doctype)))
            .map_err(write_error)?;
        writer.get_mut().push(b'\n');
    }

    let indent = if settings.pretty { Some(0) } else { None };
    write_element(&mut writer, root, indent)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(bytes)
}

/// `depth` is `None` when no indentation may be added inside `element`
fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &ElementNode,
    depth: Option<usize>,
) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        // values are already escaped
        start.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::Borrowed(value.as_bytes()),
        });
    }

    if element.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_error);
    }

    let element_only = element
        .children
        .iter()
        .all(|child| matches!(child, Node::Element(_)));
    let depth = depth.filter(|_| element_only && !element.preserves_whitespace());

    writer.write_event(Event::Start(start)).map_err(write_error)?;
    for child in &element.children {
        if let Some(depth) = depth {
            write_line_break(writer, depth + 1);
        }
        match child {
            Node::Element(child) => write_element(writer, child, depth.map(|d| d + 1))?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::from_escaped(text.as_str())))
                .map_err(write_error)?,
            Node::CData(data) => writer
                .write_event(Event::CData(BytesCData::new(data.as_str())))
                .map_err(write_error)?,
        }
    }
    if let Some(depth) = depth {
        write_line_break(writer, depth);
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(write_error)
}

fn write_line_break(writer: &mut Writer<Vec<u8>>, depth: usize) {
    let out = writer.get_mut();
    out.push(b'\n');
    out.resize(out.len() + depth * INDENT_WIDTH, b' ');
}

fn write_error(err: impl std::fmt::Display) -> SvgSplitError {
    SvgSplitError::Export(format!("Failed to serialize SVG: {err}"))
}
