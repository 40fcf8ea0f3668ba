use indexmap::IndexMap;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{IcecastGuardError, Result};

use super::XmlValue;

/// Parses an XML document into a generic value tree rooted at the
/// document element.
///
/// Attribute values and element text are both coerced with
/// [`XmlValue::scalar`], so numeric-looking content arrives as numbers.
///
/// # Errors
/// Returns [`IcecastGuardError::XmlParse`] for malformed markup or a
/// document without a root element.
pub fn parse_document(input: &str) -> Result<XmlValue> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let attrs = read_attributes(&start)?;
                return parse_element(&mut reader, attrs);
            }
            Ok(Event::Empty(start)) => {
                let attrs = read_attributes(&start)?;
                return Ok(finish_element(attrs, IndexMap::new(), ""));
            }
            Ok(Event::Eof) => {
                return Err(IcecastGuardError::XmlParse(
                    "document has no root element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(err) => return Err(IcecastGuardError::XmlParse(err.to_string())),
        }
    }
}

/// Consumes events until the current element's end tag and assembles its value.
fn parse_element(
    reader: &mut Reader<&[u8]>,
    attrs: IndexMap<String, XmlValue>,
) -> Result<XmlValue> {
    let mut children: IndexMap<String, XmlValue> = IndexMap::new();
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = element_name(&start);
                let child_attrs = read_attributes(&start)?;
                let child = parse_element(reader, child_attrs)?;
                insert_child(&mut children, name, child);
            }
            Ok(Event::Empty(start)) => {
                let name = element_name(&start);
                let child_attrs = read_attributes(&start)?;
                let child = finish_element(child_attrs, IndexMap::new(), "");
                insert_child(&mut children, name, child);
            }
            Ok(Event::Text(content)) => {
                let decoded = content
                    .decode()
                    .map_err(|err| IcecastGuardError::XmlParse(err.to_string()))?;
                text.push_str(&decoded);
            }
            Ok(Event::End(_)) => return Ok(finish_element(attrs, children, &text)),
            Ok(Event::Eof) => {
                return Err(IcecastGuardError::XmlParse(
                    "unexpected end of document".to_string(),
                ));
            }
            Ok(_) => {}
            Err(err) => return Err(IcecastGuardError::XmlParse(err.to_string())),
        }
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn read_attributes(start: &BytesStart<'_>) -> Result<IndexMap<String, XmlValue>> {
    let mut attrs = IndexMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|err| IcecastGuardError::XmlParse(err.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        attrs.insert(key, XmlValue::scalar(&raw));
    }
    Ok(attrs)
}

/// A leaf element becomes a coerced scalar; anything with attributes or
/// child elements becomes a map (attributes first, then children in
/// document order). Mixed text next to child elements is discarded.
fn finish_element(
    attrs: IndexMap<String, XmlValue>,
    children: IndexMap<String, XmlValue>,
    text: &str,
) -> XmlValue {
    if attrs.is_empty() && children.is_empty() {
        return XmlValue::scalar(text.trim());
    }
    let mut entries = attrs;
    entries.extend(children);
    XmlValue::Map(entries)
}

/// A repeated child name is promoted to a list, preserving document order.
fn insert_child(children: &mut IndexMap<String, XmlValue>, name: String, value: XmlValue) {
    match children.get_mut(&name) {
        Some(XmlValue::List(values)) => values.push(value),
        Some(existing) => {
            let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
            if let XmlValue::List(values) = existing {
                values.push(first);
                values.push(value);
            }
        }
        None => {
            children.insert(name, value);
        }
    }
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
