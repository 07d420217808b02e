// src/core/xml.rs

// Streaming lookups over AXL SOAP responses. Names match on the local part,
// so `ns:version` and `version` are the same element.

use quick_xml::{Reader, events::Event};

use crate::error::{Error, Result};

fn xml_err(e: impl std::fmt::Display) -> Error {
    Error::Xml(e.to_string())
}

/// Text of the first element named `local`. An empty element yields `Some("")`.
pub fn first_element_text(xml: &str, local: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut inside = false;
    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Start(e) if e.local_name().as_ref() == local.as_bytes() => inside = true,
            Event::Empty(e) if e.local_name().as_ref() == local.as_bytes() => return Ok(Some(s!())),
            Event::Text(t) if inside => return Ok(Some(t.unescape().map_err(xml_err)?.into_owned())),
            Event::End(e) if inside && e.local_name().as_ref() == local.as_bytes() => return Ok(Some(s!())),
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Values of every attribute named `local`, in document order.
pub fn attribute_values(xml: &str, local: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut out = Vec::new();
    loop {
        match reader.read_event().map_err(xml_err)? {
            Event::Start(e) | Event::Empty(e) => {
                for attr in e.attributes() {
                    let attr = attr.map_err(xml_err)?;
                    if attr.key.local_name().as_ref() == local.as_bytes() {
                        out.push(attr.unescape_value().map_err(xml_err)?.into_owned());
                    }
                }
            }
            Event::Eof => return Ok(out),
            _ => {}
        }
    }
}
