// src/specs/params.rs

use scraper::ElementRef;
use tracing::{debug, trace};

use crate::admin::AdminSession;
use crate::config::consts::PARAM_ROW_CLASS;
use crate::core::html;
use crate::data::{ParameterEntry, ServiceEntry, ServiceParameterMap};
use crate::error::{Error, Result};

const CONTROL_TAGS: [&str; 3] = ["input", "select", "textarea"];

/// Fetch one service's parameter page and map its settable parameters.
pub fn fetch(session: &AdminSession, node_uuid: &str, service: &ServiceEntry) -> Result<ServiceParameterMap> {
    let page = session.service_param_page(node_uuid, &service.index)?;
    let parameters = parse_param_rows(&page, &service.name)?;
    debug!(service = %service.name, index = %service.index, count = parameters.len(), "parameters parsed");
    Ok(ServiceParameterMap { service: service.name.clone(), parameters })
}

/// Walk every `content-form-stripe-*` row in page order.
///
/// Row layout (ccmadmin templates):
/// - 1st cell: `<label><a …>Label</a></label>`
/// - 2nd cell: the control; its `id` is the parameter id.
///
/// Rows whose first control is `type="hidden"` are display-only and skipped.
/// `service` only labels errors.
pub fn parse_param_rows(doc: &str, service: &str) -> Result<Vec<ParameterEntry>> {
    let dom = html::parse(doc);

    let rows = html::elements(&dom)
        .filter(|t| html::is_tag(t, "tr") && html::has_class_containing(t, PARAM_ROW_CLASS));

    let mut out = Vec::new();
    for (i, row) in rows.enumerate() {
        let parsed = parse_row(row).map_err(|reason| Error::ParamRow {
            service: s!(service),
            row: i + 1,
            reason,
        })?;
        match parsed {
            Some(entry) => out.push(entry),
            None => trace!(service, row = i + 1, "display-only row skipped"),
        }
    }
    Ok(out)
}

fn parse_row(row: ElementRef<'_>) -> Result<Option<ParameterEntry>, &'static str> {
    let cells: Vec<ElementRef> = html::descendants(row)
        .filter(|t| html::is_tag(t, "td"))
        .collect();
    let [label_cell, control_cell, ..] = cells.as_slice() else {
        return Err("expected a label cell and a value cell");
    };

    let control = html::descendants(*control_cell)
        .find(|t| html::is_any_tag(t, &CONTROL_TAGS))
        .ok_or("no input, select or textarea in the value cell")?;

    if html::attr(&control, "type") == Some("hidden") {
        return Ok(None);
    }

    let id = html::attr(&control, "id").ok_or("control has no id attribute")?;

    let label = html::descendants(*label_cell)
        .find(|t| html::is_tag(t, "label"))
        .ok_or("no label in the first cell")?;
    // Labels link to the parameter help; the anchor text is the label proper.
    let text_tag = html::descendants(label)
        .find(|t| html::is_tag(t, "a"))
        .unwrap_or(label);

    Ok(Some(ParameterEntry { id: s!(id), label: html::text(&text_tag) }))
}
