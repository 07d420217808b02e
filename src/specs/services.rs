// src/specs/services.rs

use tracing::debug;

use crate::admin::AdminSession;
use crate::config::consts::{NO_SERVICE, SERVICE_SELECT_ID};
use crate::core::html;
use crate::data::ServiceEntry;
use crate::error::{Error, Result};

/// Fetch the "no service selected" page and list the selectable services.
pub fn fetch(session: &AdminSession, node_uuid: &str) -> Result<Vec<ServiceEntry>> {
    let page = session.service_param_page(node_uuid, NO_SERVICE)?;
    parse_service_options(&page)
}

/// Options of `<select id="SERVICE">` in page order, minus the `-1` placeholder.
/// An option without `value` submits its text, so the text stands in for the index.
pub fn parse_service_options(doc: &str) -> Result<Vec<ServiceEntry>> {
    let dom = html::parse(doc);

    let select = html::elements(&dom)
        .find(|e| html::attr(e, "id") == Some(SERVICE_SELECT_ID))
        .ok_or(Error::SelectorMissing)?;

    let mut services = Vec::new();
    for option in html::descendants(select).filter(|t| html::is_tag(t, "option")) {
        let name = html::text(&option);
        let index = html::attr(&option, "value").map_or_else(|| name.clone(), str::to_string);
        if index == NO_SERVICE {
            continue;
        }
        services.push(ServiceEntry { index, name });
    }

    debug!(count = services.len(), "service selector parsed");
    Ok(services)
}
