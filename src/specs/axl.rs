// src/specs/axl.rs

use tracing::debug;

use crate::axl::{AxlClient, get_ccm_version_envelope, list_process_node_action, list_process_node_envelope};
use crate::core::xml::{attribute_values, first_element_text};
use crate::error::{Error, Result};

/// Ask the node for its version and reduce it to the AXL schema version (`major.minor`).
pub fn fetch_version(axl: &AxlClient) -> Result<String> {
    let body = axl.call(get_ccm_version_envelope(), None)?;
    parse_version(&body)
}

/// `<version>14.0.1.12900-1</version>` → `"14.0"`.
pub fn parse_version(body: &str) -> Result<String> {
    let full = first_element_text(body, "version")?
        .filter(|v| !v.is_empty())
        .ok_or(Error::VersionNotFound)?;
    debug!(%full, "CCM version");
    Ok(full.split('.').take(2).collect::<Vec<_>>().join("."))
}

/// Look up the process node named `hostname` and return its UUID.
pub fn fetch_node_uuid(axl: &AxlClient, hostname: &str, version: &str) -> Result<String> {
    let action = list_process_node_action(version);
    let body = axl.call(list_process_node_envelope(version, hostname), Some(&action))?;
    parse_node_uuid(&body, hostname)
}

/// First braced `uuid` attribute, braces stripped and lowercased:
/// `uuid="{ABC-123}"` → `"abc-123"`.
pub fn parse_node_uuid(body: &str, hostname: &str) -> Result<String> {
    attribute_values(body, "uuid")?
        .iter()
        .find_map(|v| v.strip_prefix('{')?.strip_suffix('}').map(str::to_lowercase))
        .ok_or_else(|| Error::NodeNotFound(s!(hostname)))
}
