// src/data.rs
use serde::{Deserialize, Serialize};

use crate::config::consts::{GLOBAL_SERVICE_INDEX, GLOBAL_SERVICE_NAME};

/// One `<option>` of the service selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub index: String,
    pub name: String,
}

impl ServiceEntry {
    pub fn new(index: impl Into<String>, name: impl Into<String>) -> Self {
        Self { index: index.into(), name: name.into() }
    }

    /// The cluster-wide pseudo-service; never listed in the selector.
    pub fn enterprise_wide() -> Self {
        Self::new(GLOBAL_SERVICE_INDEX, GLOBAL_SERVICE_NAME)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterEntry {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceParameterMap {
    pub service: String,
    pub parameters: Vec<ParameterEntry>,
}

/// Discovery order: Enterprise Wide first, then the selector's services.
pub type OutputMap = Vec<ServiceParameterMap>;

/// What the writers need: the map plus the heading block of `output.md`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub hostname: String,
    pub version: String,
    pub services: OutputMap,
}

impl Report {
    pub fn parameter_count(&self) -> usize {
        self.services.iter().map(|s| s.parameters.len()).sum()
    }
}
