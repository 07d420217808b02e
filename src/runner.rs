// src/runner.rs
use std::{iter, path::PathBuf};

use tracing::{debug, info};

use crate::{
    admin::AdminSession,
    axl::AxlClient,
    config::Config,
    data::{OutputMap, Report, ServiceEntry},
    error::Result,
    file,
    progress::Progress,
    specs,
};

/// Everything scraped from the node, before anything touches the disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collected {
    pub version: String,
    pub node_uuid: String,
    pub services: OutputMap,
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub version: String,
    pub node_uuid: String,
    pub services: OutputMap,
    pub files_written: Vec<PathBuf>,
}

/// Scrape, then write both outputs. The first failing step aborts the run
/// before any file is written.
pub fn run(config: &Config, progress: &mut dyn Progress) -> Result<RunSummary> {
    let Collected { version, node_uuid, services } = collect(config, progress)?;

    let report = Report { hostname: config.hostname.clone(), version, services };
    info!(
        services = report.services.len(),
        parameters = report.parameter_count(),
        "scrape complete"
    );

    let files_written = file::export(&config.out_dir, &report, progress)?;
    Ok(RunSummary {
        version: report.version,
        node_uuid,
        services: report.services,
        files_written,
    })
}

/// AXL version → node UUID → login → service list → one page per service.
pub fn collect(config: &Config, progress: &mut dyn Progress) -> Result<Collected> {
    debug!(?config, "starting");
    let axl = AxlClient::new(config)?;

    progress.section();
    progress.step("Retrieving AXL version");
    let version = specs::axl::fetch_version(&axl)?;
    progress.step_done(&version);
    info!(%version, "AXL version");

    progress.step("Looking up CUCM host process node UUID");
    let node_uuid = specs::axl::fetch_node_uuid(&axl, &config.hostname, &version)?;
    progress.step_done(&node_uuid);
    info!(%node_uuid, "process node");

    let session = AdminSession::new(config)?;
    progress.step("Logging into the admin site");
    session.login()?;
    progress.step_done("Done");

    progress.section();
    progress.step("Scraping list of service indexes");
    let entries = specs::services::fetch(&session, &node_uuid)?;
    progress.step_done("Done");
    info!(count = entries.len(), "services listed");

    let services = collect_parameters(&session, &node_uuid, &entries, progress)?;
    Ok(Collected { version, node_uuid, services })
}

/// Enterprise Wide first, then `entries` in page order.
pub fn collect_parameters(
    session: &AdminSession,
    node_uuid: &str,
    entries: &[ServiceEntry],
    progress: &mut dyn Progress,
) -> Result<OutputMap> {
    let global = ServiceEntry::enterprise_wide();

    progress.begin(entries.len() + 1);
    let mut out = Vec::with_capacity(entries.len() + 1);
    for entry in iter::once(&global).chain(entries) {
        progress.service_started(&entry.name);
        let map = specs::params::fetch(session, node_uuid, entry)?;
        progress.service_done(&entry.name, map.parameters.len());
        out.push(map);
    }
    progress.finish();

    Ok(out)
}
