// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{
    ID_COL_WIDTH, JSON_FILE, LABEL_COL_WIDTH, MARKDOWN_FILE, SERVICE_COL_WIDTH,
};
use crate::data::{Report, ServiceParameterMap};
use crate::error::{Error, Result};
use crate::progress::Progress;

/// Write `output.json` and `output.md` into `out_dir`, overwriting both.
/// Returns the paths written, JSON first.
pub fn export(out_dir: &Path, report: &Report, progress: &mut dyn Progress) -> Result<Vec<PathBuf>> {
    ensure_directory(out_dir)?;

    progress.step("Writing JSON output");
    let json = write_json(&out_dir.join(JSON_FILE), &report.services)?;
    progress.step_done(JSON_FILE);

    progress.step("Writing markdown output");
    let md = write_markdown(&out_dir.join(MARKDOWN_FILE), report)?;
    progress.step_done(MARKDOWN_FILE);

    Ok(vec![json, md])
}

pub fn write_json(path: &Path, services: &[ServiceParameterMap]) -> Result<PathBuf> {
    let contents = to_json_string(services)?;
    fs::write(path, contents).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

pub fn write_markdown(path: &Path, report: &Report) -> Result<PathBuf> {
    fs::write(path, to_markdown_string(report)).map_err(|e| Error::io(path, e))?;
    Ok(path.to_path_buf())
}

/// Pretty JSON, two-space indent, no trailing newline. Same input, same bytes.
pub fn to_json_string(services: &[ServiceParameterMap]) -> Result<String> {
    Ok(serde_json::to_string_pretty(services)?)
}

/// Heading block plus a fixed-width table: one row per service, then one row
/// per parameter with the service column blank. Widths are paddings only.
pub fn to_markdown_string(report: &Report) -> String {
    let mut out = String::new();
    out.push_str("# Service Parameter Label to ID Mapping\n\n");
    out.push_str(&format!("**Hostname:** {}\n\n", report.hostname));
    out.push_str(&format!("**AXL Version:** {}\n\n", report.version));

    out.push_str(&table_row("Service", "Parameter ID", "Label"));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        "-".repeat(SERVICE_COL_WIDTH),
        "-".repeat(ID_COL_WIDTH),
        "-".repeat(LABEL_COL_WIDTH),
    ));

    for service in &report.services {
        out.push_str(&table_row(&service.service, "", ""));
        for param in &service.parameters {
            out.push_str(&table_row("", &param.id, &param.label));
        }
    }
    out
}

fn table_row(service: &str, id: &str, label: &str) -> String {
    format!(
        "| {} | {} | {} |\n",
        pad!(service, SERVICE_COL_WIDTH),
        pad!(id, ID_COL_WIDTH),
        pad!(label, LABEL_COL_WIDTH),
    )
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        ));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ParameterEntry;

    fn report() -> Report {
        Report {
            hostname: s!("cucm-pub.example.com"),
            version: s!("14.0"),
            services: vec![
                ServiceParameterMap {
                    service: s!("Enterprise Wide"),
                    parameters: vec![ParameterEntry { id: s!("ClusterID"), label: s!("Cluster ID") }],
                },
                ServiceParameterMap { service: s!("Cisco TFTP"), parameters: vec![] },
            ],
        }
    }

    #[test]
    fn json_matches_field_names_and_indent() {
        let json = to_json_string(&report().services).unwrap();
        let expected = r#"[
  {
    "service": "Enterprise Wide",
    "parameters": [
      {
        "id": "ClusterID",
        "label": "Cluster ID"
      }
    ]
  },
  {
    "service": "Cisco TFTP",
    "parameters": []
  }
]"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn markdown_heading_and_rows() {
        let md = to_markdown_string(&report());
        let lines: Vec<&str> = md.lines().collect();

        assert_eq!(lines[0], "# Service Parameter Label to ID Mapping");
        assert_eq!(lines[2], "**Hostname:** cucm-pub.example.com");
        assert_eq!(lines[4], "**AXL Version:** 14.0");
        assert_eq!(
            lines[6],
            format!("| {:<60} | {:<50} | {:<81} |", "Service", "Parameter ID", "Label")
        );
        assert_eq!(lines[7], format!("| {} | {} | {} |", "-".repeat(60), "-".repeat(50), "-".repeat(81)));
        assert_eq!(lines[8], format!("| {:<60} | {} | {} |", "Enterprise Wide", " ".repeat(50), " ".repeat(81)));
        assert_eq!(lines[9], format!("| {} | {:<50} | {:<81} |", " ".repeat(60), "ClusterID", "Cluster ID"));
        assert_eq!(lines[10], format!("| {:<60} | {} | {} |", "Cisco TFTP", " ".repeat(50), " ".repeat(81)));
        assert_eq!(lines.len(), 11);
        assert!(md.ends_with(" |\n"));
    }

    #[test]
    fn rows_have_fixed_width() {
        let md = to_markdown_string(&report());
        let width = 2 + 60 + 3 + 50 + 3 + 81 + 2;
        for line in md.lines().skip(6) {
            assert_eq!(line.chars().count(), width, "{line:?}");
        }
    }

    #[test]
    fn long_content_is_not_truncated() {
        let mut r = report();
        let long = "X".repeat(70);
        r.services[1].service = long.clone();
        let md = to_markdown_string(&r);
        assert!(md.contains(&format!("| {long} | ")));
    }
}
