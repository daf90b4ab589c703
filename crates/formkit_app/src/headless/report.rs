//! Report output model for headless scenario runs.

use anyhow::{bail, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Component, Path};

use super::assert::LoginSnapshot;

/// Report status for a scenario run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a scenario run.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub message: Option<String>,
    pub steps_run: usize,
    /// State of the form when the run ended
    pub snapshot: LoginSnapshot,
}

impl HeadlessReport {
    pub fn passed(steps_run: usize, snapshot: LoginSnapshot) -> Self {
        Self {
            scenario: None,
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            message: None,
            steps_run,
            snapshot,
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        message: String,
        snapshot: LoginSnapshot,
    ) -> Self {
        Self {
            scenario: None,
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            message: Some(message),
            steps_run: failed_step_index + 1,
            snapshot,
        }
    }

    /// Tag the report with the scenario's name
    pub fn named(mut self, scenario: Option<String>) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_failed_report_json() {
        let report = HeadlessReport::failed(
            "assert_no_error",
            3,
            "email: shows 'Email is required'".to_string(),
            LoginSnapshot::default(),
        )
        .named(Some("blur email".to_string()));

        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["scenario"], "blur email");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failed_step_index"], 3);
        assert_eq!(json["steps_run"], 4);
        assert_eq!(json["snapshot"]["login_enabled"], false);
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::passed(0, LoginSnapshot::default());
        assert!(report.write_to_path(&PathBuf::from("../out.json")).is_err());
        assert!(report.write_to_path(&PathBuf::from("/tmp/out.json")).is_err());
    }
}
