//! Scan configuration.
//!
//! One `ScanConfig` describes one SCLM location to watch. It is read from
//! TOML:
//!
//! ```toml
//! project = "PAYROLL"
//! alternate = "PAYROLL"
//! group = "DEV1"
//! types = ["COBOL", "COPYBOOK"]
//! job_card = "//SCLMJOB JOB (ACCT),'SCLM',CLASS=A,MSGCLASS=X"
//! degraded_fetch = "reject"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SclmError};
use crate::model::SclmLocation;

/// What to do when the remote report could not be obtained but a baseline
/// exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegradedFetchPolicy {
    /// Fail the reconciliation; the baseline is kept as is
    #[default]
    Reject,
    /// Reconcile against an empty snapshot (every baseline file becomes Deleted)
    Reconcile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    pub project: String,
    pub alternate: String,
    pub group: String,
    /// Member types of interest; empty means every type
    #[serde(default)]
    pub types: Vec<String>,
    /// JOB statement prefixed to the DBUTIL job
    #[serde(default = "default_job_card")]
    pub job_card: String,
    #[serde(default)]
    pub degraded_fetch: DegradedFetchPolicy,
}

fn default_job_card() -> String {
    "//SCLMDBU JOB ,'SCLM DBUTIL',CLASS=A,MSGCLASS=X".to_string()
}

impl ScanConfig {
    pub fn new(location: SclmLocation) -> Self {
        Self {
            project: location.project,
            alternate: location.alternate,
            group: location.group,
            types: Vec::new(),
            job_card: default_job_card(),
            degraded_fetch: DegradedFetchPolicy::default(),
        }
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// `SclmError::InvalidConfig` on TOML syntax errors, unknown keys, or an
    /// empty project/alternate/group/job card.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ScanConfig = toml::from_str(text).map_err(|e| SclmError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    ///
    /// # Errors
    ///
    /// `SclmError::Io` if the file cannot be read, otherwise as
    /// [`ScanConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// # Errors
    ///
    /// `SclmError::InvalidConfig` naming the first empty required field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("project", &self.project),
            ("alternate", &self.alternate),
            ("group", &self.group),
            ("job_card", &self.job_card),
        ] {
            if value.trim().is_empty() {
                return Err(SclmError::InvalidConfig {
                    reason: format!("`{}` must not be empty", field),
                });
            }
        }
        if let Some(bad) = self.types.iter().find(|t| t.trim().is_empty()) {
            return Err(SclmError::InvalidConfig {
                reason: format!("type filter entry {:?} is blank", bad),
            });
        }
        Ok(())
    }

    pub fn location(&self) -> SclmLocation {
        SclmLocation::new(
            self.project.clone(),
            self.alternate.clone(),
            self.group.clone(),
        )
    }
}
