// JSON report artifact — the persistable record of one verification run.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pipeline::Verification;

/// Longest filename `safe_filename` will produce.
const MAX_FILENAME_LEN: usize = 200;

/// The downloadable report object. Field names match the artifact format
/// the review team already consumes.
#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub user_id: u64,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub username: String,
    pub instant_dismissals: Vec<String>,
    pub red_flags: Vec<String>,
    pub groups_count: usize,
    pub friend_count: Option<u64>,
    pub generated_at: DateTime<Utc>,
}

impl VerificationReport {
    pub fn from_verification(v: &Verification) -> Self {
        Self {
            user_id: v.user_id,
            display_name: v.display_name.clone(),
            username: v.username.clone(),
            instant_dismissals: v.instant_dismissals.clone(),
            red_flags: v.red_flags.clone(),
            groups_count: v.groups.len(),
            friend_count: v.friend_count,
            generated_at: v.generated_at,
        }
    }

    pub fn default_filename(&self) -> String {
        safe_filename(&format!("report_{}.json", self.user_id))
    }
}

/// Replace anything outside `[A-Za-z0-9_.-]` with `_` and cap the length.
pub fn safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_FILENAME_LEN)
        .collect()
}

/// Write the report as pretty-printed JSON.
pub fn write_report(path: &Path, report: &VerificationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report to {}", path.display()))
}
