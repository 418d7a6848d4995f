//! Validate command - accept or explain the rejection of a strkey

use anyhow::{bail, Result};
use serde::Serialize;
use strkey_lib::{StrkeyError, VersionByte};

use crate::config::CliConfig;
use crate::ui;

/// Machine-readable rejection.
#[derive(Debug, Serialize)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

/// JSON shape of a validate result.
#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionByte>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl ValidateReport {
    fn from_result(result: std::result::Result<VersionByte, StrkeyError>) -> Self {
        match result {
            Ok(version) => Self {
                valid: true,
                version: Some(version),
                error: None,
            },
            Err(err) => Self {
                valid: false,
                version: None,
                error: Some(ValidationError {
                    code: err.code().as_str(),
                    message: err.message(),
                }),
            },
        }
    }
}

#[tracing::instrument(skip(config, strkey), fields(len = strkey.len()))]
pub fn run(config: &CliConfig, strkey: &str, expect: Option<VersionByte>) -> Result<()> {
    let strkey = strkey.trim();
    let result = match expect {
        Some(expected) => strkey_lib::decode(expected, strkey).map(|_| expected),
        None => strkey_lib::version(strkey),
    };
    let report = ValidateReport::from_result(result);

    super::emit(config, &report, print_report)?;

    if !report.valid {
        bail!("strkey rejected");
    }
    Ok(())
}

fn print_report(report: &ValidateReport) {
    match (&report.version, &report.error) {
        (Some(version), _) => ui::success(&format!("Valid {version} strkey")),
        (_, Some(error)) => ui::error(&format!("{} ({})", error.message, error.code)),
        (None, None) => {}
    }
}
