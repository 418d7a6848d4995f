//! Encode command - hex payload to strkey

use anyhow::{Context, Result};
use serde::Serialize;
use strkey_lib::VersionByte;

use crate::config::CliConfig;
use crate::ui;

/// JSON shape of an encode result.
#[derive(Debug, Serialize)]
pub struct EncodeReport {
    pub version: VersionByte,
    pub strkey: String,
}

#[tracing::instrument(skip(config, payload))]
pub fn run(config: &CliConfig, version: VersionByte, payload: &str) -> Result<()> {
    let hex_payload = payload.trim();
    let hex_payload = hex_payload.strip_prefix("0x").unwrap_or(hex_payload);
    let bytes = hex::decode(hex_payload).context("payload is not valid hex")?;
    tracing::debug!(payload_len = bytes.len(), "encoding payload");

    let strkey = strkey_lib::encode(version, &bytes)?;
    let report = EncodeReport { version, strkey };

    super::emit(config, &report, |report| {
        if version == VersionByte::Seed {
            ui::secret_value("Strkey", &report.strkey);
        } else {
            println!("{}", report.strkey);
        }
    })
}
