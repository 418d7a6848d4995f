//! Decode command - strkey to version and raw payload

use anyhow::{Context, Result};
use serde::Serialize;
use strkey_lib::VersionByte;

use crate::config::CliConfig;
use crate::ui;

/// JSON shape of a decode result.
#[derive(Debug, Serialize)]
pub struct DecodeReport {
    pub version: VersionByte,
    pub payload_len: usize,
    /// Hex payload; withheld for seeds unless revealed.
    pub payload: Option<String>,
}

#[tracing::instrument(skip(config, strkey), fields(len = strkey.len()))]
pub fn run(
    config: &CliConfig,
    strkey: &str,
    expect: Option<VersionByte>,
    reveal: bool,
) -> Result<()> {
    let strkey = strkey.trim();
    let (version, payload) = match expect {
        Some(expected) => {
            tracing::debug!(%expected, "decoding with expected version");
            let payload = strkey_lib::decode(expected, strkey)
                .with_context(|| format!("not a valid {expected} strkey"))?;
            (expected, payload)
        }
        None => strkey_lib::decode_any(strkey).context("not a valid strkey")?,
    };

    let withheld = version == VersionByte::Seed && !reveal;
    let report = DecodeReport {
        version,
        payload_len: payload.len(),
        payload: (!withheld).then(|| super::to_hex(&payload)),
    };

    super::emit(config, &report, |report| {
        ui::header("Decoded Strkey");
        ui::key_value("Version", &report.version.to_string());
        ui::key_value("Payload Length", &report.payload_len.to_string());
        match &report.payload {
            Some(hex) => ui::key_value("Payload", hex),
            None => ui::warning("Seed payload withheld; pass --reveal to print it"),
        }
    })
}
