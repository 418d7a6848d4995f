//! Inspect command - decode a strkey and explain its contents

use anyhow::{Context, Result};
use serde::Serialize;
use strkey_lib::{AccountId, MuxedAccount, SecretSeed, VersionByte};

use crate::config::CliConfig;
use crate::ui;

/// JSON shape of an inspect result.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub strkey: String,
    pub version: VersionByte,
    pub prefix: char,
    pub payload_len: usize,
    /// Hex payload; withheld for seeds unless revealed.
    pub payload: Option<String>,
    /// Account address: the key itself, a muxed base, or a seed's public key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,
    /// Multiplexing id of a muxed account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muxed_id: Option<u64>,
}

#[tracing::instrument(skip(config, strkey), fields(len = strkey.len()))]
pub fn run(config: &CliConfig, strkey: &str, reveal: bool) -> Result<()> {
    let strkey = strkey.trim();
    let (version, payload) = strkey_lib::decode_any(strkey).context("not a valid strkey")?;
    tracing::debug!(%version, "inspecting strkey");

    let (account_id, muxed_id) = match version {
        VersionByte::AccountId => (Some(strkey.parse::<AccountId>()?), None),
        VersionByte::MuxedAccount => {
            let muxed: MuxedAccount = strkey.parse()?;
            (Some(muxed.account_id()), Some(muxed.id()))
        }
        VersionByte::Seed => (Some(strkey.parse::<SecretSeed>()?.account_id()), None),
        VersionByte::HashTx | VersionByte::HashX => (None, None),
    };

    let withheld = version == VersionByte::Seed && !reveal;
    let report = InspectReport {
        strkey: if withheld {
            redact(strkey)
        } else {
            strkey.to_string()
        },
        version,
        prefix: version.prefix(),
        payload_len: payload.len(),
        payload: (!withheld).then(|| super::to_hex(&payload)),
        account_id,
        muxed_id,
    };

    super::emit(config, &report, |report| {
        ui::header("Strkey");
        ui::key_value("Strkey", &report.strkey);
        let version = format!("{} ({})", report.version, report.prefix);
        ui::key_value("Version", &version);
        ui::key_value("Payload Length", &report.payload_len.to_string());
        match &report.payload {
            Some(hex) => ui::key_value("Payload", hex),
            None => ui::warning("Seed payload withheld; pass --reveal to print it"),
        }
        if let Some(account) = &report.account_id {
            ui::key_value("Account", &account.to_string());
        }
        if let Some(id) = report.muxed_id {
            ui::key_value("Muxed Id", &id.to_string());
        }
    })
}

/// Keep the type prefix and a short tail so a seed can be recognized, not copied.
fn redact(strkey: &str) -> String {
    let head: String = strkey.chars().take(1).collect();
    let tail: String = strkey
        .chars()
        .skip(strkey.len().saturating_sub(4))
        .collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strkey_lib::test_utils::fixtures;

    #[test]
    fn test_redact_keeps_prefix_and_tail() {
        let redacted = redact(fixtures::SEED);
        assert_eq!(redacted, "S...HOKR");
        assert!(!redacted.contains("BU2RR"));
    }
}
