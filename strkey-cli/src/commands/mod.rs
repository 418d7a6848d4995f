//! CLI command implementations

pub mod decode;
pub mod encode;
pub mod generate;
pub mod inspect;
pub mod validate;

use serde::Serialize;

use crate::config::CliConfig;

/// Write `report` as JSON when configured to, otherwise call `text`.
pub fn emit<T: Serialize>(
    config: &CliConfig,
    report: &T,
    text: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if config.is_json() {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        text(report);
    }
    Ok(())
}

/// Lowercase hex of `bytes`.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
