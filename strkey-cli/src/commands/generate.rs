//! Generate command - new random seed and its account address

use anyhow::Result;
use serde::Serialize;
use strkey_lib::{AccountId, SecretSeed};

use crate::config::CliConfig;
use crate::ui;

/// JSON shape of a generated key pair.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub account_id: AccountId,
    pub seed: String,
}

#[tracing::instrument(skip(config))]
pub fn run(config: &CliConfig) -> Result<()> {
    let seed = SecretSeed::generate();
    let report = GenerateReport {
        account_id: seed.account_id(),
        seed: seed.to_strkey(),
    };
    tracing::info!(account = %report.account_id, "generated key pair");

    super::emit(config, &report, |report| {
        ui::header("New Key Pair");
        ui::key_value("Account", &report.account_id.to_string());
        ui::secret_value("Seed", &report.seed);
        ui::warning("Store the seed securely; anyone holding it controls the account");
    })
}
