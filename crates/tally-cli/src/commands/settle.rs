//! Settle command - settle payers, items and splits from a JSON file.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tally_driver::DriverConfig;
use tally_settle::{currency, SettlementDraft};

use super::{print_json, print_settlement, settlement_result};

/// The JSON document read by `tally settle`.
#[derive(Deserialize)]
struct SettleInput {
    currency: Option<String>,
    #[serde(flatten)]
    draft: SettlementDraft,
}

pub fn run(
    file: &Path,
    config: &DriverConfig,
    digits: Option<u32>,
    json: bool,
) -> miette::Result<()> {
    let source = fs::read_to_string(file)
        .map_err(|e| miette::miette!("Failed to read {}: {}", file.display(), e))?;
    let input: SettleInput = serde_json::from_str(&source)
        .map_err(|e| miette::miette!("Invalid settlement input in {}: {}", file.display(), e))?;

    // An explicit --digits wins, then the file's currency, then the session's
    let digits = digits
        .or_else(|| input.currency.as_deref().map(currency::digits_for))
        .unwrap_or(config.digits);
    tracing::debug!(digits, "settling {}", file.display());

    let settlement = input.draft.settle(digits);

    if json {
        print_json(&settlement)?;
    } else {
        print_settlement(&settlement);
    }
    settlement_result(&settlement)
}
