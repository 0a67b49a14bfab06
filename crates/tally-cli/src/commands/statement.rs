//! Statement command - parse a statement and settle it.

use tally_driver::{settle_statement, DriverConfig, DriverError};

use super::{print_error, print_json, print_settlement, settlement_result};

pub fn run(text: &str, config: &DriverConfig, json: bool) -> miette::Result<()> {
    let settled = match settle_statement(text, config) {
        Ok(settled) => settled,
        Err(DriverError::Syntax(errors)) => {
            for err in &errors {
                print_error(text, err.span(), &err.to_string());
            }
            return Err(miette::miette!("{} parse errors", errors.len()));
        }
        Err(err) => return Err(miette::miette!("{}", err)),
    };

    if json {
        print_json(&settled.settlement)?;
    } else {
        println!("{} ({} digits)\n", config.currency, config.digits);
        print_settlement(&settled.settlement);
    }
    settlement_result(&settled.settlement)
}
