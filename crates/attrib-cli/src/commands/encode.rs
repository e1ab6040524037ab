//! Encode command implementation.

use crate::cli::EncodeArgs;
use crate::commands::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use attrib_domain::Attribution;
use attrib_parcel::encode_combination;
use tracing::debug;

/// Parse a JSON array of attributions.
///
/// Each element goes through the same construction checks as decoding.
pub fn parse_attributions(json: &[u8]) -> Result<Vec<Attribution>> {
    let value: serde_json::Value = serde_json::from_slice(json)?;
    if !value.is_array() {
        return Err(CliError::InvalidInput(
            "expected a JSON array of attributions".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Execute the encode command.
pub fn execute_encode(args: EncodeArgs, formatter: &Formatter) -> Result<()> {
    let json = read_input(&args.input)?;
    let attributions = parse_attributions(&json)?;

    let bytes = encode_combination(Some(attributions.as_slice()));
    debug!(count = attributions.len(), bytes = bytes.len(), "Encoded combination");
    std::fs::write(&args.output, &bytes)?;

    println!(
        "{}",
        formatter.info(&format!(
            "Wrote {} attribution(s) to {}",
            attributions.len(),
            args.output.display()
        ))
    );

    Ok(())
}
