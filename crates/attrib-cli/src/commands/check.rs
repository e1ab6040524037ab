//! Check command implementation.

use crate::cli::CheckArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use attrib_gatekeeper::{Gatekeeper, ValidationConfig, ValidationResult};
use attrib_parcel::decode_combination;
use tracing::info;

/// Execute the check command.
///
/// Returns the verdict so the caller can pick an exit code.
pub fn execute_check(
    args: CheckArgs,
    config: &ValidationConfig,
    formatter: &Formatter,
) -> Result<ValidationResult> {
    let bytes = read_input(&args.input)?;
    let attributions = decode_combination(&bytes)?;

    let config = if args.strict {
        ValidationConfig {
            enforce_tag_length: true,
            ..config.clone()
        }
    } else {
        config.clone()
    };

    let gatekeeper = Gatekeeper::new(config);
    let result = gatekeeper.validate(attributions.as_deref());
    info!(
        input = %args.input.display(),
        accepted = result.is_accepted(),
        "Checked attribution combination"
    );

    println!("{}", formatter.format_verdict(&result)?);

    Ok(result)
}
