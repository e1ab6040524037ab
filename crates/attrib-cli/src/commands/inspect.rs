//! Inspect command implementation.

use crate::cli::InspectArgs;
use crate::commands::read_input;
use crate::error::Result;
use crate::output::Formatter;
use attrib_parcel::decode_combination;

/// Execute the inspect command.
pub fn execute_inspect(args: InspectArgs, formatter: &Formatter) -> Result<()> {
    let bytes = read_input(&args.input)?;
    let attributions = decode_combination(&bytes)?;

    println!("{}", formatter.format_attributions(attributions.as_deref())?);

    Ok(())
}
