//! `codelist sample` command implementation.

use std::io::Write;

use codelist_markup::SAMPLE;

use crate::error::CliError;

/// Print the bundled sample code, unformatted.
pub(crate) fn execute() -> Result<(), CliError> {
    write_sample(&mut std::io::stdout().lock())
}

fn write_sample(out: &mut impl Write) -> Result<(), CliError> {
    out.write_all(SAMPLE.as_bytes())?;
    out.flush()?;
    Ok(())
}
