use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Print `text` or the JSON form of `value`, depending on `format`.
pub fn render<T>(value: &T, text: &str, format: OutputFormat, pretty: bool) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => writeln!(stdout, "{text}")?,
        OutputFormat::Json if pretty => {
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut stdout, value)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Clear the terminal and print a full page.
pub fn repaint(page: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "\x1b[2J\x1b[H{page}")?;
    stdout.flush()?;
    Ok(())
}
