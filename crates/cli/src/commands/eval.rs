use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use lineval_core::{evaluate, parse_line};

/// Read one expression line from `input`, evaluate it, and write the result
///
/// Malformed input propagates as an error; the caller decides how the
/// process dies. An unrecognized operator is not malformed and writes the
/// absent-value text instead.
pub fn eval_command<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read expression from standard input")?;

    debug!("Read input line: {:?}", line);

    let expression = parse_line(&line)?;
    let result = evaluate(&expression);

    writeln!(output, "{result}").context("Failed to write result")?;

    Ok(())
}
