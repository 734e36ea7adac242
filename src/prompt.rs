use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::Result;

pub const GOODBYE: &str = "Thank you, goodbye.";
pub const APOLOGY: &str = "Sorry, I didn't understand that, please enter an integer.";

/// Keeps asking until the user types an integer or quits.
///
/// Any line containing a `q` quits, as does the end of input; both give `None`.
pub fn read_integer<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<i64>>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed while prompting");
            return Ok(None);
        }
        if line.contains('q') {
            writeln!(output, "{GOODBYE}")?;
            return Ok(None);
        }
        match line.trim().parse::<i64>() {
            Ok(number) => return Ok(Some(number)),
            Err(e) => {
                debug!(input = line.trim(), error = %e, "rejected input");
                writeln!(output, "{APOLOGY}")?;
            }
        }
    }
}
