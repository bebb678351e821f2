//! Yes/no prompts on the terminal

use std::io::{self, BufRead, Write};

use crate::services::Confirm;

/// Print `prompt` with a `(y/n)` suffix and read one answer line
///
/// Only `y` or `yes` (any case) count as agreement. End of input is a no.
pub fn ask_yes_no<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{} (y/n): ", prompt)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Asks on stdin/stdout
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        ask_yes_no(&mut input, &mut output, prompt).unwrap_or(false)
    }
}
