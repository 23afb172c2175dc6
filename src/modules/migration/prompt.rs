use std::io::{self, Write};

pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Reads one line from standard input; only an explicit `yes` proceeds.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(is_affirmative(&line))
    }
}

pub fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("yes")
}
