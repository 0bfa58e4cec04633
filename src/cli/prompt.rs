//! Interactive input.
//!
//! Commands never touch stdin directly; they ask a [`Prompter`], which the
//! binary backs with the terminal and tests back with in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Source of interactive answers.
pub trait Prompter {
    /// Show `message` and read one line of input, with surrounding
    /// whitespace removed. End of input yields an empty answer.
    fn ask(&mut self, message: &str) -> io::Result<String>;
}

/// Line-oriented prompter over any reader/writer pair.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what was shown.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> io::Result<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        self.reader.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Whether a confirmation answer means "yes" (`y` or `yes`, any case).
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn ask_writes_message_and_trims_answer() {
        let mut prompter = LinePrompter::new(Cursor::new("  hello world \n"), Vec::new());

        let answer = prompter.ask("Title? ").unwrap();
        assert_eq!(answer, "hello world");
        assert_eq!(prompter.into_writer(), b"Title? ");
    }

    #[test]
    fn ask_reads_successive_lines() {
        let mut prompter = LinePrompter::new(Cursor::new("first\nsecond\n"), Vec::new());

        assert_eq!(prompter.ask("").unwrap(), "first");
        assert_eq!(prompter.ask("").unwrap(), "second");
        assert_eq!(prompter.ask("").unwrap(), "");
    }

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y", "yes", "YES", "Yes", " y "] {
            assert!(is_affirmative(answer), "{answer:?} should confirm");
        }
    }

    #[test]
    fn everything_else_declines() {
        for answer in ["", "n", "no", "yep", "ye", "1", "true"] {
            assert!(!is_affirmative(answer), "{answer:?} should decline");
        }
    }
}
