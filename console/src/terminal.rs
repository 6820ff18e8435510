use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::ConsoleError;

/// Line oriented console: prompts and results go to `output`, answers come from `input`.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn print_line(&mut self, line: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    pub fn print_lines<I>(&mut self, lines: I) -> Result<(), ConsoleError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for line in lines {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Asks again until a non-blank answer is given.
    pub fn read_text(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        loop {
            let line = self.read_line(prompt)?;
            if !line.is_empty() {
                return Ok(line);
            }
        }
    }

    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, ConsoleError> {
        let line = self.read_line(prompt)?;
        line.parse().map_err(|_| ConsoleError::InvalidNumber(line))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::error::ConsoleError;

    use super::Terminal;

    #[test]
    fn read_values() -> Result<(), ConsoleError> {
        let input = Cursor::new("\n  Dune \n42\nabc\n");
        let mut terminal = Terminal::new(input, Vec::new());

        assert_eq!(terminal.read_text("Title:")?, "Dune");
        assert_eq!(terminal.read_number::<u32>("Pages:")?, 42);
        assert!(matches!(
            terminal.read_number::<u32>("Pages:"),
            Err(ConsoleError::InvalidNumber(value)) if value == "abc"
        ));
        assert!(matches!(
            terminal.read_text("Title:"),
            Err(ConsoleError::EndOfInput)
        ));

        let output = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(output.matches("Title:").count(), 3);
        Ok(())
    }
}
