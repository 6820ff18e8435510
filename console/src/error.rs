use error_stack::Report;
use std::process::{ExitCode, Termination};

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("There is no option {0}")]
    NoSuchOption(String),
    #[error("`{0}` is not a number")]
    InvalidNumber(String),
    #[error("{year}-{month}-{day} is not a valid date")]
    InvalidDate { year: i32, month: u8, day: u8 },
    #[error("National id must consist of 11 digits, got `{0}`")]
    InvalidNationalId(String),
    #[error("Input was closed")]
    EndOfInput,
    #[error(transparent)]
    Io(std::io::Error),
    #[error("Invalid storage configuration")]
    Config,
}

impl ConsoleError {
    /// Input mistakes abandon the current operation but keep the session running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConsoleError::NoSuchOption(_)
                | ConsoleError::InvalidNumber(_)
                | ConsoleError::InvalidDate { .. }
                | ConsoleError::InvalidNationalId(_)
        )
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug)]
pub struct StackTrace(Report<ConsoleError>);

impl From<Report<ConsoleError>> for StackTrace {
    fn from(e: Report<ConsoleError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}
