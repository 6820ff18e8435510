use crate::error::DriverError;
use error_stack::Report;

pub mod error;
pub mod storage;

/// Reads `key` from the environment (or `.env`), falling back to `default` when it is unset.
pub(crate) fn env_or(key: &str, default: &str) -> error_stack::Result<String, DriverError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(default.to_string()),
        Err(error) => Err(Report::new(DriverError::from(error))
            .attach_printable(format!("Env {} could not be read", key))),
    }
}
