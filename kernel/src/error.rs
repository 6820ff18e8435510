use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KernelError {
    DuplicateTitle,
    DuplicateUser,
    DataImport,
    InvalidData,
    DataExport,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::DuplicateTitle => write!(f, "Publication with this title already exists"),
            KernelError::DuplicateUser => {
                write!(f, "User with this national id already exists")
            }
            KernelError::DataImport => write!(f, "Failed to import library data"),
            KernelError::InvalidData => write!(f, "Library data is invalid"),
            KernelError::DataExport => write!(f, "Failed to export library data"),
        }
    }
}

impl Context for KernelError {}
