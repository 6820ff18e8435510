use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    Serde(serde_json::Error),
    #[error(transparent)]
    Csv(csv::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Date(time::error::ComponentRange),
    #[error("Unknown data format `{0}`, expected `json` or `csv`")]
    UnknownFormat(String),
}

impl From<std::io::Error> for DriverError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<csv::Error> for DriverError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<time::error::ComponentRange> for DriverError {
    fn from(value: time::error::ComponentRange) -> Self {
        Self::Date(value)
    }
}

/// Lifts a driver failure into the [`KernelError`] kind the caller reports.
pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self, context: KernelError) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, E> ConvertError for Result<T, E>
where
    E: Into<DriverError>,
{
    type Ok = T;
    fn convert_error(self, context: KernelError) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::new(error.into()).change_context(context))
    }
}
