use thiserror::Error;

pub type Result<T> = std::result::Result<T, LessIoError>;

#[derive(Error, Debug)]
pub enum LessIoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Unwrap a required argument, failing before any I/O when it is absent
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(LessIoError::InvalidArgument(name))
}
