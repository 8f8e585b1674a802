use thiserror::Error;

/// Calendar writing errors
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Invalid document: {0}")]
    InvalidDocument(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type WriteResult<T> = std::result::Result<T, WriteError>;
