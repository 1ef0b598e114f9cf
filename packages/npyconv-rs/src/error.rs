use thiserror::Error;

#[derive(Error, Debug)]
pub enum NpyConvError {
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Not a float tensor: {0}")]
    TypeMismatch(String),

    #[error("Bad tensor shape: {0}")]
    ShapeMismatch(String),

    #[error("Requested {requested} windows but only {available} are available")]
    WindowCountExceeded { requested: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NpyConvError>;
