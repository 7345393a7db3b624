use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefactorError {
    #[error("Glob pattern error: {0}")]
    PatternError(String),

    #[error("IO Error: {0}")]
    IoError(String),

    #[error("File is not valid UTF-8 text: {0}")]
    EncodingError(String),

    #[error("Regex Error: {0}")]
    RegexError(String),

    #[error("Atomic replace failed: {0}")]
    ReplaceError(String),
}

impl From<std::io::Error> for RefactorError {
    fn from(err: std::io::Error) -> Self {
        RefactorError::IoError(err.to_string())
    }
}

impl From<regex::Error> for RefactorError {
    fn from(err: regex::Error) -> Self {
        RefactorError::RegexError(err.to_string())
    }
}

impl From<glob::PatternError> for RefactorError {
    fn from(err: glob::PatternError) -> Self {
        RefactorError::PatternError(err.to_string())
    }
}

impl From<tempfile::PersistError> for RefactorError {
    fn from(err: tempfile::PersistError) -> Self {
        RefactorError::ReplaceError(err.to_string())
    }
}
