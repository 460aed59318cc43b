use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unable to read file {path}: {source}")]
    FileUnreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed line {line}: {reason}")]
    MalformedLine { line: u64, reason: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
