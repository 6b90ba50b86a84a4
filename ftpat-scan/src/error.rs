use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScanResult<T> = Result<T, ScanError>;
