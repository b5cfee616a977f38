use thiserror::Error;

#[derive(Error, Debug)]
pub enum FxgenError {
    #[error("Directory does not exist: {0}")]
    MissingDirectory(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Could not resolve directory '{0}': {1}")]
    ResolveDirectory(String, std::io::Error),

    #[error("Could not create '{0}': {1}")]
    ManifestWrite(String, std::io::Error),
}

pub type Result<T> = std::result::Result<T, FxgenError>;
