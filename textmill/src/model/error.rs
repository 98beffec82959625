use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model folder not found at {}", .0.display())]
    ModelFolderNotFound(PathBuf),
    #[error("Unable to load model configuration")]
    UnableToLoadConfig,
    #[error("Batch request contains no rows")]
    EmptyBatchRequest,
    #[error("Model computation failed: {0}")]
    ComputeFailed(String),
}
