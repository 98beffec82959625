use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use super::error::ModelError;

// Mirrors config.json inside the model folder.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModelMetadata {
    pub max_context_length: usize,
    pub vocab_size: u64,
}

impl ModelMetadata {
    pub fn load(model_path: &Path) -> Result<Self, ModelError> {
        if !model_path.is_dir() {
            return Err(ModelError::ModelFolderNotFound(
                model_path.to_path_buf(),
            ));
        }

        let config_path = model_path.join("config.json");
        let file = File::open(&config_path)
            .map_err(|_| ModelError::UnableToLoadConfig)?;
        let reader = BufReader::new(file);
        let metadata = serde_json::from_reader(reader)
            .map_err(|_| ModelError::UnableToLoadConfig)?;
        Ok(metadata)
    }
}

// A bare identifier names a folder under models/; anything that already
// exists on disk is used as-is.
pub fn resolve_model_dir(identifier: &str) -> PathBuf {
    let direct = PathBuf::from(identifier);
    if direct.exists() {
        direct
    } else {
        PathBuf::from("models").join(identifier)
    }
}
