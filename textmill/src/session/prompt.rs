use std::{
    fs,
    path::{Path, PathBuf},
};

use super::session_error::SessionError;

#[derive(Debug, Clone)]
pub enum PromptSource {
    // Literal text, used exactly as given.
    Text(String),
    // Read from a file; an unreadable file is fatal.
    File(PathBuf),
    // File contents when the string names an existing file, the literal
    // string otherwise.
    Auto(String),
}

impl PromptSource {
    pub fn resolve(&self) -> Result<String, SessionError> {
        match self {
            PromptSource::Text(text) => Ok(text.clone()),
            PromptSource::File(path) => Self::read(path),
            PromptSource::Auto(value) => {
                let path = Path::new(value);
                if path.is_file() {
                    Self::read(path)
                } else {
                    Ok(value.clone())
                }
            },
        }
    }

    fn read(path: &Path) -> Result<String, SessionError> {
        fs::read_to_string(path)
            .map_err(|_| SessionError::PromptUnreadable(path.to_path_buf()))
    }
}
