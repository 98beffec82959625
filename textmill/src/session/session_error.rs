use std::path::PathBuf;

use super::session_config::ConfigError;
use crate::{
    generator::error::GeneratorError, tokenizer::error::TokenizerError,
};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Unable to read prompt file {}", .0.display())]
    PromptUnreadable(PathBuf),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}
