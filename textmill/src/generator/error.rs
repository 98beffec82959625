use crate::{model::error::ModelError, tokenizer::error::TokenizerError};

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Sample count {nsamples} is not divisible by batch size {batch_size}")]
    InvalidSampleCount {
        nsamples: usize,
        batch_size: usize,
    },
    #[error("Model returned {actual} rows for a batch of {expected}")]
    BatchLengthMismatch {
        expected: usize,
        actual: usize,
    },
    #[error("Model returned a row of {actual} tokens, expected {expected}")]
    RowLengthMismatch {
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
}
