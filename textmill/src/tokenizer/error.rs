#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("Unable to load tokenizer")]
    UnableToLoadTokenizer,
    #[error("Unable to encode text")]
    UnableToEncodeText,
    #[error("Unable to decode tokens")]
    UnableToDecodeText,
}
