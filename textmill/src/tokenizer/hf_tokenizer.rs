use std::path::Path;

use tokenizers::Tokenizer;

use super::{error::TokenizerError, text_tokenizer::TextTokenizer};

pub struct HfTokenizer {
    tokenizer: Tokenizer,
}

impl HfTokenizer {
    pub fn from_model_dir(model_path: &Path) -> Result<Self, TokenizerError> {
        let tokenizer_path = model_path.join("tokenizer.json");
        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|_| TokenizerError::UnableToLoadTokenizer)?;
        Ok(Self {
            tokenizer,
        })
    }
}

impl TextTokenizer for HfTokenizer {
    fn encode(
        &self,
        text: &str,
    ) -> Result<Vec<u64>, TokenizerError> {
        let encoding = self
            .tokenizer
            .encode(text, false)
            .map_err(|_| TokenizerError::UnableToEncodeText)?;
        Ok(encoding.get_ids().iter().map(|&id| id as u64).collect())
    }

    fn decode(
        &self,
        tokens: &[u64],
    ) -> Result<String, TokenizerError> {
        let ids: Vec<u32> = tokens.iter().map(|&token| token as u32).collect();
        // Special tokens stay in the text so a special stop marker remains
        // visible to the session.
        self.tokenizer
            .decode(&ids, false)
            .map_err(|_| TokenizerError::UnableToDecodeText)
    }
}
