use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionRunStats {
    pub count: u64,
    pub average_duration: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionStats {
    pub duration: f64,
    pub tokens_count_prompt: u64,
    pub tokens_count_output: u64,
    pub tokens_per_second: f64,
    pub model_run: SessionRunStats,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishReason {
    Stop,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SessionOutput {
    // Decoded contents of the whole context window.
    pub text: String,
    // Decoded text of just the newly generated tokens.
    pub chunk: String,
    pub stats: SessionStats,
    pub finish_reason: Option<FinishReason>,
}

impl SessionOutput {
    pub fn clone_with_finish_reason(
        &self,
        finish_reason: Option<FinishReason>,
    ) -> Self {
        Self {
            text: self.text.clone(),
            chunk: self.chunk.clone(),
            stats: self.stats.clone(),
            finish_reason,
        }
    }
}
