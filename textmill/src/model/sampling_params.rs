use serde::{Deserialize, Serialize};

// Passed through to the backend untouched; 0 disables top-k and top-p.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_k: 0,
            top_p: 0.0,
        }
    }
}
