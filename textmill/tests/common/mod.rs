#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use textmill::{
    model::{
        error::ModelError,
        metadata::ModelMetadata,
        model_session::{BatchRequest, ModelSession},
    },
    tokenizer::{error::TokenizerError, text_tokenizer::TextTokenizer},
};

pub fn chunk(text: &str) -> Vec<u64> {
    text.chars().map(|character| character as u64).collect()
}

// One token per character, so tests can read token streams as text.
pub struct MockTokenizer;

impl TextTokenizer for MockTokenizer {
    fn encode(
        &self,
        text: &str,
    ) -> Result<Vec<u64>, TokenizerError> {
        Ok(chunk(text))
    }

    fn decode(
        &self,
        tokens: &[u64],
    ) -> Result<String, TokenizerError> {
        tokens
            .iter()
            .map(|&token| {
                char::from_u32(token as u32)
                    .ok_or(TokenizerError::UnableToDecodeText)
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub contexts: Vec<Vec<u64>>,
    pub chunk_length: usize,
    pub seed: u64,
}

// Scripted stand-in for a model backend: appends the next scripted chunk to
// every row of the batch, records every request, and can be told to fail
// from a given call onwards or to drop the last row of each response.
pub struct MockSession {
    metadata: ModelMetadata,
    chunks: Vec<Vec<u64>>,
    fail_from: Option<usize>,
    drop_last_row: bool,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockSession {
    pub fn new(
        max_context_length: usize,
        chunks: Vec<Vec<u64>>,
    ) -> Self {
        Self {
            metadata: ModelMetadata {
                max_context_length,
                vocab_size: 1 << 20,
            },
            chunks,
            fail_from: None,
            drop_last_row: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing_from_call(
        mut self,
        call_index: usize,
    ) -> Self {
        self.fail_from = Some(call_index);
        self
    }

    pub fn dropping_last_row(mut self) -> Self {
        self.drop_last_row = true;
        self
    }
}

impl ModelSession for MockSession {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn run_batch(
        &mut self,
        request: BatchRequest<'_>,
    ) -> Result<Vec<Vec<u64>>, ModelError> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(RecordedCall {
                contexts: request.contexts.to_vec(),
                chunk_length: request.chunk_length,
                seed: request.seed,
            });
            calls.len() - 1
        };

        if let Some(fail_from) = self.fail_from {
            if call_index >= fail_from {
                return Err(ModelError::ComputeFailed(String::from(
                    "scripted failure",
                )));
            }
        }

        let scripted = if self.chunks.is_empty() {
            vec![0; request.chunk_length]
        } else {
            self.chunks[call_index % self.chunks.len()].clone()
        };
        let mut rows: Vec<Vec<u64>> = request
            .contexts
            .iter()
            .map(|context| {
                let mut row = context.clone();
                row.extend_from_slice(&scripted);
                row
            })
            .collect();
        if self.drop_last_row {
            rows.pop();
        }
        Ok(rows)
    }
}
