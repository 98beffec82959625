use std::path::Path;

use super::{
    error::ModelError,
    metadata::ModelMetadata,
    model_session::{BatchRequest, ModelSession},
};
use crate::generator::rng::mix64;

// Reference backend: draws tokens uniformly from the vocabulary instead of
// running a neural network. Deterministic for a given per-call seed, which
// makes it usable both as a smoke-test target and as the wire-contract
// documentation for real backends.
pub struct NoiseSession {
    metadata: ModelMetadata,
}

impl NoiseSession {
    pub fn new(model_path: &Path) -> Result<Self, ModelError> {
        let metadata = ModelMetadata::load(model_path)?;
        Ok(Self {
            metadata,
        })
    }

    pub fn with_metadata(metadata: ModelMetadata) -> Self {
        Self {
            metadata,
        }
    }
}

impl ModelSession for NoiseSession {
    fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    fn run_batch(
        &mut self,
        request: BatchRequest<'_>,
    ) -> Result<Vec<Vec<u64>>, ModelError> {
        if request.contexts.is_empty() {
            return Err(ModelError::EmptyBatchRequest);
        }

        let vocab_size = self.metadata.vocab_size.max(1);
        let rows = request
            .contexts
            .iter()
            .enumerate()
            .map(|(row_index, context)| {
                let mut row = context.clone();
                for position in 0..request.chunk_length {
                    let index =
                        ((row_index as u64) << 32) + position as u64;
                    let sample = mix64(request.seed.wrapping_add(index));
                    row.push(sample % vocab_size);
                }
                row
            })
            .collect();
        Ok(rows)
    }
}
