use super::{
    error::ModelError, metadata::ModelMetadata,
    sampling_params::SamplingParams,
};

#[derive(Debug)]
pub struct BatchRequest<'a> {
    pub contexts: &'a [Vec<u64>],
    pub chunk_length: usize,
    pub sampling_params: SamplingParams,
    pub seed: u64,
}

pub trait ModelSession {
    fn metadata(&self) -> &ModelMetadata;

    // Each returned row echoes its input context followed by chunk_length
    // freshly sampled tokens, so the output shape is
    // (contexts.len(), context_length + chunk_length).
    fn run_batch(
        &mut self,
        request: BatchRequest<'_>,
    ) -> Result<Vec<Vec<u64>>, ModelError>;
}
