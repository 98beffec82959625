use crate::model::sampling_params::SamplingParams;

#[derive(Debug, Clone, Copy)]
pub enum WindowSize {
    // 64 is the default window size
    Default,
    // Custom window size
    Custom(u64),
}

impl Default for WindowSize {
    fn default() -> Self {
        WindowSize::Default
    }
}

impl WindowSize {
    pub fn get_value(&self) -> u64 {
        match self {
            WindowSize::Default => 64,
            WindowSize::Custom(size) => *size,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SamplingSeed {
    // 42 is the default sampling seed
    Default,
    // Custom sampling seed
    Custom(u64),
}

impl Default for SamplingSeed {
    fn default() -> Self {
        SamplingSeed::Default
    }
}

impl SamplingSeed {
    pub fn get_value(&self) -> u64 {
        match self {
            SamplingSeed::Default => 42,
            SamplingSeed::Custom(seed) => *seed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub nsamples: usize,
    pub batch_size: usize,
    pub chunk_length: usize,
    pub sampling_seed: u64,
    pub sampling_params: SamplingParams,
}

impl GeneratorConfig {
    pub fn new(
        nsamples: usize,
        batch_size: usize,
        chunk_length: usize,
        sampling_seed: SamplingSeed,
        sampling_params: SamplingParams,
    ) -> Self {
        Self {
            nsamples,
            batch_size,
            chunk_length,
            sampling_seed: sampling_seed.get_value(),
            sampling_params,
        }
    }
}
