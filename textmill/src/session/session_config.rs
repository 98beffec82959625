use super::prompt::PromptSource;
use crate::{
    generator::config::{GeneratorConfig, SamplingSeed, WindowSize},
    model::{metadata::ModelMetadata, sampling_params::SamplingParams},
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Window size {window} exceeds the model context length {max_context_length}"
    )]
    WindowExceedsModelContext {
        window: usize,
        max_context_length: usize,
    },
    #[error("Generation length must be at least 1")]
    ZeroLength,
    #[error("Generation length {length} exceeds the window size {window}")]
    LengthExceedsWindow {
        length: usize,
        window: usize,
    },
    #[error("Sample count {nsamples} is not divisible by batch size {batch_size}")]
    SampleCountNotDivisible {
        nsamples: usize,
        batch_size: usize,
    },
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub prompt: PromptSource,
    pub stop: String,
    pub window_size: WindowSize,
    pub chunk_length: usize,
    pub nsamples: usize,
    pub batch_size: usize,
    pub sampling_seed: SamplingSeed,
    pub sampling_params: SamplingParams,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: PromptSource::Auto(String::from("<|endoftext|>")),
            stop: String::from("<|endoftext|>"),
            window_size: WindowSize::Default,
            chunk_length: 1,
            nsamples: 1,
            batch_size: 1,
            sampling_seed: SamplingSeed::Default,
            sampling_params: SamplingParams::default(),
        }
    }
}

impl SessionConfig {
    pub fn new(
        prompt: PromptSource,
        stop: String,
        window_size: WindowSize,
        chunk_length: usize,
        nsamples: usize,
        batch_size: usize,
        sampling_seed: SamplingSeed,
        sampling_params: SamplingParams,
    ) -> Self {
        Self {
            prompt,
            stop,
            window_size,
            chunk_length,
            nsamples,
            batch_size,
            sampling_seed,
            sampling_params,
        }
    }

    // Pre-flight checks; nothing here may touch the model.
    pub fn validate(
        &self,
        metadata: &ModelMetadata,
    ) -> Result<(), ConfigError> {
        let window = self.window_size.get_value() as usize;
        if window > metadata.max_context_length {
            return Err(ConfigError::WindowExceedsModelContext {
                window,
                max_context_length: metadata.max_context_length,
            });
        }
        if self.chunk_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if self.chunk_length > window {
            return Err(ConfigError::LengthExceedsWindow {
                length: self.chunk_length,
                window,
            });
        }
        if self.batch_size == 0 || self.nsamples % self.batch_size != 0 {
            return Err(ConfigError::SampleCountNotDivisible {
                nsamples: self.nsamples,
                batch_size: self.batch_size,
            });
        }
        Ok(())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(
            self.nsamples,
            self.batch_size,
            self.chunk_length,
            self.sampling_seed,
            self.sampling_params,
        )
    }
}
