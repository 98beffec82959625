use std::{collections::VecDeque, time::Instant};

use super::{
    config::GeneratorConfig, error::GeneratorError, result::GenerateResult,
    rng::SampleRng,
};
use crate::{
    model::model_session::{BatchRequest, ModelSession},
    tokenizer::text_tokenizer::TextTokenizer,
};

pub struct Generator {
    model: Box<dyn ModelSession>,
    pub config: GeneratorConfig,
    rng: SampleRng,
}

impl Generator {
    pub fn new(
        model: Box<dyn ModelSession>,
        config: GeneratorConfig,
    ) -> Result<Self, GeneratorError> {
        Self::check_sample_count(config.nsamples, config.batch_size)?;
        let rng = SampleRng::new(config.sampling_seed);
        Ok(Self {
            model,
            config,
            rng,
        })
    }

    fn check_sample_count(
        nsamples: usize,
        batch_size: usize,
    ) -> Result<(), GeneratorError> {
        if batch_size == 0 || nsamples % batch_size != 0 {
            return Err(GeneratorError::InvalidSampleCount {
                nsamples,
                batch_size,
            });
        }
        Ok(())
    }

    // One batch call: batch_size identical copies of the context go in, one
    // decoded suffix per row comes out. Nothing is retried; a model failure
    // or a shape violation surfaces as-is.
    pub fn run_batch(
        &mut self,
        context: &[u64],
        tokenizer: &dyn TextTokenizer,
    ) -> Result<Vec<GenerateResult>, GeneratorError> {
        let contexts = vec![context.to_vec(); self.config.batch_size];
        let seed = self.rng.next_seed();

        let model_start = Instant::now();
        let rows = self.model.run_batch(BatchRequest {
            contexts: &contexts,
            chunk_length: self.config.chunk_length,
            sampling_params: self.config.sampling_params,
            seed,
        })?;
        let model_duration = model_start.elapsed().as_secs_f64();

        if rows.len() != self.config.batch_size {
            return Err(GeneratorError::BatchLengthMismatch {
                expected: self.config.batch_size,
                actual: rows.len(),
            });
        }

        let expected_row_length = context.len() + self.config.chunk_length;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != expected_row_length {
                return Err(GeneratorError::RowLengthMismatch {
                    expected: expected_row_length,
                    actual: row.len(),
                });
            }
            // The model echoes its input; only the suffix is new.
            let tokens = row[context.len()..].to_vec();
            let text = tokenizer.decode(&tokens)?;
            results.push(GenerateResult {
                text,
                tokens,
                model_duration,
            });
        }
        Ok(results)
    }

    pub fn sample(
        &mut self,
        context: &[u64],
        tokenizer: &dyn TextTokenizer,
    ) -> Result<GenerateResult, GeneratorError> {
        let mut results = self.run_batch(context, tokenizer)?;
        // run_batch guarantees batch_size results and batch_size is nonzero.
        Ok(results.remove(0))
    }

    // Lazy and finite: nsamples results in nsamples / batch_size calls, all
    // against the context as passed here. Not restartable, every call draws
    // a fresh seed.
    pub fn samples<'a>(
        &'a mut self,
        context: &[u64],
        tokenizer: &'a dyn TextTokenizer,
        nsamples: usize,
    ) -> Result<Samples<'a>, GeneratorError> {
        Self::check_sample_count(nsamples, self.config.batch_size)?;
        Ok(Samples {
            generator: self,
            tokenizer,
            context: context.to_vec(),
            remaining: nsamples,
            pending: VecDeque::new(),
        })
    }
}

pub struct Samples<'a> {
    generator: &'a mut Generator,
    tokenizer: &'a dyn TextTokenizer,
    context: Vec<u64>,
    remaining: usize,
    pending: VecDeque<GenerateResult>,
}

impl Iterator for Samples<'_> {
    type Item = Result<GenerateResult, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pending.is_empty() {
            if self.remaining == 0 {
                return None;
            }
            match self.generator.run_batch(&self.context, self.tokenizer) {
                Ok(results) => {
                    self.remaining =
                        self.remaining.saturating_sub(results.len());
                    self.pending.extend(results);
                },
                Err(error) => {
                    self.remaining = 0;
                    return Some(Err(error));
                },
            }
        }
        self.pending.pop_front().map(Ok)
    }
}
