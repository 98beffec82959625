use std::time::Instant;

use tracing::debug;

use super::{
    session_config::SessionConfig,
    session_error::SessionError,
    session_output::{
        FinishReason, SessionOutput, SessionRunStats, SessionStats,
    },
};
use crate::{
    context::window::ContextWindow,
    generator::{generator::Generator, result::GenerateResult},
    model::model_session::ModelSession,
    tokenizer::text_tokenizer::TextTokenizer,
};

enum LoopState {
    ResolvePrompt,
    SeedContext(String),
    Generate,
    Commit(GenerateResult),
    Emit(GenerateResult),
}

pub struct Session {
    tokenizer: Box<dyn TextTokenizer>,
    generator: Generator,
    config: SessionConfig,
    window: ContextWindow,
}

impl Session {
    pub fn new(
        tokenizer: Box<dyn TextTokenizer>,
        model: Box<dyn ModelSession>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        config.validate(model.metadata())?;
        debug!(
            window = config.window_size.get_value(),
            chunk_length = config.chunk_length,
            batch_size = config.batch_size,
            "session configured"
        );

        let window = ContextWindow::new(
            config.window_size.get_value() as usize,
            config.chunk_length,
        );
        let generator = Generator::new(model, config.generator_config())?;
        Ok(Self {
            tokenizer,
            generator,
            config,
            window,
        })
    }

    pub fn context_tokens(&self) -> &[u64] {
        self.window.tokens()
    }

    // Runs conversations until the control callback returns false or an
    // error surfaces; there is no other way out. Each turn asks the driver
    // for exactly one sample, commits it to the window and emits the decoded
    // window to the callback. A generated stop marker ends the conversation
    // and the next one starts over from the prompt source, so editing a
    // prompt file on disk between conversations takes effect.
    pub fn run<F>(
        &mut self,
        mut control: F,
    ) -> Result<SessionOutput, SessionError>
    where
        F: FnMut(&SessionOutput) -> bool,
    {
        let run_start = Instant::now();
        let mut tokens_count_prompt = 0u64;
        let mut tokens_count_output = 0u64;
        let mut model_run_count = 0u64;
        let mut model_run_duration = 0.0f64;

        let mut state = LoopState::ResolvePrompt;
        loop {
            state = match state {
                LoopState::ResolvePrompt => {
                    let prompt = self.config.prompt.resolve()?;
                    LoopState::SeedContext(prompt)
                },
                LoopState::SeedContext(prompt) => {
                    let tokens = self.tokenizer.encode(&prompt)?;
                    tokens_count_prompt = tokens.len() as u64;
                    tokens_count_output = 0;
                    model_run_count = 0;
                    model_run_duration = 0.0;
                    self.window.seed(&tokens);
                    debug!(
                        prompt_tokens = tokens.len(),
                        context_tokens = self.window.len(),
                        "conversation seeded"
                    );
                    LoopState::Generate
                },
                LoopState::Generate => {
                    // On failure the window stays exactly as the last commit
                    // left it.
                    let result = self
                        .generator
                        .sample(self.window.tokens(), self.tokenizer.as_ref())?;
                    LoopState::Commit(result)
                },
                LoopState::Commit(result) => {
                    self.window.extend(&result.tokens);
                    tokens_count_output += result.tokens.len() as u64;
                    model_run_count += 1;
                    model_run_duration += result.model_duration;
                    LoopState::Emit(result)
                },
                LoopState::Emit(result) => {
                    let text = self.tokenizer.decode(self.window.tokens())?;
                    let hit_stop = !self.config.stop.is_empty()
                        && result.text.contains(self.config.stop.as_str());
                    let finish_reason = if hit_stop {
                        Some(FinishReason::Stop)
                    } else {
                        None
                    };
                    let output = SessionOutput {
                        text,
                        chunk: result.text,
                        stats: Self::build_stats(
                            run_start.elapsed().as_secs_f64(),
                            tokens_count_prompt,
                            tokens_count_output,
                            model_run_count,
                            model_run_duration,
                        ),
                        finish_reason: finish_reason.clone(),
                    };
                    let should_continue = control(&output);
                    if !should_continue {
                        return Ok(output.clone_with_finish_reason(Some(
                            FinishReason::Cancelled,
                        )));
                    }
                    match finish_reason {
                        Some(FinishReason::Stop) => {
                            debug!(
                                tokens_count_output,
                                "stop marker generated, conversation restarts"
                            );
                            LoopState::ResolvePrompt
                        },
                        _ => LoopState::Generate,
                    }
                },
            };
        }
    }
}

impl Session {
    fn build_stats(
        duration: f64,
        tokens_count_prompt: u64,
        tokens_count_output: u64,
        model_run_count: u64,
        model_run_duration: f64,
    ) -> SessionStats {
        let tokens_per_second =
            tokens_count_output as f64 / model_run_duration;
        let average_duration = model_run_duration / model_run_count as f64;

        SessionStats {
            duration,
            tokens_count_prompt,
            tokens_count_output,
            tokens_per_second,
            model_run: SessionRunStats {
                count: model_run_count,
                average_duration,
            },
        }
    }
}
