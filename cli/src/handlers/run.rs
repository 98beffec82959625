use std::{
    error::Error,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use textmill::{
    generator::config::{SamplingSeed, WindowSize},
    model::{
        metadata::resolve_model_dir, noise_session::NoiseSession,
        sampling_params::SamplingParams,
    },
    session::{
        prompt::PromptSource, session::Session,
        session_config::SessionConfig, session_output::SessionOutput,
    },
    tokenizer::hf_tokenizer::HfTokenizer,
};

use crate::Args;

fn format_output(output: &SessionOutput) -> String {
    let stats = &output.stats;
    let style_stats = Style::new().bold();
    let stats_info = style_stats.apply_to(format!(
        "{:.3}s, {:.3}t/s",
        stats.duration, stats.tokens_per_second,
    ));

    let result = format!("{}\n\n{}", output.text, stats_info,);
    result
}

pub fn handle_run(args: Args) -> Result<(), Box<dyn Error>> {
    let model_dir = resolve_model_dir(&args.model);
    let tokenizer = HfTokenizer::from_model_dir(&model_dir)?;
    let model = NoiseSession::new(&model_dir)?;

    let config = SessionConfig::new(
        PromptSource::Auto(args.prompt),
        args.stop,
        WindowSize::Custom(args.window),
        args.length,
        args.nsamples,
        1,
        match args.seed {
            Some(seed) => SamplingSeed::Custom(seed),
            None => SamplingSeed::Default,
        },
        SamplingParams {
            temperature: args.temperature,
            top_k: args.top_k,
            top_p: args.top_p,
        },
    );
    let mut session =
        Session::new(Box::new(tokenizer), Box::new(model), config)?;

    let is_running = Arc::new(AtomicBool::new(true));
    let is_running_for_ctrlc = is_running.clone();
    ctrlc::set_handler(move || {
        is_running_for_ctrlc.store(false, Ordering::SeqCst);
    })?;

    let message_limit: usize = 1024;
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.enable_steady_tick(std::time::Duration::from_millis(100));
    progress_bar.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?,
    );

    let progress_bar_for_control = progress_bar.clone();
    let is_running_for_control = is_running.clone();
    let output = session.run(move |output: &SessionOutput| {
        if !is_running_for_control.load(Ordering::SeqCst) {
            return false;
        }

        let message: String = format_output(output)
            .chars()
            .rev()
            .take(message_limit)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        progress_bar_for_control.set_message(message);
        true
    })?;

    progress_bar.finish_and_clear();
    println!("{}", format_output(&output));
    Ok(())
}
