mod handlers;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::handlers::run::handle_run;

#[derive(Parser)]
#[command(
    name = "textmill",
    about = "Continuous sliding-window text generation"
)]
struct Args {
    /// Model identifier, or a path to a model folder
    #[arg(long, default_value = "117M")]
    model: String,

    /// Sampling seed; omit for the built-in default
    #[arg(long)]
    seed: Option<u64>,

    /// Samples per generation request
    #[arg(long, default_value_t = 1)]
    nsamples: usize,

    /// Tokens generated per model call
    #[arg(long, default_value_t = 1)]
    length: usize,

    /// Context window size in tokens
    #[arg(long, default_value_t = 64)]
    window: u64,

    /// Prompt text, or a path to a file holding it
    #[arg(long, default_value = "<|endoftext|>")]
    prompt: String,

    /// Marker that ends the conversation when generated
    #[arg(long, default_value = "<|endoftext|>")]
    stop: String,

    /// Sampling temperature
    #[arg(long, default_value_t = 1.0)]
    temperature: f32,

    /// Top-k cutoff; 0 disables it
    #[arg(long, default_value_t = 0)]
    top_k: u32,

    /// Top-p cutoff; 0 disables it
    #[arg(long, default_value_t = 0.0)]
    top_p: f32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    if let Err(error) = handle_run(args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
