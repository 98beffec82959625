pub mod error;
pub mod hf_tokenizer;
pub mod text_tokenizer;
