pub mod context;
pub mod generator;
pub mod model;
pub mod session;
pub mod tokenizer;
