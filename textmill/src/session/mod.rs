pub mod prompt;
pub mod session;
pub mod session_config;
pub mod session_error;
pub mod session_output;
