pub mod error;
pub mod metadata;
pub mod model_session;
pub mod noise_session;
pub mod sampling_params;
