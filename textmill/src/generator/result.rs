#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub text: String,
    pub tokens: Vec<u64>,
    // Wall time of the model call that produced this sample. Samples from
    // the same batch share it.
    pub model_duration: f64,
}
