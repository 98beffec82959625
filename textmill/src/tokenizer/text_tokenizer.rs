use super::error::TokenizerError;

// The buffer only ever cuts at token boundaries, so implementations must
// round-trip decode -> encode at those boundaries; nothing is assumed about
// slicing inside a token.
pub trait TextTokenizer {
    fn encode(
        &self,
        text: &str,
    ) -> Result<Vec<u64>, TokenizerError>;

    fn decode(
        &self,
        tokens: &[u64],
    ) -> Result<String, TokenizerError>;
}
