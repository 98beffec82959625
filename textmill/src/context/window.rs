#[derive(Debug, Clone)]
pub struct ContextWindow {
    tokens: Vec<u64>,
    limit: usize,
}

impl ContextWindow {
    pub fn new(
        window_size: usize,
        chunk_length: usize,
    ) -> Self {
        // One token of margin on top of the chunk keeps a full generation
        // call inside the model window. Saturates to an always-empty buffer
        // when the chunk fills the whole window.
        Self {
            tokens: Vec::new(),
            limit: window_size.saturating_sub(chunk_length + 1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[u64] {
        &self.tokens
    }

    pub fn seed(
        &mut self,
        tokens: &[u64],
    ) {
        self.tokens.clear();
        self.tokens.extend_from_slice(tokens);
        self.truncate_front();
    }

    pub fn extend(
        &mut self,
        tokens: &[u64],
    ) {
        self.tokens.extend_from_slice(tokens);
        self.truncate_front();
    }

    // Eviction removes oldest tokens first; the most recent suffix survives
    // in order.
    fn truncate_front(&mut self) {
        if self.tokens.len() > self.limit {
            let overflow = self.tokens.len() - self.limit;
            self.tokens.drain(..overflow);
        }
    }
}
