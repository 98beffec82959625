pub(crate) fn mix64(value: u64) -> u64 {
    let mut hash = value;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;
    hash
}

// Owned random state: each model call gets a seed derived from the base seed
// and the call index, so any call is reproducible in isolation.
pub struct SampleRng {
    seed: u64,
    calls: u64,
}

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            calls: 0,
        }
    }

    pub fn derive(
        &self,
        index: u64,
    ) -> u64 {
        mix64(self.seed.wrapping_add(index))
    }

    pub fn next_seed(&mut self) -> u64 {
        let seed = self.derive(self.calls);
        self.calls += 1;
        seed
    }
}
