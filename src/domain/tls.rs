#[derive(Debug, Clone)]
pub struct HandshakeSummary {
    pub version: String,
    pub cipher: String,
    pub chain_len: usize,
}

impl HandshakeSummary {
    pub fn new(version: String, cipher: String, chain_len: usize) -> Self {
        Self { version, cipher, chain_len }
    }
}
