use ring::hmac;

/// HMAC-SHA256 request signer for SIGNED endpoints.
pub struct BinanceSigner {
    key: hmac::Key,
}

impl BinanceSigner {
    pub fn new(api_secret: &str) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, api_secret.as_bytes()),
        }
    }

    /// Lowercase hex digest of `payload`, which must be the exact query string sent.
    pub fn sign(&self, payload: &str) -> String {
        let tag = hmac::sign(&self.key, payload.as_bytes());
        hex::encode(tag.as_ref())
    }
}
