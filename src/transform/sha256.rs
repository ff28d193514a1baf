use sha2::{Digest, Sha256};

use super::text_column;

/// Text column holding a lowercase hex SHA-256 digest after [`Sha256Hash::hash`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sha256Hash(pub String);

impl Sha256Hash {
    /// Replace the content with the hex digest of its bytes.
    pub fn hash(&mut self) {
        self.0 = hex::encode(Sha256::digest(self.0.as_bytes()));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_column!(Sha256Hash);
