use md5::{Digest, Md5};

use super::text_column;

/// Text column holding a lowercase hex MD5 digest after [`Md5Hash::hash`].
///
/// For checksums and legacy lookups only; use [`super::Password`] for secrets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Md5Hash(pub String);

impl Md5Hash {
    pub fn hash(&mut self) {
        self.0 = hex::encode(Md5::digest(self.0.as_bytes()));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

text_column!(Md5Hash);
