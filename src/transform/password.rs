use super::text_column;
use crate::error::SqlEntityError;

/// Text column holding a bcrypt password hash.
///
/// Assign the plain password, call [`Password::hash`] before the insert, and check
/// candidates with [`Password::verify`] after a read.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Password(pub String);

impl Password {
    /// Replace the plain text with its bcrypt hash at the default cost.
    ///
    /// # Errors
    /// Returns `SqlEntityError::HashError` if bcrypt fails; the content is unchanged.
    pub fn hash(&mut self) -> Result<(), SqlEntityError> {
        let hashed = bcrypt::hash(&self.0, bcrypt::DEFAULT_COST)
            .map_err(|e| SqlEntityError::HashError(e.to_string()))?;
        self.0 = hashed;
        Ok(())
    }

    /// Check a plain-text candidate against the stored hash.
    ///
    /// # Errors
    /// `PasswordMismatch` if it does not match, `HashError` if the stored value is not a
    /// bcrypt hash.
    pub fn verify(&self, candidate: &str) -> Result<(), SqlEntityError> {
        match bcrypt::verify(candidate, &self.0) {
            Ok(true) => Ok(()),
            Ok(false) => Err(SqlEntityError::PasswordMismatch),
            Err(e) => Err(SqlEntityError::HashError(e.to_string())),
        }
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(..)")
    }
}

text_column!(Password);
