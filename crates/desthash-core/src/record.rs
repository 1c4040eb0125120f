//! Registro de salida: digest + token.

use std::fmt;

use crate::constants::RECORD_SEPARATOR;
use crate::errors::CoreError;
use crate::hashing::compose_digest;
use crate::token::validate_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRecord {
    pub digest: String,
    pub token: String,
}

impl DestinationRecord {
    /// Calcula el digest de `identifier + destination + token`.
    ///
    /// `identifier` debe llegar ya normalizado.
    pub fn new(identifier: &str, destination: &str, token: String) -> Result<Self, CoreError> {
        validate_token(&token)?;
        let digest = compose_digest(identifier, destination, &token);
        Ok(Self { digest, token })
    }
}

impl fmt::Display for DestinationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.digest, RECORD_SEPARATOR, self.token)
    }
}
