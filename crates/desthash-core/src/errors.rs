//! Errores específicos del core.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CoreError {
    #[error("empty alphabet: cannot draw a token symbol")] EmptyAlphabet,
    #[error("invalid token: {0:?}")] InvalidToken(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_format() {
        let err = CoreError::InvalidToken("ab;c".into());
        assert_eq!(err.to_string(), "invalid token: \"ab;c\"");
    }

    #[test]
    fn empty_alphabet_format() {
        assert_eq!(CoreError::EmptyAlphabet.to_string(), "empty alphabet: cannot draw a token symbol");
    }
}
