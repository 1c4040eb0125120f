//! Generación del token aleatorio.
//!
//! La aleatoriedad entra por [`SymbolSource`], que elige un símbolo de un
//! alfabeto. En producción se usa [`SecureSymbolSource`]; los tests inyectan
//! fuentes deterministas.

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::constants::{TOKEN_ALPHABET, TOKEN_LENGTH};
use crate::errors::CoreError;

/// Fuente de símbolos: devuelve un byte de `alphabet` (nunca vacío).
pub trait SymbolSource {
    fn draw(&mut self, alphabet: &[u8]) -> u8;
}

/// Fuente criptográficamente segura (CSPRNG de `rand`, sembrado desde el SO).
#[derive(Debug, Default)]
pub struct SecureSymbolSource {
    rng: ThreadRng,
}

impl SecureSymbolSource {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl SymbolSource for SecureSymbolSource {
    fn draw(&mut self, alphabet: &[u8]) -> u8 {
        alphabet[self.rng.random_range(0..alphabet.len())]
    }
}

/// Token de [`TOKEN_LENGTH`] caracteres sobre [`TOKEN_ALPHABET`].
pub fn generate_token<S: SymbolSource + ?Sized>(source: &mut S) -> Result<String, CoreError> {
    generate_token_with(TOKEN_ALPHABET, TOKEN_LENGTH, source)
}

/// Token de longitud y alfabeto arbitrarios.
pub fn generate_token_with<S: SymbolSource + ?Sized>(
    alphabet: &[u8],
    len: usize,
    source: &mut S,
) -> Result<String, CoreError> {
    if alphabet.is_empty() {
        return Err(CoreError::EmptyAlphabet);
    }
    Ok((0..len).map(|_| char::from(source.draw(alphabet))).collect())
}

/// `true` si el token tiene la longitud esperada y solo usa el alfabeto.
pub fn is_valid_token(token: &str) -> bool {
    token.len() == TOKEN_LENGTH && token.bytes().all(|b| TOKEN_ALPHABET.contains(&b))
}

pub fn validate_token(token: &str) -> Result<(), CoreError> {
    if is_valid_token(token) {
        Ok(())
    } else {
        Err(CoreError::InvalidToken(token.to_string()))
    }
}
