//! Hash helpers: MD5 sobre la concatenación identificador + destino + token.

use log::debug;
use md5::{Digest, Md5};

/// Hashea bytes arbitrarios y devuelve hex en minúsculas (32 caracteres).
pub fn md5_hex(input: &[u8]) -> String {
    let mut h = Md5::new();
    h.update(input);
    format!("{:x}", h.finalize())
}

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    md5_hex(input.as_bytes())
}

/// Digest de `identifier + destination + token`, sin separadores.
///
/// Los tres fragmentos se alimentan al hasher en orden, lo que equivale a
/// hashear la cadena concatenada sin reservar memoria para ella.
pub fn compose_digest(identifier: &str, destination: &str, token: &str) -> String {
    let mut h = Md5::new();
    h.update(identifier.as_bytes());
    h.update(destination.as_bytes());
    h.update(token.as_bytes());
    let hex = format!("{:x}", h.finalize());
    debug!("digest:done input_len={}", identifier.len() + destination.len() + token.len());
    hex
}
