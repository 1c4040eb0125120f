//! Constantes del núcleo.
//!
//! Todos estos valores participan en la entrada del digest, directa o
//! indirectamente: cambiarlos cambia la salida para un mismo documento.

/// Nombre exacto (sensible a mayúsculas) del campo que se busca en el JSON.
pub const DESTINATION_KEY: &str = "destination";

/// Longitud del token aleatorio que acompaña al digest.
pub const TOKEN_LENGTH: usize = 8;

/// Alfabeto de 62 símbolos del token: mayúsculas, minúsculas y dígitos.
pub const TOKEN_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Separador entre digest y token en la línea de salida.
pub const RECORD_SEPARATOR: char = ';';
