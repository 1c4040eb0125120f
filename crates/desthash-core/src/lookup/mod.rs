//! Búsqueda del primer campo `"destination"` en un árbol JSON.
//!
//! Recorrido en profundidad, pre-orden:
//! - en un objeto se mira primero su propio campo `"destination"`; si es un
//!   escalar, gana. Si no existe o es un contenedor, se desciende por los
//!   campos en orden de inserción (el contenedor `"destination"` incluido).
//! - en un array se visitan los elementos por índice.
//!
//! El primer match corta el recorrido completo.

pub mod number_text;
pub mod scalar;

use log::debug;
use serde_json::Value;

use crate::constants::DESTINATION_KEY;

pub use scalar::scalar_text;

/// Devuelve el texto del primer escalar bajo una clave `"destination"`.
pub fn find_destination(root: &Value) -> Option<String> {
    let found = find_key(root, DESTINATION_KEY);
    debug!("lookup:done key={DESTINATION_KEY} found={}", found.is_some());
    found
}

/// Igual que [`find_destination`] pero con un nombre de campo arbitrario.
pub fn find_key(node: &Value, key: &str) -> Option<String> {
    match node {
        Value::Object(map) => {
            if let Some(text) = map.get(key).and_then(scalar_text) {
                return Some(text);
            }
            map.values().find_map(|child| find_key(child, key))
        }
        Value::Array(items) => items.iter().find_map(|item| find_key(item, key)),
        _ => None,
    }
}
