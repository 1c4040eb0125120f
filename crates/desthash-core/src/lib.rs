//! desthash-core: búsqueda de `"destination"`, token aleatorio y digest.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod lookup;
pub mod record;
pub mod token;

pub use errors::CoreError;
pub use hashing::{compose_digest, hash_str, md5_hex};
pub use lookup::{find_destination, find_key, scalar_text};
pub use record::DestinationRecord;
pub use token::{generate_token, generate_token_with, is_valid_token, SecureSymbolSource, SymbolSource};
