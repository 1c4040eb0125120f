//! Módulo de hashing.

pub mod digest;

pub use digest::{compose_digest, hash_str, md5_hex};
