//! desthash
//!
//! Lee un documento JSON, busca el primer campo `"destination"` y emite
//! `md5(identificador + destino + token);token`.
//! - `config`: argumentos e identificador normalizado.
//! - `errors`: taxonomía de errores de la invocación.
//! - `pipeline`: lectura, búsqueda y cálculo del registro.
//!
//! La lógica de búsqueda, token y digest vive en `desthash-core`.

pub mod config;
pub mod errors;
pub mod logging;
pub mod pipeline;

pub use config::{AppConfig, Identifier};
pub use errors::AppError;
pub use pipeline::{load_document, process_document, run};
