use std::path::PathBuf;

use desthash_core::CoreError;
use thiserror::Error;

use crate::config::USAGE;

/// Errores de una invocación. Todos son terminales: no hay reintentos.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", USAGE)]
    Usage,
    #[error("Error reading JSON file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing JSON file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Key 'destination' not found in the JSON file")]
    DestinationNotFound,
    #[error("Error generating token: {0}")]
    Core(#[from] CoreError),
}

impl AppError {
    /// Código de salida del proceso.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Categoría para logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::Io { .. } => "io",
            Self::Parse { .. } => "parse",
            Self::DestinationNotFound => "lookup",
            Self::Core(_) => "internal",
        }
    }
}
