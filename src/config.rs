//! Configuración de una invocación.
//! Se construye solo a partir de los argumentos posicionales: no hay archivos
//! de configuración ni variables de entorno que afecten la salida.
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::errors::AppError;

/// Mensaje de uso impreso ante un número incorrecto de argumentos.
pub const USAGE: &str = "Usage: desthash <identifier> <jsonFilePath>";

/// Identificador normalizado: minúsculas y sin espacios alrededor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parámetros de la ejecución.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Identificador ya normalizado.
    pub identifier: Identifier,
    /// Ruta del documento JSON.
    pub document_path: PathBuf,
}

impl AppConfig {
    /// Construye la configuración desde argv (sin el nombre del programa).
    /// Exige exactamente dos argumentos: `<identifier> <jsonFilePath>`.
    pub fn from_args<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let [identifier, path]: [OsString; 2] = args.try_into().map_err(|_| AppError::Usage)?;
        let identifier = identifier.into_string().map_err(|_| AppError::Usage)?;
        Ok(Self {
            identifier: Identifier::new(&identifier),
            document_path: PathBuf::from(path),
        })
    }
}
