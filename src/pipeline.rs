//! Pipeline lineal: lectura -> búsqueda -> token -> digest.
//!
//! Cada etapa es terminal ante un error; no hay reintentos ni salida parcial.

use std::fs;
use std::path::Path;

use desthash_core::{find_destination, generate_token, DestinationRecord, SymbolSource};
use log::debug;
use serde_json::Value;

use crate::config::AppConfig;
use crate::errors::AppError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Lee y parsea el documento. Un archivo vacío (o solo espacios) equivale a
/// un documento sin `"destination"`. Bytes que no son UTF-8 válido son un
/// error de parseo, no de lectura.
pub fn load_document(path: &Path) -> Result<Value, AppError> {
    debug!("load:start path={}", path.display());
    let raw = fs::read(path).map_err(|source| AppError::Io { path: path.to_path_buf(), source })?;
    let body = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw[..]);
    if body.iter().all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r')) {
        debug!("load:done path={} empty=true", path.display());
        return Ok(Value::Null);
    }
    let doc = serde_json::from_slice(body).map_err(|source| AppError::Parse { path: path.to_path_buf(), source })?;
    debug!("load:done path={} bytes={}", path.display(), raw.len());
    Ok(doc)
}

/// Ejecuta la búsqueda y el cálculo sobre un documento ya parseado.
pub fn process_document<S: SymbolSource + ?Sized>(
    config: &AppConfig,
    doc: &Value,
    source: &mut S,
) -> Result<DestinationRecord, AppError> {
    let destination = find_destination(doc).ok_or(AppError::DestinationNotFound)?;
    let token = generate_token(source)?;
    let record = DestinationRecord::new(config.identifier.as_str(), &destination, token)?;
    Ok(record)
}

/// Pipeline completo a partir de la configuración.
pub fn run<S: SymbolSource + ?Sized>(config: &AppConfig, source: &mut S) -> Result<DestinationRecord, AppError> {
    let result = load_document(&config.document_path).and_then(|doc| process_document(config, &doc, source));
    if let Err(e) = &result {
        debug!("run:failed category={}", e.category());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Identifier;
    use serde_json::json;

    struct Fixed(&'static [u8], usize);

    impl SymbolSource for Fixed {
        fn draw(&mut self, _alphabet: &[u8]) -> u8 {
            let b = self.0[self.1 % self.0.len()];
            self.1 += 1;
            b
        }
    }

    fn config(id: &str) -> AppConfig {
        AppConfig { identifier: Identifier::new(id), document_path: "unused.json".into() }
    }

    #[test]
    fn process_end_to_end_example() {
        let doc = json!({ "a": { "destination": "NYC" } });
        let rec = process_document(&config("R1"), &doc, &mut Fixed(b"abcd1234", 0)).unwrap();
        assert_eq!(rec.to_string(), "d033260d711ae550bb598e4f5e65652b;abcd1234");
    }

    #[test]
    fn normalized_identifiers_give_same_record() {
        let doc = json!({ "destination": "NYC" });
        let a = process_document(&config("R1 "), &doc, &mut Fixed(b"abcd1234", 0)).unwrap();
        let b = process_document(&config("r1"), &doc, &mut Fixed(b"abcd1234", 0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_destination() {
        let doc = json!([1, 2, { "dest": "x" }]);
        let err = process_document(&config("r1"), &doc, &mut Fixed(b"abcd1234", 0)).unwrap_err();
        assert!(matches!(err, AppError::DestinationNotFound));
    }

    #[test]
    fn source_outside_alphabet_is_rejected() {
        let doc = json!({ "destination": "NYC" });
        let err = process_document(&config("r1"), &doc, &mut Fixed(b"-", 0)).unwrap_err();
        assert!(matches!(err, AppError::Core(_)));
    }

    fn write_doc(bytes: &[u8]) -> tempfile::NamedTempFile {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let f = write_doc(b"{\"destination\": \"\xe9\"}");
        let err = load_document(f.path()).unwrap_err();
        assert!(matches!(err, AppError::Parse { .. }), "{err}");
    }

    #[test]
    fn blank_documents_have_no_destination() {
        for bytes in [&b""[..], &b" \t\r\n"[..], &b"\xEF\xBB\xBF"[..]] {
            let f = write_doc(bytes);
            assert_eq!(load_document(f.path()).unwrap(), Value::Null);
        }
    }

    #[test]
    fn leading_bom_is_skipped() {
        let f = write_doc(b"\xEF\xBB\xBF{\"destination\": \"NYC\"}");
        let doc = load_document(f.path()).unwrap();
        assert_eq!(find_destination(&doc).as_deref(), Some("NYC"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
