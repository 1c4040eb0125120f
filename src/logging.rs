//! Inicialización del backend de `log`.
//! Escribe en stderr; el filtro por defecto es `warn` y se puede cambiar con `RUST_LOG`.

use env_logger::{Builder, Env, Target};

pub fn init() {
    // ignora error si ya había un logger instalado (tests)
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
