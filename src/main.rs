use desthash::{logging, pipeline, AppConfig};
use desthash_core::SecureSymbolSource;

fn main() {
    logging::init();
    // CLI: `desthash <identifier> <jsonFilePath>`
    let config = match AppConfig::from_args(std::env::args_os().skip(1)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    };
    let mut source = SecureSymbolSource::new();
    match pipeline::run(&config, &mut source) {
        Ok(record) => println!("{record}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
