use std::env;
use std::fs;
use std::path::Path;

// Expone las variables de .env como env de compilación
// (utils/constants.rs resuelve BACKEND_URL vía option_env!).

fn parse_env_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let Ok(contents) = fs::read_to_string(Path::new(".env")) else {
        println!(
            "cargo:warning=No .env file found, using default BACKEND_URL. \
             Copy .env.example to .env to override."
        );
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_env_line) {
        // Las variables ya definidas en el entorno tienen prioridad
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
