use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    // OUT_DIR is target/<profile>/build/<pkg>/out; the binary lives in target/<profile>
    let dest_path = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .unwrap()
        .join("config.toml");

    fs::copy(config_path, dest_path).unwrap();
}
