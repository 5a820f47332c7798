use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Кладёт config.toml из корня workspace рядом с бинарником (target/<profile>)
fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let Some(target_dir) = profile_dir() else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=no config.toml at workspace root, built-in defaults apply");
        return;
    }

    let dest = target_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        panic!("Failed to copy config.toml to {:?}: {}", dest, e);
    }
}

// OUT_DIR: target/<profile>/build/retail-backend-xxx/out
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}
