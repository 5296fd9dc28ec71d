use std::env;
use std::path::{Path, PathBuf};

/// Set to copy the generated header into `include/` of the source tree
const IN_TREE_HEADER_VAR: &str = "PINKNOISE_GEN_HEADER";

fn main() {
    println!("cargo:rerun-if-changed=src/ffi.rs");
    println!("cargo:rerun-if-changed=src/gen/pink_noise.rs");
    println!("cargo:rerun-if-env-changed={}", IN_TREE_HEADER_VAR);

    let (crate_dir, out_dir) = match (env::var("CARGO_MANIFEST_DIR"), env::var("OUT_DIR")) {
        (Ok(crate_dir), Ok(out_dir)) => (crate_dir, PathBuf::from(out_dir)),
        _ => {
            println!("cargo:warning=skipping C header generation: cargo build directories not set");
            return;
        }
    };

    // Only the C ABI surface goes into the header
    let mut config = cbindgen::Config::default();
    config.language = cbindgen::Language::C;
    config.include_guard = Some("PINKNOISE_H".to_string());
    config.autogen_warning =
        Some("/* Generated by cbindgen from src/ffi.rs. Do not edit by hand. */".to_string());

    let bindings = match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
    {
        Ok(bindings) => bindings,
        Err(err) => {
            println!("cargo:warning=skipping C header generation: {}", err);
            return;
        }
    };

    write_header(&bindings, &out_dir.join("pinknoise.h"));

    if env::var_os(IN_TREE_HEADER_VAR).is_some() {
        write_header(&bindings, &Path::new(&crate_dir).join("include").join("pinknoise.h"));
    }
}

fn write_header(bindings: &cbindgen::Bindings, path: &Path) {
    if let Some(dir) = path.parent() {
        if let Err(err) = std::fs::create_dir_all(dir) {
            println!("cargo:warning=cannot create {}: {}", dir.display(), err);
            return;
        }
    }

    // Render in memory so I/O errors surface here instead of panicking inside cbindgen
    let mut header = Vec::new();
    bindings.write(&mut header);

    if std::fs::read(path).ok().as_deref() == Some(header.as_slice()) {
        return;
    }
    if let Err(err) = std::fs::write(path, &header) {
        println!("cargo:warning=failed to write C header to {}: {}", path.display(), err);
    }
}
