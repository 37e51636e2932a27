use std::env;
use std::path::PathBuf;

#[cfg(feature = "generate-bindings")]
fn write_bindings(out_bindings: &std::path::Path, include_paths: &[PathBuf]) {
    let mut builder = bindgen::Builder::default()
        .header_contents("wrapper.h", "#include <sndfile.h>\n")
        .allowlist_function("sf_.*")
        .allowlist_type("SF_.*|SNDFILE.*|sf_count_t")
        .allowlist_var("SF_.*|SFC_.*|SFM_.*")
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .use_core()
        .ctypes_prefix("core::ffi");

    for path in include_paths {
        builder = builder.clang_arg(format!("-I{}", path.display()));
    }

    let bindings = builder.generate().expect("Unable to generate bindings");
    bindings
        .write_to_file(out_bindings)
        .expect("Couldn't write bindings.rs");
}

#[cfg(not(feature = "generate-bindings"))]
fn write_bindings(_out_bindings: &std::path::Path, _include_paths: &[PathBuf]) {
    // src/lib.rs includes src/pregen_bindings/bindings.rs directly.
}

/// Emits the link directives for libsndfile and returns the header search paths.
fn link_sndfile() -> Vec<PathBuf> {
    println!("cargo:rerun-if-env-changed=SNDFILE_NO_PKG_CONFIG");
    println!("cargo:rerun-if-env-changed=SNDFILE_LIB_DIR");

    if let Some(dir) = env::var_os("SNDFILE_LIB_DIR") {
        println!(
            "cargo:rustc-link-search=native={}",
            PathBuf::from(dir).display()
        );
    }

    if env::var_os("SNDFILE_NO_PKG_CONFIG").is_none() {
        match pkg_config::Config::new()
            .atleast_version("1.0.29")
            .probe("sndfile")
        {
            Ok(lib) => return lib.include_paths,
            Err(e) => {
                println!("cargo:warning=pkg-config could not find sndfile ({e}), linking -lsndfile");
            }
        }
    }

    println!("cargo:rustc-link-lib=sndfile");
    Vec::new()
}

fn main() {
    if cfg!(feature = "generate-bindings") {
        let minor = rustc_minor().unwrap_or(0);
        if minor < 70 {
            panic!("feature `generate-bindings` requires rustc >= 1.70");
        }
    }

    println!("cargo:rerun-if-changed=src/pregen_bindings/bindings.rs");

    let include_paths = link_sndfile();

    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    let out_bindings = out_path.join("bindings.rs");

    write_bindings(&out_bindings, &include_paths);
}

// Checks the rustc version when building with generate-bindings feature. Must be at least 1.70
fn rustc_minor() -> Option<u32> {
    let rustc = std::env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());
    let out = std::process::Command::new(rustc).arg("-vV").output().ok()?;
    let s = std::string::String::from_utf8(out.stdout).ok()?;

    for line in s.lines() {
        if let Some(rest) = line.strip_prefix("release: ") {
            let mut it = rest.split('.');
            let _major = it.next()?.parse::<u32>().ok()?;
            let minor = it.next()?.parse::<u32>().ok()?;
            return Some(minor);
        }
    }
    None
}
