//! Build script for besselk-sys crate.
//!
//! Selects the name decoration of the Fortran symbols and, when the `link`
//! feature is enabled, tells rustc where to find the compiled library.
//!
//! Environment:
//!
//! - `BESSELK_F77_UNDERSCORES`: trailing underscores appended by the Fortran
//!   compiler, `0`, `1` or `2` (default `1`).
//! - `BESSELK_LIB_DIR`: directory holding the compiled library.
//! - `BESSELK_LIB_NAME`: library to link (default `besselk`).
//! - `BESSELK_FORTRAN_RUNTIME`: Fortran runtime library (default `gfortran`,
//!   empty to skip).

use std::env;

const ROUTINES: [(&str, &str); 2] = [("besselk", "BESSELK_SYMBOL"), ("zbesk", "ZBESK_SYMBOL")];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=BESSELK_F77_UNDERSCORES");
    println!("cargo:rerun-if-env-changed=BESSELK_LIB_DIR");
    println!("cargo:rerun-if-env-changed=BESSELK_LIB_NAME");
    println!("cargo:rerun-if-env-changed=BESSELK_FORTRAN_RUNTIME");

    let underscores = env::var("BESSELK_F77_UNDERSCORES").unwrap_or_else(|_| "1".to_string());
    let (cfg_value, suffix) = match underscores.trim() {
        "0" => ("none", ""),
        "1" => ("single", "_"),
        "2" => ("double", "__"),
        other => panic!(
            "BESSELK_F77_UNDERSCORES must be 0, 1 or 2 (got {:?})",
            other
        ),
    };

    println!("cargo:rustc-check-cfg=cfg(f77_suffix, values(\"none\", \"single\", \"double\"))");
    println!("cargo:rustc-cfg=f77_suffix=\"{}\"", cfg_value);

    for (routine, env_name) in ROUTINES {
        println!("cargo:rustc-env={}={}{}", env_name, routine, suffix);
    }

    if env::var_os("CARGO_FEATURE_LINK").is_none() {
        return;
    }

    if let Ok(dir) = env::var("BESSELK_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
    }

    let lib_name = env::var("BESSELK_LIB_NAME").unwrap_or_else(|_| "besselk".to_string());
    println!("cargo:rustc-link-lib={}", lib_name);

    let runtime = env::var("BESSELK_FORTRAN_RUNTIME").unwrap_or_else(|_| "gfortran".to_string());
    if !runtime.is_empty() {
        println!("cargo:rustc-link-lib={}", runtime);
    }

    // Linux and macOS need libm for the Fortran intrinsics
    let target = env::var("TARGET")
        .unwrap_or_else(|_| env::var("HOST").expect("Neither TARGET nor HOST set by cargo"));
    if !target.contains("windows") {
        println!("cargo:rustc-link-lib=m");
    }
}
