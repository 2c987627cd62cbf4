//! Build script for `envcheck`.
//!
//! Records the version of the compiler building the crate so `/info` can
//! report the actual toolchain rather than the declared minimum.

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let meta = rustc_version::version_meta()?;

    println!(
        "cargo:rustc-env=ENVCHECK_RUSTC_VERSION={}",
        meta.short_version_string
    );
    println!("cargo:rerun-if-env-changed=RUSTC");

    Ok(())
}
