// File: crates/chart-core/build.rs
// Summary: Link extra system libraries the prebuilt Skia binaries expect.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Skia's font manager and ICU read the registry on Windows.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
