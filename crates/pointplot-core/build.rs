// File: crates/pointplot-core/build.rs
// Summary: Links the Windows system libraries the prebuilt Skia binaries import.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    // Skia's font manager reads the registry (RegOpenKeyExW and friends)
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
