// File: crates/chart-core/build.rs
// Summary: Links Windows system libraries needed by the Skia raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager reads the registry (RegOpenKeyExW, RegQueryInfoKeyW).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
