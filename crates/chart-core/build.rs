// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's raster backend needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, pulled in by Skia's font manager.
        println!("cargo:rustc-link-lib=advapi32");
        println!("cargo:rustc-link-lib=user32");
    }
}
