use std::{env, fs, path::PathBuf};

const ENTRY_PAGE_SOURCE: &str = "ui/index.html";

fn main() {
    println!("cargo:rerun-if-changed={ENTRY_PAGE_SOURCE}");
    if let Err(error) = stage_entry_page() {
        println!("cargo:warning=entry page was not staged next to the binary: {error}");
    }

    tauri_build::build();
}

// OUT_DIR is <profile>/build/<pkg>-<hash>/out; binaries land in <profile>.
fn stage_entry_page() -> Result<(), String> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(|error| error.to_string())?);
    let profile_dir = out_dir
        .ancestors()
        .nth(3)
        .ok_or_else(|| format!("unexpected OUT_DIR layout: {}", out_dir.display()))?;

    let target = profile_dir.join("index.html");
    fs::copy(ENTRY_PAGE_SOURCE, &target)
        .map(|_| ())
        .map_err(|error| format!("failed to copy to {}: {}", target.display(), error))
}
