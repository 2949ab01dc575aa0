use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// target/<profile>, where the backend binary lands
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").ok()?);
    let profile = env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let source = workspace_root.join("config.toml");

    // The server looks for config.toml next to its executable
    let Some(dest_dir) = profile_dir() else {
        println!("cargo:warning=Could not locate the target profile directory; config.toml not copied");
        return;
    };
    if !source.exists() {
        return;
    }

    let dest = dest_dir.join("config.toml");
    if let Err(e) = fs::copy(&source, &dest) {
        println!("cargo:warning=Failed to copy config.toml to {}: {}", dest.display(), e);
    }
}
