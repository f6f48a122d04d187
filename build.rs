//! Build script for the Last.fm scrobble-session CLI.
//!
//! Copies the `.env.example` configuration template from the crate root into
//! the user's local data directory so a freshly installed binary finds a
//! ready-to-edit example next to where it expects the real `.env`.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` into `<local data dir>/scroblcli/`.
///
/// The template documents the `LASTFM_*` variables the application reads at
/// startup. A missing template only produces a cargo warning; directory
/// creation or copy failures abort the build.
///
/// # Destination Location
///
/// - Linux: `~/.local/share/scroblcli/.env.example`
/// - macOS: `~/Library/Application Support/scroblcli/.env.example`
/// - Windows: `%LOCALAPPDATA%/scroblcli/.env.example`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=.env.example");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    // Compute target dir (the local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("scroblcli");
    fs::create_dir_all(&out_dir)?;

    // Only copy if the source exists; otherwise warn instead of failing
    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
