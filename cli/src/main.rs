//! Static-asset pipeline for the site. Reads the raw asset tree, copies icon
//! sprites through, re-encodes project screenshots, and writes the icon-set
//! manifest the app's catalog mirrors.
//!
//! Expected source layout:
//!   <source>/icons/<set>/<name>.svg
//!   <source>/projects/<name>.(png|jpg|jpeg|webp)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use hoshikuzu_image_pipeline::process_image;

const PROJECT_IMAGE_MAX_DIM: u32 = 1280;
const RASTER_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

#[derive(Parser)]
#[command(name = "hoshikuzu-cli", version, about = "Asset tools for the hoshikuzu site")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Assets {
        #[command(subcommand)]
        command: AssetCommand,
    },
}

#[derive(Subcommand)]
enum AssetCommand {
    /// Build the deployable asset tree and manifest from raw sources.
    Build {
        #[arg(long, default_value = "assets")]
        source: PathBuf,
        #[arg(long, default_value = "dist-assets")]
        out: PathBuf,
        #[arg(long, default_value_t = PROJECT_IMAGE_MAX_DIM)]
        max_dim: u32,
    },
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
struct AssetManifest {
    icon_sets: BTreeMap<String, Vec<String>>,
    projects: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Assets { command } => match command {
            AssetCommand::Build {
                source,
                out,
                max_dim,
            } => build_assets(&source, &out, max_dim),
        },
    }
}

fn build_assets(source: &Path, out: &Path, max_dim: u32) -> Result<()> {
    if !source.is_dir() {
        bail!("source directory not found: {}", source.display());
    }
    fs::create_dir_all(out)
        .with_context(|| format!("failed to create {}", out.display()))?;

    let mut manifest = AssetManifest::default();
    copy_icon_sets(&source.join("icons"), &out.join("icons"), &mut manifest)?;
    build_project_images(
        &source.join("projects"),
        &out.join("projects"),
        max_dim,
        &mut manifest,
    )?;

    let manifest_path = out.join("manifest.json");
    let encoded = serde_json::to_string_pretty(&manifest)?;
    fs::write(&manifest_path, encoded)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;

    let icon_count: usize = manifest.icon_sets.values().map(Vec::len).sum();
    println!(
        "wrote {} icons in {} sets, {} project images, manifest at {}",
        icon_count,
        manifest.icon_sets.len(),
        manifest.projects.len(),
        manifest_path.display()
    );
    Ok(())
}

fn copy_icon_sets(source: &Path, out: &Path, manifest: &mut AssetManifest) -> Result<()> {
    if !source.is_dir() {
        return Ok(());
    }
    for entry in sorted_entries(source)? {
        if !entry.is_dir() {
            continue;
        }
        let set_name = file_name(&entry)?;
        let out_set = out.join(&set_name);
        fs::create_dir_all(&out_set)
            .with_context(|| format!("failed to create {}", out_set.display()))?;
        let mut files = Vec::new();
        for icon in sorted_entries(&entry)? {
            if icon.extension().and_then(|ext| ext.to_str()) != Some("svg") {
                continue;
            }
            let name = file_name(&icon)?;
            fs::copy(&icon, out_set.join(&name))
                .with_context(|| format!("failed to copy {}", icon.display()))?;
            files.push(name);
        }
        manifest.icon_sets.insert(set_name, files);
    }
    Ok(())
}

fn build_project_images(
    source: &Path,
    out: &Path,
    max_dim: u32,
    manifest: &mut AssetManifest,
) -> Result<()> {
    if !source.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    for entry in sorted_entries(source)? {
        let extension = entry
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let Some(extension) = extension else {
            continue;
        };
        if !RASTER_EXTENSIONS.contains(&extension.as_str()) {
            continue;
        }
        let bytes =
            fs::read(&entry).with_context(|| format!("failed to read {}", entry.display()))?;
        let encoded = process_image(&bytes, max_dim)
            .with_context(|| format!("failed to process {}", entry.display()))?;
        let stem = entry
            .file_stem()
            .and_then(|stem| stem.to_str())
            .context("non-utf8 file name")?;
        let out_name = format!("{stem}.webp");
        fs::write(out.join(&out_name), encoded.bytes)
            .with_context(|| format!("failed to write {out_name}"))?;
        manifest.projects.push(out_name);
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .collect();
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .context("non-utf8 file name")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_copies_icons_and_writes_manifest() {
        let root = tempfile::tempdir().unwrap();
        let source = root.path().join("assets");
        fs::create_dir_all(source.join("icons/tech")).unwrap();
        fs::write(source.join("icons/tech/rust.svg"), "<svg/>").unwrap();
        fs::write(source.join("icons/tech/notes.txt"), "skip me").unwrap();
        fs::create_dir_all(source.join("icons/space")).unwrap();
        fs::write(source.join("icons/space/star.svg"), "<svg/>").unwrap();

        let out = root.path().join("dist");
        build_assets(&source, &out, 512).unwrap();

        assert!(out.join("icons/tech/rust.svg").exists());
        assert!(!out.join("icons/tech/notes.txt").exists());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("manifest.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["icon_sets"]["tech"][0], "rust.svg");
        assert_eq!(manifest["icon_sets"]["space"][0], "star.svg");
        assert_eq!(manifest["projects"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn missing_source_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let err = build_assets(&root.path().join("nope"), &root.path().join("out"), 512)
            .unwrap_err();
        assert!(err.to_string().contains("source directory not found"));
    }
}
