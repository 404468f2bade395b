//! Discovery helpers for bulk-ingesting the standard NIST catalog content.
//!
//! The published oscal-content tree keeps one JSON catalog per revision and
//! impact level under `<family>/<revision>/<name>_catalog.json`. These
//! helpers derive registration metadata (name, version, impact level, source
//! URL) from that layout so every standard baseline can be loaded without
//! per-file configuration.

use crate::catalog::identity::{CatalogVersion, ImpactLevel};
use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const STANDARD_CONTENT_BASE: &str =
    "https://raw.githubusercontent.com/usnistgov/oscal-content/main/nist.gov/SP800-53";

/// Registration metadata for one catalog document awaiting ingestion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CatalogDefinition {
    pub name: String,
    pub version: CatalogVersion,
    pub impact_level: ImpactLevel,
    pub source: String,
    pub path: PathBuf,
}

/// Derive catalog metadata from the standard content path convention.
///
/// For `.../NIST_SP-800.53/rev5/NIST_SP-800-53_rev5_HIGH-baseline.json` this
/// yields name `NIST_SP_800_53rev5_HIGH` with source key `NIST_SP_800_53rev5`.
pub fn parse_standard_catalog_path(path: &Path) -> Result<CatalogDefinition> {
    let family_dir = directory_name(path, 2)
        .ok_or_else(|| anyhow!("{} has no catalog family directory", path.display()))?;
    let revision_dir = directory_name(path, 1)
        .ok_or_else(|| anyhow!("{} has no revision directory", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("{} has no file name", path.display()))?;

    let family = family_dir.replace(['.', '-'], "_");
    let revision = revision_dir.replace('.', "_");
    let impact_level = detect_impact_level(file_name).ok_or_else(|| {
        anyhow!(
            "{} does not name an impact level (low/moderate/high)",
            path.display()
        )
    })?;

    let source_key = format!("{family}{revision}");
    Ok(CatalogDefinition {
        name: format!(
            "{source_key}_{}",
            impact_level.as_str().to_ascii_uppercase()
        ),
        version: CatalogVersion::from_str(&source_key),
        impact_level,
        source: format!("{STANDARD_CONTENT_BASE}/{revision}/json/{source_key}_catalog.json"),
        path: path.to_path_buf(),
    })
}

/// Walk `data_root` recursively and build a definition for every `.json`
/// catalog file, in stable path order.
pub fn discover_standard_catalogs(data_root: &Path) -> Result<Vec<CatalogDefinition>> {
    let mut files = Vec::new();
    find_json_files(data_root, &mut files)?;
    files.sort();

    files
        .iter()
        .map(|path| parse_standard_catalog_path(path))
        .collect()
}

fn directory_name(path: &Path, levels_up: usize) -> Option<&str> {
    let mut current = path;
    for _ in 0..levels_up {
        current = current.parent()?;
    }
    current.file_name()?.to_str()
}

fn detect_impact_level(file_name: &str) -> Option<ImpactLevel> {
    let lowered = file_name.to_ascii_lowercase();
    [ImpactLevel::High, ImpactLevel::Moderate, ImpactLevel::Low]
        .into_iter()
        .find(|level| lowered.contains(level.as_str()))
}

fn find_json_files(root: &Path, results: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(root).with_context(|| format!("reading catalog data dir {}", root.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading entry under {}", root.display()))?
            .path();
        if path.is_dir() {
            find_json_files(&path, results)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            results.push(path);
        }
    }
    Ok(())
}
