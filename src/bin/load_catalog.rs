//! Catalog ingestion helper.
//!
//! Loads one OSCAL catalog document, validates it, and writes one control row
//! per line to stdout for a persistence sink to bulk-insert. With
//! `--load-standard-catalogs` it instead walks a data directory laid out like
//! the published oscal-content tree and emits the registration definition for
//! every catalog file found.

use anyhow::{Context, Result, bail};
use oscalcat::catalog::load_from_path;
use oscalcat::ingest::{discover_standard_catalogs, parse_standard_catalog_path};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;

    if args.load_standard_catalogs {
        let data_root = args
            .data_root
            .ok_or_else(|| anyhow::anyhow!("--load-standard-catalogs requires --data-root"))?;
        for definition in discover_standard_catalogs(&data_root)? {
            println!("{}", serde_json::to_string(&definition)?);
        }
        return Ok(());
    }

    let catalog_file = args
        .catalog_file
        .ok_or_else(|| anyhow::anyhow!("--catalog-file is required"))?;
    let name = match args.name {
        Some(name) => name,
        None => match parse_standard_catalog_path(&catalog_file) {
            Ok(definition) => definition.name,
            Err(_) => catalog_file
                .file_name()
                .map(|file_name| file_name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        },
    };

    let catalog = load_from_path(&catalog_file)
        .with_context(|| format!("loading catalog {}", catalog_file.display()))?;

    let rows = catalog.control_rows();
    for row in &rows {
        println!("{}", serde_json::to_string(row)?);
    }
    eprintln!(
        "Successfully ingested catalog '{name}' ({} controls)",
        rows.len()
    );
    Ok(())
}

#[derive(Default)]
struct CliArgs {
    catalog_file: Option<PathBuf>,
    name: Option<String>,
    data_root: Option<PathBuf>,
    load_standard_catalogs: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = CliArgs::default();
        let mut iter = env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--catalog-file" => {
                    args.catalog_file = Some(PathBuf::from(expect_value(&mut iter, &arg)?));
                }
                "--name" => {
                    args.name = Some(expect_value(&mut iter, &arg)?);
                }
                "--data-root" => {
                    args.data_root = Some(PathBuf::from(expect_value(&mut iter, &arg)?));
                }
                "--load-standard-catalogs" => {
                    args.load_standard_catalogs = true;
                }
                other => bail!("unknown argument '{other}'"),
            }
        }
        Ok(args)
    }
}

fn expect_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    iter.next()
        .ok_or_else(|| anyhow::anyhow!("{flag} requires a value"))
}
