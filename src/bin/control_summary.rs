//! Prints the composed display summary for one control.
//!
//! Resolves the control and its owning family in a catalog document and
//! writes the summary (label, sort id, title, family, rendered description,
//! implementation and guidance prose, next control id) as pretty JSON.

use anyhow::{Context, Result, bail};
use oscalcat::catalog::load_from_path;
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
    let catalog = load_from_path(&args.catalog_file)
        .with_context(|| format!("loading catalog {}", args.catalog_file.display()))?;

    let summary = catalog.control_summary(&args.control_id)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

struct CliArgs {
    catalog_file: PathBuf,
    control_id: String,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut catalog_file = None;
        let mut control_id = None;
        let mut iter = env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--catalog-file" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| anyhow::anyhow!("--catalog-file requires a value"))?;
                    catalog_file = Some(PathBuf::from(value));
                }
                "--control-id" => {
                    control_id = iter.next();
                    if control_id.is_none() {
                        bail!("--control-id requires a value");
                    }
                }
                other => bail!("unknown argument '{other}'"),
            }
        }

        Ok(CliArgs {
            catalog_file: catalog_file
                .ok_or_else(|| anyhow::anyhow!("--catalog-file is required"))?,
            control_id: control_id
                .ok_or_else(|| anyhow::anyhow!("--control-id is required"))?,
        })
    }
}
