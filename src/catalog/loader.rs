//! Reads a JSON byte source into a validated `CatalogModel`.
//!
//! Documents come in two shapes: the catalog object at the top level, or the
//! same object wrapped under a `"catalog"` envelope key. The loader tries the
//! top level first and falls back once to the envelope; when both candidates
//! fail it reports the diagnostics of both attempts so the caller sees why
//! neither shape matched. A partially built model never escapes: family
//! assignment runs before the model is returned.

use crate::catalog::error::CatalogError;
use crate::catalog::model::CatalogModel;
use crate::schema_loader::{CompiledSchema, compile_schema};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const CATALOG_SCHEMA_TEXT: &str = include_str!("../../schema/oscal_catalog.schema.json");

/// Load a catalog from an open byte source.
pub fn load_from_reader(mut reader: impl Read) -> Result<CatalogModel, CatalogError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    load_from_slice(&bytes)
}

/// Load a catalog from raw document bytes.
pub fn load_from_slice(bytes: &[u8]) -> Result<CatalogModel, CatalogError> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|err| CatalogError::schema(vec![format!("parsing JSON document: {err}")]))?;
    load_from_value(&value)
}

/// Load a catalog document file from disk.
pub fn load_from_path(path: &Path) -> Result<CatalogModel, CatalogError> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

/// Construct a catalog from an already-parsed JSON value, applying the
/// envelope fallback.
pub fn load_from_value(value: &Value) -> Result<CatalogModel, CatalogError> {
    let schema = compile_schema(CATALOG_SCHEMA_TEXT)
        .map_err(|err| CatalogError::schema(vec![format!("{err:#}")]))?;

    let mut model = match try_candidate(&schema, value) {
        Ok(model) => model,
        Err(direct) => match value.get("catalog") {
            Some(inner) => try_candidate(&schema, inner).map_err(|wrapped| {
                let mut diagnostics =
                    vec!["top-level object does not match the catalog shape:".to_string()];
                diagnostics.extend(direct);
                diagnostics
                    .push("value under 'catalog' does not match it either:".to_string());
                diagnostics.extend(wrapped);
                CatalogError::schema(diagnostics)
            })?,
            None => return Err(CatalogError::schema(direct)),
        },
    };

    model.assign_family_ids();
    Ok(model)
}

fn try_candidate(schema: &CompiledSchema, candidate: &Value) -> Result<CatalogModel, Vec<String>> {
    let diagnostics = schema.diagnostics(candidate);
    if !diagnostics.is_empty() {
        let mut errors = vec![format!(
            "document does not satisfy schema '{}':",
            schema.schema_id
        )];
        errors.extend(diagnostics);
        return Err(errors);
    }

    // The schema is a structural subset; typed deserialization can still
    // reject fields the schema leaves open (e.g. a malformed uuid).
    serde_json::from_value(candidate.clone())
        .map_err(|err| vec![format!("deserializing catalog: {err}")])
}
