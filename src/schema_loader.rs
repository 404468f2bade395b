//! Compiles the embedded catalog JSON Schema for shape validation.
//!
//! The loader checks every candidate document against this schema before
//! typed deserialization so schema diagnostics name the offending fields
//! instead of surfacing as serde type errors deep in the tree.

use anyhow::{Context, Result, anyhow};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::Arc;

/// A compiled schema plus the raw payload it was compiled from.
///
/// `compiled` borrows from `raw` via the static cast below, so the pair must
/// stay together for the lifetime of the validator.
pub(crate) struct CompiledSchema {
    pub schema_id: String,
    pub compiled: JSONSchema,
    #[allow(dead_code)]
    raw: Arc<Value>,
}

impl CompiledSchema {
    /// Validate a candidate value, returning every diagnostic rather than
    /// stopping at the first so callers can surface the full failure.
    pub fn diagnostics(&self, candidate: &Value) -> Vec<String> {
        match self.compiled.validate(candidate) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|err| format!("{}: {err}", err.instance_path))
                .collect(),
        }
    }
}

pub(crate) fn compile_schema(text: &str) -> Result<CompiledSchema> {
    let value: Value = serde_json::from_str(text).context("parsing embedded catalog schema")?;
    let schema_id = value
        .get("$id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("embedded catalog schema missing $id"))?;

    let raw = Arc::new(value);
    let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
    let compiled = JSONSchema::compile(raw_static)
        .map_err(|err| anyhow!("compiling catalog schema {schema_id}: {err}"))?;

    Ok(CompiledSchema {
        schema_id,
        compiled,
        raw,
    })
}
