//! OSCAL security-control catalog library.
//!
//! The crate parses OSCAL catalog documents (NIST 800-53 and similar) into a
//! typed, immutable tree and derives the views consumers need: rendered
//! control descriptions with parameter substitution, label and sort-id
//! resolution, family membership, sequential navigation, and flat control
//! rows for persistence. `ingest` discovers the standard published catalog
//! content; `component` handles the component-definition documents projects
//! derive from a catalog. The helper binaries wrap these for the command
//! line.
//!
//! The core is purely computational: construction happens once in the loader
//! and every later read is lock-free, so a loaded model may be shared across
//! threads freely.

pub mod catalog;
pub mod component;
pub mod ingest;
mod schema_loader;

pub use catalog::{
    CatalogElement, CatalogError, CatalogModel, CatalogName, CatalogRepository, CatalogVersion,
    Control, ControlRow, ControlSummary, Group, GroupClass, Guideline, ImpactLevel, Link,
    Metadata, Parameter, ParameterSelection, Part, Property, load_from_path, load_from_reader,
    load_from_slice, load_from_value,
};
pub use component::{ComponentTools, empty_component_json};
pub use ingest::{
    CatalogDefinition, STANDARD_CONTENT_BASE, discover_standard_catalogs,
    parse_standard_catalog_path,
};
