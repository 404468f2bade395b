//! OSCAL catalog domain model.
//!
//! This module wraps OSCAL catalog documents (NIST 800-53 and friends) in a
//! typed tree and derives the views the rest of the system consumes: rendered
//! descriptions, label/sort-id resolution, family membership, sequential
//! navigation, and flat row projection. Use `loader` to construct a model and
//! `CatalogRepository` when multiple baselines are registered.

pub mod element;
pub mod error;
pub mod identity;
pub mod loader;
pub mod model;
pub mod repository;

pub use element::{CatalogElement, Guideline, Link, Metadata, Parameter, ParameterSelection, Property};
pub use error::CatalogError;
pub use identity::{CatalogName, CatalogVersion, ImpactLevel};
pub use loader::{load_from_path, load_from_reader, load_from_slice, load_from_value};
pub use model::{CatalogModel, Control, ControlRow, ControlSummary, Group, GroupClass, Part};
pub use repository::CatalogRepository;
