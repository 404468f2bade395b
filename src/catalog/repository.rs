//! Holds one or more loaded catalogs for lookup by name.
//!
//! The repository lets callers resolve controls using the catalog name a
//! project selected, keeping catalog selection explicit even when several
//! baselines (e.g. r5 low/moderate/high) are loaded side by side.

use crate::catalog::identity::CatalogName;
use crate::catalog::model::{CatalogModel, Control};
use std::collections::BTreeMap;

#[derive(Default)]
/// In-memory store for catalog models keyed by `CatalogName`.
pub struct CatalogRepository {
    catalogs: BTreeMap<CatalogName, CatalogModel>,
}

impl CatalogRepository {
    /// Register a catalog under a name for later lookup. Re-registering a
    /// name replaces the previous model.
    pub fn register(&mut self, name: CatalogName, catalog: CatalogModel) {
        self.catalogs.insert(name, catalog);
    }

    /// Fetch a catalog by name, if present.
    pub fn get(&self, name: &CatalogName) -> Option<&CatalogModel> {
        self.catalogs.get(name)
    }

    /// Resolve a control inside a registered catalog.
    pub fn find_control(&self, name: &CatalogName, control_id: &str) -> Option<&Control> {
        self.get(name)?.get_control(control_id)
    }

    /// Registered catalog names in stable order.
    pub fn names(&self) -> impl Iterator<Item = &CatalogName> {
        self.catalogs.keys()
    }
}
