//! Support models shared across catalog elements.
//!
//! Properties, parameters, links, and document metadata are flat descriptors
//! attached throughout the catalog tree. `CatalogElement` is the shared
//! lookup capability: any element carrying ordered `props`/`parts` sequences
//! resolves names with first-match semantics and falls back to its own id
//! when no `label` property exists.

use crate::catalog::model::Part;
use serde::Deserialize;
use uuid::Uuid;

/// Flat name/value descriptor. Names are unique only within the owning
/// element's property list; lookups take the first occurrence in list order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(rename = "class", default)]
    pub item_class: Option<String>,
}

/// Organization-defined parameter referenced from control prose via
/// `{{ insert: param, <id> }}` placeholders.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Parameter {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub select: Option<ParameterSelection>,
    #[serde(default)]
    pub guidelines: Vec<Guideline>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ParameterSelection {
    #[serde(rename = "how-many", default)]
    pub how_many: Option<String>,
    #[serde(default)]
    pub choice: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Guideline {
    #[serde(default)]
    pub prose: String,
}

/// Informational reference; carried through but never traversed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Link {
    pub href: String,
    #[serde(default)]
    pub rel: String,
}

/// Document-level metadata, passed through to downstream consumers
/// (component-definition builders read `version` from here).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub version: String,
    #[serde(rename = "oscal-version", default)]
    pub oscal_version: String,
    #[serde(rename = "last-modified", default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}

impl Parameter {
    /// Render the ODP text substituted into control prose.
    ///
    /// Resolved values win over the selection rendering, which wins over the
    /// assignment rendering; a bare id is the last resort so substitution
    /// never produces an empty replacement.
    pub fn odp_text(&self) -> String {
        if !self.values.is_empty() {
            return self.values.join(", ");
        }
        if let Some(select) = &self.select {
            return format!("[Selection: {}]", select.choice.join("; "));
        }
        if let Some(label) = &self.label {
            return format!("[Assignment: {label}]");
        }
        self.id.clone()
    }
}

/// Shared lookup capability for elements carrying `props`/`parts` sequences.
pub trait CatalogElement {
    /// The element's own identifier, used as the `label()` fallback. Elements
    /// with an optional id report an empty string when it is absent.
    fn element_id(&self) -> &str;
    fn props(&self) -> &[Property];
    fn parts(&self) -> &[Part];

    /// First property whose name matches, in list order.
    fn find_property(&self, name: &str) -> Option<&Property> {
        self.props().iter().find(|prop| prop.name == name)
    }

    /// First part whose name matches, in list order.
    fn find_part(&self, name: &str) -> Option<&Part> {
        self.parts().iter().find(|part| part.name == name)
    }

    /// Value of the `"label"` property, else the element's own id. Never
    /// fails, even when neither exists.
    fn label(&self) -> String {
        match self.find_property("label") {
            Some(prop) => prop.value.clone(),
            None => self.element_id().to_string(),
        }
    }
}
