//! OSCAL component-definition helpers.
//!
//! Component definitions are the downstream documents projects fill in with
//! control implementation statements. `ComponentTools` answers read-side
//! queries over an already-parsed document; `empty_component_json` builds a
//! fresh skeleton pre-populated from a catalog's version and source so a new
//! project starts from a valid document.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Read-side navigation over a component-definition JSON document.
///
/// Absent fields resolve to empty collections rather than errors; the
/// documents arrive from project uploads and are frequently incomplete.
pub struct ComponentTools {
    definition: Option<Value>,
}

impl ComponentTools {
    /// Wrap a parsed document. The interesting content lives under the
    /// `"component-definition"` envelope; a document without it still
    /// constructs and answers every query with empty results.
    pub fn from_value(document: &Value) -> Self {
        Self {
            definition: document.get("component-definition").cloned(),
        }
    }

    pub fn from_str(document: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(document).context("parsing component-definition document")?;
        Ok(Self::from_value(&value))
    }

    /// The `components` array, empty when missing.
    pub fn components(&self) -> Vec<Value> {
        self.definition
            .as_ref()
            .and_then(|definition| definition.get("components"))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    /// A string field from the first component.
    pub fn component_value(&self, key: &str) -> Option<String> {
        self.components()
            .first()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// The control-implementations of the last component that declares any.
    pub fn implementations(&self) -> Vec<Value> {
        let mut implementations = Vec::new();
        for component in self.components() {
            if let Some(found) = component
                .get("control-implementations")
                .and_then(Value::as_array)
            {
                implementations = found.clone();
            }
        }
        implementations
    }

    /// The implemented-requirements of the last implementation that declares
    /// any.
    pub fn controls(&self) -> Vec<Value> {
        let mut controls = Vec::new();
        for implementation in self.implementations() {
            if let Some(found) = implementation
                .get("implemented-requirements")
                .and_then(Value::as_array)
            {
                controls = found.clone();
            }
        }
        controls
    }

    /// Every `control-id` in the implemented requirements, in document order.
    pub fn control_ids(&self) -> Vec<String> {
        self.controls()
            .iter()
            .filter_map(|control| control.get("control-id"))
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    /// First implemented requirement matching `control_id`.
    pub fn control_by_id(&self, control_id: &str) -> Option<Value> {
        self.controls().into_iter().find(|control| {
            control.get("control-id").and_then(Value::as_str) == Some(control_id)
        })
    }

    /// Value of a named prop on one implemented requirement.
    pub fn control_prop(control: &Value, name: &str) -> Option<String> {
        control
            .get("props")?
            .as_array()?
            .iter()
            .find(|prop| prop.get("name").and_then(Value::as_str) == Some(name))?
            .get("value")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

#[derive(Serialize)]
struct ComponentModel {
    #[serde(rename = "component-definition")]
    component_definition: ComponentDefinition,
}

#[derive(Serialize)]
struct ComponentDefinition {
    uuid: Uuid,
    metadata: ComponentMetadata,
    components: Vec<Component>,
}

#[derive(Serialize)]
struct ComponentMetadata {
    title: String,
    version: String,
}

#[derive(Serialize)]
struct Component {
    uuid: Uuid,
    #[serde(rename = "type")]
    component_type: String,
    title: String,
    description: String,
    #[serde(rename = "control-implementations")]
    control_implementations: Vec<ControlImplementation>,
}

#[derive(Serialize)]
struct ControlImplementation {
    uuid: Uuid,
    source: String,
    description: String,
    #[serde(rename = "implemented-requirements")]
    implemented_requirements: Vec<Value>,
}

/// Build an empty component-definition document for a new project.
///
/// `catalog_version` and `source` come from the catalog the project selected;
/// the single control-implementation is created with no implemented
/// requirements so the project fills them in as controls are addressed.
pub fn empty_component_json(title: &str, catalog_version: &str, source: &str) -> Result<String> {
    let model = ComponentModel {
        component_definition: ComponentDefinition {
            uuid: Uuid::new_v4(),
            metadata: ComponentMetadata {
                title: title.to_string(),
                version: "unknown".to_string(),
            },
            components: vec![Component {
                uuid: Uuid::new_v4(),
                component_type: "software".to_string(),
                title: title.to_string(),
                description: title.to_string(),
                control_implementations: vec![ControlImplementation {
                    uuid: Uuid::new_v4(),
                    source: source.to_string(),
                    description: catalog_version.to_string(),
                    implemented_requirements: Vec::new(),
                }],
            }],
        },
    };

    serde_json::to_string_pretty(&model).context("serializing component definition")
}
