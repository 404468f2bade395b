//! Typed representation of an OSCAL control catalog.
//!
//! The tree mirrors the document: groups own controls and sub-groups,
//! controls own parts and one level of child controls, parts recurse to
//! arbitrary depth. Everything is constructed once by the loader and read-only
//! afterwards; derived views (`description`, `controls`, summaries) are
//! recomputed on each call rather than cached, so callers that need a stable
//! snapshot capture the result once.

use crate::catalog::element::{CatalogElement, Link, Metadata, Parameter, Property};
use crate::catalog::error::CatalogError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Named prose fragment attached to a control (statement, guidance,
/// implementation, ...), recursively nestable.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub props: Vec<Property>,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub prose: String,
}

/// One security requirement, possibly carrying nested sub-controls.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Control {
    pub id: String,
    #[serde(rename = "class", default)]
    pub item_class: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub props: Vec<Property>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub controls: Vec<Control>,
    /// Assigned after parse: untitled controls inherit their owning group's
    /// id as family identity. Never read from the document.
    #[serde(skip)]
    pub family_id: Option<String>,
}

/// Groups are always control families in this document profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum GroupClass {
    #[serde(rename = "family")]
    Family,
}

/// A control family (e.g. "Access Control") owning controls and sub-families.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "class")]
    pub item_class: GroupClass,
    pub title: String,
    #[serde(default)]
    pub params: Vec<Parameter>,
    #[serde(default)]
    pub props: Vec<Property>,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub controls: Vec<Control>,
}

/// Flat control record ready for bulk insertion by a persistence sink.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ControlRow {
    pub control_id: String,
    pub control_label: String,
    pub sort_id: String,
    pub title: String,
}

/// Composed per-control view for display layers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ControlSummary {
    pub label: String,
    pub sort_id: String,
    pub title: String,
    pub family: String,
    pub description: String,
    pub implementation: String,
    pub guidance: String,
    pub next_id: String,
}

/// Root of a loaded catalog document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogModel {
    pub uuid: Uuid,
    pub metadata: Metadata,
    pub groups: Vec<Group>,
}

impl CatalogElement for Part {
    fn element_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn props(&self) -> &[Property] {
        &self.props
    }

    fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl CatalogElement for Control {
    fn element_id(&self) -> &str {
        &self.id
    }

    fn props(&self) -> &[Property] {
        &self.props
    }

    fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl CatalogElement for Group {
    fn element_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    fn props(&self) -> &[Property] {
        &self.props
    }

    fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl Control {
    /// Value of the `"sort-id"` property, else the control title.
    pub fn sort_id(&self) -> String {
        match self.find_property("sort-id") {
            Some(prop) => prop.value.clone(),
            None => self.title.clone(),
        }
    }

    pub fn statement(&self) -> Option<&Part> {
        self.find_part("statement")
    }

    pub fn implementation(&self) -> &str {
        self.find_part("implementation")
            .map(|part| part.prose.as_str())
            .unwrap_or("")
    }

    pub fn guidance(&self) -> &str {
        self.find_part("guidance")
            .map(|part| part.prose.as_str())
            .unwrap_or("")
    }

    /// Ordered `(parameter id, rendered ODP text)` pairs following `params`
    /// order.
    pub fn parameters(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|param| (param.id.clone(), param.odp_text()))
            .collect()
    }

    /// Full prose of the control statement with nested parts indented one tab
    /// per level and parameter placeholders substituted.
    ///
    /// Substitution is literal and runs once per parameter; substituted text
    /// is never re-scanned, and placeholders with no matching parameter are
    /// left verbatim in the output. Empty when the control has no statement.
    pub fn description(&self) -> String {
        let Some(statement) = self.statement() else {
            return String::new();
        };

        // Explicit work stack: part nesting depth is data-driven and the
        // document is untrusted input.
        let mut rendered = String::new();
        let mut stack: Vec<(&Part, usize)> = vec![(statement, 0)];
        while let Some((part, depth)) = stack.pop() {
            if !part.prose.is_empty() {
                if part.name == "statement" {
                    rendered.push_str(&part.prose);
                } else {
                    rendered.push('\n');
                    rendered.push_str(&"\t".repeat(depth));
                    rendered.push_str(&part.label());
                    rendered.push(' ');
                    rendered.push_str(&part.prose);
                }
            }
            for child in part.parts.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        for (id, text) in self.parameters() {
            let placeholder = format!("{{{{ insert: param, {id} }}}}");
            rendered = rendered.replace(&placeholder, &text);
        }
        rendered
    }

    /// Flat projection for persistence sinks.
    pub fn to_row(&self) -> ControlRow {
        ControlRow {
            control_id: self.id.clone(),
            control_label: self.label(),
            sort_id: self.sort_id(),
            title: self.title.clone(),
        }
    }
}

impl Group {
    /// One-time family assignment: direct child controls without a title are
    /// sub-controls and inherit this group's id. Applies recursively to
    /// sub-groups; runs before the model is published by the loader.
    pub(crate) fn assign_family_ids(&mut self) {
        for control in &mut self.controls {
            if control.title.is_empty() {
                control.family_id = self.id.clone();
            }
        }
        for group in &mut self.groups {
            group.assign_family_ids();
        }
    }
}

impl CatalogModel {
    pub(crate) fn assign_family_ids(&mut self) {
        for group in &mut self.groups {
            group.assign_family_ids();
        }
    }

    /// Every top-level control followed immediately by its direct children,
    /// in document order. Recomputed on each call; snapshot the result when
    /// iterating many controls.
    pub fn controls(&self) -> Vec<&Control> {
        let mut controls = Vec::new();
        for group in &self.groups {
            for control in &group.controls {
                controls.push(control);
                for child in &control.controls {
                    controls.push(child);
                }
            }
        }
        controls
    }

    /// First control matching `control_id` in `controls()` order.
    pub fn get_control(&self, control_id: &str) -> Option<&Control> {
        self.controls()
            .into_iter()
            .find(|control| control.id == control_id)
    }

    /// The group owning `control_id`, whether as a top-level control or one
    /// of its direct children. `None` when no group owns the id.
    pub fn get_group(&self, control_id: &str) -> Option<&Group> {
        for group in &self.groups {
            for control in &group.controls {
                if control.id == control_id {
                    return Some(group);
                }
                if control.controls.iter().any(|child| child.id == control_id) {
                    return Some(group);
                }
            }
        }
        None
    }

    /// Id of the entry after `control` in `controls()` order; empty string
    /// when `control` is last or not present at all.
    pub fn get_next(&self, control: &Control) -> String {
        let controls = self.controls();
        controls
            .iter()
            .position(|candidate| *candidate == control)
            .and_then(|idx| controls.get(idx + 1))
            .map(|next| next.id.clone())
            .unwrap_or_default()
    }

    /// Compose the display summary for one control.
    ///
    /// Unlike the lookups it builds on, this fails when the control or its
    /// owning group cannot be resolved.
    pub fn control_summary(&self, control_id: &str) -> Result<ControlSummary, CatalogError> {
        let control = self
            .get_control(control_id)
            .ok_or_else(|| CatalogError::ControlNotFound(control_id.to_string()))?;
        let group = self
            .get_group(control_id)
            .ok_or_else(|| CatalogError::GroupNotFound(control_id.to_string()))?;

        Ok(ControlSummary {
            label: control.label(),
            sort_id: control.sort_id(),
            title: control.title.clone(),
            family: group.title.clone(),
            description: control.description(),
            implementation: control.implementation().to_string(),
            guidance: control.guidance().to_string(),
            next_id: self.get_next(control),
        })
    }

    /// Ordered flat rows for every control in `controls()` order.
    pub fn control_rows(&self) -> Vec<ControlRow> {
        self.controls()
            .into_iter()
            .map(Control::to_row)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn control(value: serde_json::Value) -> Control {
        serde_json::from_value(value).expect("control parses")
    }

    #[test]
    fn label_falls_back_to_id() {
        let plain = control(json!({"id": "ac-1", "title": "Policy and Procedures"}));
        assert_eq!(plain.label(), "ac-1");

        let labeled = control(json!({
            "id": "ac-1",
            "title": "Policy and Procedures",
            "props": [{"name": "label", "value": "AC-01"}]
        }));
        assert_eq!(labeled.label(), "AC-01");
    }

    #[test]
    fn sort_id_falls_back_to_title() {
        let labeled = control(json!({
            "id": "ac-1",
            "title": "Policy and Procedures",
            "props": [{"name": "sort-id", "value": "ac-01"}]
        }));
        assert_eq!(labeled.sort_id(), "ac-01");

        let plain = control(json!({"id": "ac-1", "title": "Policy and Procedures"}));
        assert_eq!(plain.sort_id(), "Policy and Procedures");
    }

    #[test]
    fn description_walks_nested_parts_with_tab_indent() {
        let control = control(json!({
            "id": "ac-2",
            "title": "Account Management",
            "parts": [{
                "name": "statement",
                "prose": "Manage system accounts:",
                "parts": [
                    {
                        "id": "ac-2_smt.a",
                        "name": "item",
                        "prose": "Define account types;",
                        "props": [{"name": "label", "value": "a."}],
                        "parts": [{
                            "id": "ac-2_smt.a.1",
                            "name": "item",
                            "prose": "Document them.",
                            "props": [{"name": "label", "value": "1."}]
                        }]
                    },
                    {
                        "id": "ac-2_smt.b",
                        "name": "item",
                        "prose": "Assign account managers.",
                        "props": [{"name": "label", "value": "b."}]
                    }
                ]
            }]
        }));

        assert_eq!(
            control.description(),
            "Manage system accounts:\n\ta. Define account types;\n\t\t1. Document them.\n\tb. Assign account managers."
        );
    }

    #[test]
    fn description_skips_parts_without_prose_but_descends_into_them() {
        let control = control(json!({
            "id": "ac-3",
            "title": "Access Enforcement",
            "parts": [{
                "name": "statement",
                "prose": "Enforce approved authorizations.",
                "parts": [{
                    "name": "item",
                    "parts": [{
                        "id": "ac-3_smt.1",
                        "name": "item",
                        "prose": "At every boundary.",
                        "props": [{"name": "label", "value": "1."}]
                    }]
                }]
            }]
        }));

        assert_eq!(
            control.description(),
            "Enforce approved authorizations.\n\t\t1. At every boundary."
        );
    }

    #[test]
    fn description_without_statement_is_empty() {
        let control = control(json!({
            "id": "ac-4",
            "title": "Information Flow Enforcement",
            "parts": [{"name": "guidance", "prose": "Flow control guidance."}]
        }));
        assert_eq!(control.description(), "");
    }

    #[test]
    fn description_substitutes_parameters_single_pass() {
        let substituted = control(json!({
            "id": "ac-1",
            "title": "Policy and Procedures",
            "params": [{"id": "p1", "values": ["X"]}],
            "parts": [{
                "name": "statement",
                "prose": "See {{ insert: param, p1 }}"
            }]
        }));
        assert_eq!(substituted.description(), "See X");

        // A substituted value containing its own placeholder is not
        // re-scanned by that parameter's pass.
        let recursive = control(json!({
            "id": "ac-1",
            "title": "Policy and Procedures",
            "params": [{"id": "p1", "values": ["{{ insert: param, p1 }}"]}],
            "parts": [{
                "name": "statement",
                "prose": "See {{ insert: param, p1 }}"
            }]
        }));
        assert_eq!(recursive.description(), "See {{ insert: param, p1 }}");
    }

    #[test]
    fn description_leaves_unknown_placeholders_verbatim() {
        let control = control(json!({
            "id": "ac-1",
            "title": "Policy and Procedures",
            "parts": [{
                "name": "statement",
                "prose": "Review every {{ insert: param, missing }} days."
            }]
        }));
        assert_eq!(
            control.description(),
            "Review every {{ insert: param, missing }} days."
        );
    }

    #[test]
    fn parameters_follow_params_order() {
        let control = control(json!({
            "id": "ac-1",
            "title": "Policy and Procedures",
            "params": [
                {"id": "z9", "values": ["last"]},
                {"id": "a1", "values": ["first"]}
            ]
        }));
        let pairs = control.parameters();
        assert_eq!(
            pairs,
            vec![
                ("z9".to_string(), "last".to_string()),
                ("a1".to_string(), "first".to_string())
            ]
        );
    }

    #[test]
    fn group_assigns_family_to_untitled_children_only() {
        let mut group: Group = serde_json::from_value(json!({
            "id": "ac",
            "class": "family",
            "title": "Access Control",
            "controls": [
                {"id": "ac-1", "title": "Policy and Procedures"},
                {"id": "ac-1.1"}
            ],
            "groups": [{
                "id": "ac-sub",
                "class": "family",
                "title": "Nested Family",
                "controls": [{"id": "ac-9.9"}]
            }]
        }))
        .expect("group parses");

        group.assign_family_ids();
        assert_eq!(group.controls[0].family_id, None);
        assert_eq!(group.controls[1].family_id, Some("ac".to_string()));
        assert_eq!(
            group.groups[0].controls[0].family_id,
            Some("ac-sub".to_string())
        );
    }

    #[test]
    fn group_class_must_be_family() {
        let result: Result<Group, _> = serde_json::from_value(json!({
            "id": "ac",
            "class": "chapter",
            "title": "Access Control"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn to_row_projects_derived_fields() {
        let control = control(json!({
            "id": "ac-1",
            "title": "Policy and Procedures",
            "props": [
                {"name": "label", "value": "AC-01"},
                {"name": "sort-id", "value": "ac-01"}
            ]
        }));
        let row = control.to_row();
        assert_eq!(row.control_id, "ac-1");
        assert_eq!(row.control_label, "AC-01");
        assert_eq!(row.sort_id, "ac-01");
        assert_eq!(row.title, "Policy and Procedures");
    }
}
