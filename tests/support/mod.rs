use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE_UUID: &str = "2a66a93b-1e3c-4b68-9f42-92a1a9a3d6a9";

/// Two-family catalog exercising the shapes the loader must handle: derived
/// labels and sort ids, parameter placeholders in statement prose, nested
/// statement items, an untitled sub-control, and per-control guidance and
/// implementation parts.
pub fn sample_catalog() -> Value {
    json!({
        "uuid": SAMPLE_UUID,
        "metadata": {
            "title": "Test Baseline",
            "version": "5.1",
            "oscal-version": "1.0.0",
            "last-modified": "2021-06-08T13:57:28.355446-04:00"
        },
        "groups": [
            {
                "id": "ac",
                "class": "family",
                "title": "Access Control",
                "controls": [
                    {
                        "id": "ac-1",
                        "class": "SP800-53",
                        "title": "Policy and Procedures",
                        "params": [
                            {
                                "id": "ac-1_prm_1",
                                "label": "organization-defined personnel or roles"
                            },
                            {"id": "ac-1_prm_2", "values": ["annually"]}
                        ],
                        "props": [
                            {"name": "label", "value": "AC-01"},
                            {"name": "sort-id", "value": "ac-01"}
                        ],
                        "parts": [
                            {
                                "id": "ac-1_smt",
                                "name": "statement",
                                "prose": "Develop and disseminate to {{ insert: param, ac-1_prm_1 }}:",
                                "parts": [
                                    {
                                        "id": "ac-1_smt.a",
                                        "name": "item",
                                        "props": [{"name": "label", "value": "a."}],
                                        "prose": "An access control policy, reviewed {{ insert: param, ac-1_prm_2 }};"
                                    },
                                    {
                                        "id": "ac-1_smt.b",
                                        "name": "item",
                                        "props": [{"name": "label", "value": "b."}],
                                        "prose": "Procedures to facilitate the policy."
                                    }
                                ]
                            },
                            {
                                "id": "ac-1_gdn",
                                "name": "guidance",
                                "prose": "Access control policy addresses the controls in the AC family."
                            },
                            {
                                "id": "ac-1_imp",
                                "name": "implementation",
                                "prose": "Implemented via the organization-wide policy program."
                            }
                        ]
                    },
                    {
                        "id": "ac-2",
                        "title": "Account Management",
                        "props": [
                            {"name": "label", "value": "AC-02"},
                            {"name": "sort-id", "value": "ac-02"}
                        ],
                        "parts": [
                            {"id": "ac-2_smt", "name": "statement", "prose": "Manage system accounts."}
                        ],
                        "controls": [
                            {
                                "id": "ac-2.1",
                                "props": [
                                    {"name": "label", "value": "AC-02(01)"},
                                    {"name": "sort-id", "value": "ac-02.01"}
                                ],
                                "parts": [
                                    {
                                        "id": "ac-2.1_smt",
                                        "name": "statement",
                                        "prose": "Support account management with automated mechanisms."
                                    }
                                ]
                            }
                        ]
                    }
                ]
            },
            {
                "id": "au",
                "class": "family",
                "title": "Audit and Accountability",
                "controls": [
                    {
                        "id": "au-1",
                        "title": "Audit Policy",
                        "props": [
                            {"name": "label", "value": "AU-01"},
                            {"name": "sort-id", "value": "au-01"}
                        ],
                        "parts": [
                            {"id": "au-1_smt", "name": "statement", "prose": "Develop an audit policy."}
                        ]
                    }
                ]
            }
        ]
    })
}

/// The same document wrapped in the `"catalog"` envelope some publishers use.
pub fn enveloped(catalog: Value) -> Value {
    json!({"catalog": catalog})
}

pub fn write_catalog_file(catalog: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to allocate catalog file");
    file.write_all(serde_json::to_string(catalog).unwrap().as_bytes())
        .expect("failed to write catalog file");
    file.flush().expect("failed to flush catalog file");
    file
}
