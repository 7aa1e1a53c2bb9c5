use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaIssue {
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaValidationResult {
    pub passed: bool,
    pub issues: Vec<SchemaIssue>,
}

const LIST_FIELDS: &[&str] = &[
    "education",
    "experience",
    "projects",
    "github_projects",
    "certificates",
    "achievements",
];

const OBJECT_FIELDS: &[&str] = &["technical_skills", "github_profile_overview"];

/// Reports how far raw input sits from the canonical portfolio shape.
///
/// Advisory only: normalization accepts anything. Optional sections that are
/// absent are fine; sections that are present with the wrong JSON type, or a
/// contact block without a name, are reported.
pub fn validate_portfolio_schema(data: &Value) -> SchemaValidationResult {
    let Some(root) = data.as_object() else {
        return SchemaValidationResult {
            passed: false,
            issues: vec![issue("$", "Portfolio data must be a JSON object")],
        };
    };

    let mut issues = Vec::new();

    match root.get("contact_information") {
        None | Some(Value::Null) => {
            issues.push(issue(
                "contact_information",
                "Missing required section 'contact_information'",
            ));
        }
        Some(Value::Object(contact)) => {
            let has_name = contact
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| !name.trim().is_empty());
            if !has_name {
                issues.push(issue(
                    "contact_information.name",
                    "Contact name is missing or blank",
                ));
            }
        }
        Some(other) => {
            issues.push(issue(
                "contact_information",
                &format!("Expected an object, found {}", type_name(other)),
            ));
        }
    }

    for &field in LIST_FIELDS {
        if let Some(value) = root.get(field) {
            if !value.is_array() {
                issues.push(issue(
                    field,
                    &format!("Expected an array, found {}", type_name(value)),
                ));
            }
        }
    }

    for &field in OBJECT_FIELDS {
        if let Some(value) = root.get(field) {
            if !value.is_object() {
                issues.push(issue(
                    field,
                    &format!("Expected an object, found {}", type_name(value)),
                ));
            }
        }
    }

    SchemaValidationResult {
        passed: issues.is_empty(),
        issues,
    }
}

fn issue(field: &str, reason: &str) -> SchemaIssue {
    SchemaIssue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
