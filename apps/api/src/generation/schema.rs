//! Schema walk over the untyped model output.
//!
//! The model's JSON is checked against a static field table before it is
//! trusted as `GeneratedContent`. Every problem is collected rather than
//! stopping at the first one. Two repairs are applied along the way: numeric
//! display fields become strings, and `null` optional fields are dropped.

use serde_json::{Map, Value};

use crate::generation::error::{IssueKind, SchemaIssue};

#[derive(Debug, Clone, Copy)]
enum Shape {
    Text,
    /// A display string; plain numbers are accepted and converted.
    Display,
    TextList,
    Record(&'static [Field]),
    RecordList(&'static [Field]),
}

#[derive(Debug, Clone, Copy)]
struct Field {
    name: &'static str,
    shape: Shape,
    required: bool,
}

const fn required(name: &'static str, shape: Shape) -> Field {
    Field {
        name,
        shape,
        required: true,
    }
}

const fn optional(name: &'static str, shape: Shape) -> Field {
    Field {
        name,
        shape,
        required: false,
    }
}

const EXPERIENCE: &[Field] = &[
    required("company", Shape::Text),
    required("position", Shape::Text),
    required("duration", Shape::Text),
    required("description", Shape::Text),
];

const PROJECT: &[Field] = &[
    required("title", Shape::Text),
    required("description", Shape::Text),
    required("technologies", Shape::TextList),
    optional("link", Shape::Text),
    optional("metrics", Shape::Text),
];

const STATS: &[Field] = &[
    required("yearsExperience", Shape::Display),
    required("projectsCompleted", Shape::Display),
    required("clientsSatisfied", Shape::Display),
    required("codeCommits", Shape::Display),
];

const CERTIFICATION: &[Field] = &[
    required("name", Shape::Text),
    required("issuer", Shape::Text),
    required("year", Shape::Display),
];

const EDUCATION: &[Field] = &[
    required("degree", Shape::Text),
    required("institution", Shape::Text),
    required("year", Shape::Display),
    required("details", Shape::Text),
];

const TESTIMONIAL: &[Field] = &[
    required("name", Shape::Text),
    required("position", Shape::Text),
    required("company", Shape::Text),
    required("text", Shape::Text),
];

const SERVICE: &[Field] = &[
    required("title", Shape::Text),
    required("description", Shape::Text),
    required("features", Shape::TextList),
];

const SOCIAL_LINK: &[Field] = &[
    required("platform", Shape::Text),
    required("url", Shape::Text),
];

const GENERATED_CONTENT: &[Field] = &[
    required("headline", Shape::Text),
    required("enhancedCareerSummary", Shape::Text),
    required("experience", Shape::RecordList(EXPERIENCE)),
    required("projects", Shape::RecordList(PROJECT)),
    required("stats", Shape::Record(STATS)),
    required("certifications", Shape::RecordList(CERTIFICATION)),
    required("education", Shape::RecordList(EDUCATION)),
    required("testimonials", Shape::RecordList(TESTIMONIAL)),
    required("services", Shape::RecordList(SERVICE)),
    required("theme", Shape::Text),
    optional("socialLinks", Shape::RecordList(SOCIAL_LINK)),
];

/// Checks (and minimally repairs) a top-level generated-content object.
/// Returns every issue found; an empty list means the object is well-formed.
pub fn check_generated_content(object: &mut Map<String, Value>) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    check_record(object, GENERATED_CONTENT, "", &mut issues);
    issues
}

fn check_record(
    object: &mut Map<String, Value>,
    fields: &[Field],
    prefix: &str,
    issues: &mut Vec<SchemaIssue>,
) {
    for field in fields {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{prefix}.{}", field.name)
        };

        match object.get_mut(field.name) {
            None | Some(Value::Null) if field.required => issues.push(SchemaIssue {
                path,
                kind: IssueKind::Missing,
            }),
            None => {}
            Some(Value::Null) => {
                object.remove(field.name);
            }
            Some(value) => check_value(value, field.shape, &path, issues),
        }
    }
}

fn check_value(value: &mut Value, shape: Shape, path: &str, issues: &mut Vec<SchemaIssue>) {
    match shape {
        Shape::Text => {
            if !value.is_string() {
                issues.push(wrong_type(path, "a string", value));
            }
        }
        Shape::Display => {
            if value.is_number() {
                *value = Value::String(value.to_string());
            } else if !value.is_string() {
                issues.push(wrong_type(path, "a string", value));
            }
        }
        Shape::TextList => match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        issues.push(wrong_type(&format!("{path}[{i}]"), "a string", item));
                    }
                }
            }
            other => issues.push(wrong_type(path, "an array", other)),
        },
        Shape::Record(fields) => match value {
            Value::Object(object) => check_record(object, fields, path, issues),
            other => issues.push(wrong_type(path, "an object", other)),
        },
        Shape::RecordList(fields) => match value {
            Value::Array(items) => {
                for (i, item) in items.iter_mut().enumerate() {
                    let item_path = format!("{path}[{i}]");
                    match item {
                        Value::Object(object) => check_record(object, fields, &item_path, issues),
                        other => issues.push(wrong_type(&item_path, "an object", other)),
                    }
                }
            }
            other => issues.push(wrong_type(path, "an array", other)),
        },
    }
}

fn wrong_type(path: &str, expected: &'static str, found: &Value) -> SchemaIssue {
    SchemaIssue {
        path: path.to_string(),
        kind: IssueKind::WrongType {
            expected,
            found: describe(found),
        },
    }
}

pub(crate) fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn paths(issues: &[SchemaIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.path.as_str()).collect()
    }

    fn minimal_object() -> Map<String, Value> {
        match json!({
            "headline": "h",
            "enhancedCareerSummary": "s",
            "experience": [],
            "projects": [],
            "stats": {
                "yearsExperience": "5+",
                "projectsCompleted": "20+",
                "clientsSatisfied": "10+",
                "codeCommits": "1K+"
            },
            "certifications": [],
            "education": [],
            "testimonials": [],
            "services": [],
            "theme": "modern-dark"
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_minimal_object_passes() {
        let mut object = minimal_object();
        assert!(check_generated_content(&mut object).is_empty());
    }

    #[test]
    fn test_empty_object_reports_every_required_field() {
        let mut object = Map::new();
        let issues = check_generated_content(&mut object);
        assert_eq!(
            paths(&issues),
            vec![
                "headline",
                "enhancedCareerSummary",
                "experience",
                "projects",
                "stats",
                "certifications",
                "education",
                "testimonials",
                "services",
                "theme",
            ]
        );
        assert!(issues.iter().all(|i| i.kind == IssueKind::Missing));
    }

    #[test]
    fn test_nested_problems_carry_full_paths() {
        let mut object = minimal_object();
        object.insert(
            "projects".to_string(),
            json!([
                {"title": "A", "description": "d", "technologies": ["Rust"]},
                {"title": "B", "description": "d", "technologies": "Rust, Go"},
                {"title": "C", "technologies": ["Go", 7]}
            ]),
        );
        object.insert("stats".to_string(), json!(["5+"]));

        let issues = check_generated_content(&mut object);
        assert_eq!(
            paths(&issues),
            vec![
                "projects[1].technologies",
                "projects[2].description",
                "projects[2].technologies[1]",
                "stats",
            ]
        );
        assert_eq!(
            issues[0].kind,
            IssueKind::WrongType {
                expected: "an array",
                found: "a string"
            }
        );
    }

    #[test]
    fn test_sequence_where_object_expected_and_vice_versa() {
        let mut object = minimal_object();
        object.insert("experience".to_string(), json!({"company": "Acme"}));
        object.insert("headline".to_string(), json!(["not", "a", "string"]));

        let issues = check_generated_content(&mut object);
        assert_eq!(paths(&issues), vec!["headline", "experience"]);
    }

    #[test]
    fn test_numeric_display_fields_are_converted_to_strings() {
        let mut object = minimal_object();
        object.insert(
            "stats".to_string(),
            json!({
                "yearsExperience": 7,
                "projectsCompleted": "40+",
                "clientsSatisfied": 12,
                "codeCommits": "5K"
            }),
        );
        object.insert(
            "certifications".to_string(),
            json!([{"name": "CKA", "issuer": "CNCF", "year": 2023}]),
        );

        assert!(check_generated_content(&mut object).is_empty());
        assert_eq!(object["stats"]["yearsExperience"], "7");
        assert_eq!(object["stats"]["clientsSatisfied"], "12");
        assert_eq!(object["certifications"][0]["year"], "2023");
    }

    #[test]
    fn test_null_optional_fields_are_dropped_and_null_required_fields_are_missing() {
        let mut object = minimal_object();
        object.insert("socialLinks".to_string(), Value::Null);
        object.insert(
            "projects".to_string(),
            json!([{"title": "A", "description": "d", "technologies": [], "link": null}]),
        );
        object.insert("headline".to_string(), Value::Null);

        let issues = check_generated_content(&mut object);
        assert_eq!(paths(&issues), vec!["headline"]);
        assert!(!object.contains_key("socialLinks"));
        assert!(object["projects"][0].get("link").is_none());
    }

    #[test]
    fn test_boolean_display_field_is_rejected() {
        let mut object = minimal_object();
        object["stats"]["codeCommits"] = json!(true);
        let issues = check_generated_content(&mut object);
        assert_eq!(paths(&issues), vec!["stats.codeCommits"]);
    }
}
