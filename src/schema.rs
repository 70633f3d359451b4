// Shape Layer - strict schema validation
// Every record read from a source table, and every merged record before it
// is written back out, passes through this gate. Validation is closed-set:
// an unknown field is as fatal as a missing one, so an upstream format
// change can never slip through silently.

use serde_json::{Map, Value};

use crate::error::PipelineError;

// ============================================================================
// FIELD TYPES
// ============================================================================

/// Primitive types a table field may carry. No coercion is performed:
/// a numeric-looking string is not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Str,
    Int,
    Bool,
    StrList,
}

impl FieldType {
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Str => "string",
            FieldType::Int => "integer",
            FieldType::Bool => "boolean",
            FieldType::StrList => "string list",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::Str => value.is_string(),
            FieldType::Int => value.is_i64(),
            FieldType::Bool => value.is_boolean(),
            FieldType::StrList => value
                .as_array()
                .map_or(false, |items| items.iter().all(Value::is_string)),
        }
    }
}

/// One field of a shape: name, type, and whether null/absent is tolerated.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub optional: bool,
}

/// Required field.
pub const fn req(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        optional: false,
    }
}

/// Optional (nullable) field.
pub const fn opt(name: &'static str, ty: FieldType) -> FieldSpec {
    FieldSpec {
        name,
        ty,
        optional: true,
    }
}

// ============================================================================
// SHAPE
// ============================================================================

/// Static shape descriptor for one record kind.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    /// Human-readable record kind, used in error messages ("oracle side").
    pub record: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Shape {
    pub const fn new(record: &'static str, fields: &'static [FieldSpec]) -> Self {
        Shape { record, fields }
    }

    /// Validate one raw record against this shape.
    ///
    /// Checks, in order: the record is an object, every declared field is
    /// present with its declared type (unless optional, in which case null
    /// or absent passes), and no undeclared field exists.
    pub fn validate(&self, value: &Value) -> Result<(), PipelineError> {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                return Err(PipelineError::SchemaViolation {
                    record: self.record.to_string(),
                    field: "<record>".to_string(),
                    detail: "expected a JSON object".to_string(),
                });
            }
        };

        for spec in self.fields {
            match object.get(spec.name) {
                None if spec.optional => {}
                None => {
                    return Err(self.violation(object, spec.name, "required field is missing"));
                }
                Some(Value::Null) if spec.optional => {}
                Some(Value::Null) => {
                    return Err(self.violation(object, spec.name, "required field is null"));
                }
                Some(actual) if !spec.ty.matches(actual) => {
                    let detail =
                        format!("expected {}, found {}", spec.ty.name(), json_type(actual));
                    return Err(self.violation(object, spec.name, &detail));
                }
                Some(_) => {}
            }
        }

        for name in object.keys() {
            if !self.fields.iter().any(|spec| spec.name == name) {
                return Err(self.violation(object, name, "unknown field"));
            }
        }

        Ok(())
    }

    fn violation(&self, object: &Map<String, Value>, field: &str, detail: &str) -> PipelineError {
        // Identify the record by its id/codename when it has one.
        let key = object
            .get("id")
            .or_else(|| object.get("codename"))
            .and_then(Value::as_str);
        let record = match key {
            Some(key) => format!("{} '{}'", self.record, key),
            None => self.record.to_string(),
        };
        PipelineError::SchemaViolation {
            record,
            field: field.to_string(),
            detail: detail.to_string(),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::FieldType::{Bool, Int, Str, StrList};
    use super::*;
    use serde_json::json;

    const SHAPE: Shape = Shape::new(
        "test record",
        &[
            req("id", Str),
            req("name", Str),
            req("position", Int),
            req("active", Bool),
            req("tags", StrList),
            opt("cost", Int),
        ],
    );

    #[test]
    fn accepts_valid_record() {
        let value = json!({
            "id": "alpha",
            "name": "Alpha",
            "position": 1,
            "active": true,
            "tags": ["x", "y"],
            "cost": 3,
        });
        assert!(SHAPE.validate(&value).is_ok());
    }

    #[test]
    fn optional_field_may_be_null_or_absent() {
        let with_null = json!({
            "id": "a", "name": "A", "position": 1, "active": false,
            "tags": [], "cost": null,
        });
        assert!(SHAPE.validate(&with_null).is_ok());

        let absent = json!({
            "id": "a", "name": "A", "position": 1, "active": false,
            "tags": [],
        });
        assert!(SHAPE.validate(&absent).is_ok());
    }

    #[test]
    fn rejects_missing_required_field() {
        let value = json!({
            "id": "a", "position": 1, "active": false, "tags": [],
        });
        let err = SHAPE.validate(&value).unwrap_err();
        match err {
            PipelineError::SchemaViolation { record, field, .. } => {
                assert_eq!(record, "test record 'a'");
                assert_eq!(field, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_field() {
        let value = json!({
            "id": "a", "name": "A", "position": 1, "active": false,
            "tags": [], "surprise": "hello",
        });
        let err = SHAPE.validate(&value).unwrap_err();
        match err {
            PipelineError::SchemaViolation { field, .. } => assert_eq!(field, "surprise"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_numeric_string_where_integer_declared() {
        let value = json!({
            "id": "a", "name": "A", "position": "1", "active": false, "tags": [],
        });
        let err = SHAPE.validate(&value).unwrap_err();
        match err {
            PipelineError::SchemaViolation { field, detail, .. } => {
                assert_eq!(field, "position");
                assert!(detail.contains("expected integer"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_null_in_required_field() {
        let value = json!({
            "id": "a", "name": null, "position": 1, "active": false, "tags": [],
        });
        assert!(SHAPE.validate(&value).is_err());
    }

    #[test]
    fn rejects_mixed_list() {
        let value = json!({
            "id": "a", "name": "A", "position": 1, "active": false,
            "tags": ["x", 2],
        });
        assert!(SHAPE.validate(&value).is_err());
    }

    #[test]
    fn rejects_non_object_record() {
        assert!(SHAPE.validate(&json!("just a string")).is_err());
        assert!(SHAPE.validate(&json!([1, 2, 3])).is_err());
    }
}
