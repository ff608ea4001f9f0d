//! Field-level input checks.
//!
//! Each input type exposes `violations()` returning every failed constraint at
//! once, so callers can report all offending fields in a single response.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ServiceError;

/// One failed constraint on one input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Accumulator for violations of a single input.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(field, message));
    }

    /// Required text: not blank, `min..=max` characters.
    pub fn text(&mut self, field: &str, value: &str, min: usize, max: usize) {
        if value.trim().is_empty() {
            self.push(field, "must not be blank");
            return;
        }
        let len = value.chars().count();
        if len < min || len > max {
            self.push(field, format!("length must be between {} and {} characters", min, max));
        }
    }

    /// Optional text: checked only when present, and then must not be blank.
    pub fn optional_text(&mut self, field: &str, value: Option<&str>, max: usize) {
        if let Some(v) = value {
            if v.trim().is_empty() {
                self.push(field, "must not be blank");
            } else if v.chars().count() > max {
                self.push(field, format!("length must be at most {} characters", max));
            }
        }
    }

    pub fn range(&mut self, field: &str, value: f64, min: f64, max: f64) {
        if !value.is_finite() || value < min || value > max {
            self.push(field, format!("must be between {} and {}", min, max));
        }
    }

    /// Strictly positive, optionally capped.
    pub fn positive(&mut self, field: &str, value: f64, max: Option<f64>) {
        if !value.is_finite() || value <= 0.0 {
            self.push(field, "must be a positive number");
            return;
        }
        if let Some(max) = max {
            if value > max {
                self.push(field, format!("must be at most {}", max));
            }
        }
    }

    pub fn into_vec(self) -> Vec<FieldViolation> {
        self.0
    }
}

/// Turn a violation list into `Ok(())` or a validation error.
pub fn ensure_valid(violations: Vec<FieldViolation>) -> Result<(), ServiceError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(violations))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Expected JSON type of one body field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: true }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, required: false }
    }
}

/// A request body whose fields are type-checked before deserializing, so a
/// missing or mistyped field is reported against its name.
pub trait BodyShape: DeserializeOwned {
    const FIELDS: &'static [FieldSpec];
}

/// Decode a JSON body into `T`, reporting absent or mistyped fields as violations.
/// Unknown fields are ignored.
pub fn decode<T: BodyShape>(body: Value) -> Result<T, ServiceError> {
    let Value::Object(map) = &body else {
        return Err(ServiceError::Validation(vec![FieldViolation::new("body", "must be a JSON object")]));
    };
    let mut v = Violations::new();
    for spec in T::FIELDS {
        match map.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    v.push(spec.name, "is required");
                }
            }
            Some(value) => match spec.kind {
                FieldKind::Text if !value.is_string() => v.push(spec.name, "must be a string"),
                FieldKind::Number if !value.is_number() => v.push(spec.name, "must be a number"),
                _ => {}
            },
        }
    }
    ensure_valid(v.into_vec())?;

    serde_path_to_error::deserialize(body).map_err(|e| {
        ServiceError::Validation(vec![FieldViolation::new(e.path().to_string(), e.inner().to_string())])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_rejects_blank_and_out_of_bounds() {
        let mut v = Violations::new();
        v.text("a", "   ", 1, 10);
        v.text("b", "abc", 5, 10);
        v.text("c", "abcdefghijk", 1, 10);
        v.text("d", "ok", 1, 10);
        let out = v.into_vec();
        let fields: Vec<_> = out.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["a", "b", "c"]);
        assert_eq!(out[0].message, "must not be blank");
    }

    #[test]
    fn text_counts_characters_not_bytes() {
        let mut v = Violations::new();
        // five characters, ten bytes
        v.text("address", "ãõçéí", 5, 5);
        assert!(v.into_vec().is_empty());
    }

    #[test]
    fn range_rejects_non_finite() {
        let mut v = Violations::new();
        v.range("latitude", f64::NAN, -90.0, 90.0);
        v.range("latitude", 90.0, -90.0, 90.0);
        v.range("latitude", 90.5, -90.0, 90.0);
        assert_eq!(v.into_vec().len(), 2);
    }

    #[test]
    fn positive_with_cap() {
        let mut v = Violations::new();
        v.positive("price", 0.0, None);
        v.positive("price", 100.0, Some(100.0));
        v.positive("price", 100.01, Some(100.0));
        let out = v.into_vec();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].message, "must be at most 100");
    }

    #[test]
    fn optional_text_skips_absent() {
        let mut v = Violations::new();
        v.optional_text("name", None, 3);
        v.optional_text("name", Some("abcd"), 3);
        assert_eq!(v.into_vec().len(), 1);
    }

    #[test]
    fn optional_text_rejects_blank_when_present() {
        let mut v = Violations::new();
        v.optional_text("name", Some(""), 10);
        v.optional_text("description", Some("   "), 10);
        let out = v.into_vec();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|f| f.message == "must not be blank"));
    }

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        title: String,
        amount: f64,
        #[serde(default)]
        note: Option<String>,
    }

    impl BodyShape for Sample {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::required("title", FieldKind::Text),
            FieldSpec::required("amount", FieldKind::Number),
            FieldSpec::optional("note", FieldKind::Text),
        ];
    }

    fn fields_of(err: ServiceError) -> Vec<(String, String)> {
        match err {
            ServiceError::Validation(v) => v.into_iter().map(|f| (f.field, f.message)).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn decode_names_missing_and_mistyped_fields() {
        let err = decode::<Sample>(serde_json::json!({"amount": "abc", "note": 3})).unwrap_err();
        assert_eq!(
            fields_of(err),
            [
                ("title".to_string(), "is required".to_string()),
                ("amount".to_string(), "must be a number".to_string()),
                ("note".to_string(), "must be a string".to_string()),
            ]
        );
    }

    #[test]
    fn decode_treats_null_optional_as_absent_and_ignores_unknown() {
        let s: Sample =
            decode(serde_json::json!({"title": "t", "amount": 2, "note": null, "extra": [1]})).unwrap();
        assert_eq!(s.title, "t");
        assert_eq!(s.amount, 2.0);
        assert_eq!(s.note, None);
    }

    #[test]
    fn decode_rejects_non_object_bodies() {
        let err = decode::<Sample>(serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(fields_of(err)[0].0, "body");
    }

    #[test]
    fn ensure_valid_maps_to_error() {
        assert!(ensure_valid(vec![]).is_ok());
        let err = ensure_valid(vec![FieldViolation::new("x", "bad")]).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref v) if v.len() == 1));
    }
}
