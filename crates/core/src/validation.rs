//! Field-level validation shared by every catalog document.
//!
//! Create inputs arrive with every field optional; the per-document
//! `validate` functions use the helpers below to collect *all* violations
//! before deciding whether a typed document can be built.

use std::fmt;

use serde::Serialize;

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path in request notation, e.g. `files.0.format`.
    pub field: String,
    pub message: String,
}

/// Every violation found while validating one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether any violation was recorded against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Record a violation when a required value is absent.
pub fn require<T>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.push(field, "is required");
    }
    value
}

/// Like [`require`], but an empty string also counts as missing.
pub fn require_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(text) if !text.is_empty() => Some(text),
        _ => {
            errors.push(field, "is required");
            None
        }
    }
}

/// Reject a present-but-empty value for a required text field on update.
///
/// Absent values are fine: an update only touches the fields it carries.
pub fn reject_empty_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if value.is_some_and(str::is_empty) {
        errors.push(field, "must not be empty");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_records_missing_value() {
        let mut errors = ValidationErrors::default();
        assert_eq!(require::<f64>(&mut errors, "price", None), None);
        assert!(errors.has_field("price"));
    }

    #[test]
    fn require_passes_zero_through() {
        let mut errors = ValidationErrors::default();
        assert_eq!(require(&mut errors, "price", Some(0.0)), Some(0.0));
        assert!(errors.is_empty());
    }

    #[test]
    fn require_text_rejects_empty_string() {
        let mut errors = ValidationErrors::default();
        assert_eq!(require_text(&mut errors, "title", Some(String::new())), None);
        assert_eq!(errors.violations()[0].message, "is required");
    }

    #[test]
    fn reject_empty_text_ignores_absent_value() {
        let mut errors = ValidationErrors::default();
        reject_empty_text(&mut errors, "title", None);
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn display_joins_every_violation() {
        let mut errors = ValidationErrors::default();
        errors.push("title", "is required");
        errors.push("price", "is required");
        assert_eq!(errors.to_string(), "title: is required; price: is required");
    }
}
