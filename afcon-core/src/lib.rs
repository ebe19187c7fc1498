pub mod catalog;
pub mod documents;
pub mod input;
pub mod payment;
pub mod record;
pub mod review;
pub mod seating;
pub mod step;
pub mod submission;

use serde::Serialize;
use std::fmt;

pub use input::StepInput;
pub use record::BookingRecord;
pub use step::Step;

/// What is wrong with a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum FieldIssue {
    Missing,
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    #[serde(flatten)]
    pub issue: FieldIssue,
}

/// A step's input was rejected. Recoverable: the user fixes the named
/// fields and retries the same step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as missing when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.missing(field);
        }
        self
    }

    /// Record `field` as missing when `value` is `None`.
    pub fn require_some<T>(&mut self, field: &str, value: &Option<T>) -> &mut Self {
        if value.is_none() {
            self.missing(field);
        }
        self
    }

    pub fn missing(&mut self, field: &str) -> &mut Self {
        self.fields.push(FieldError {
            field: field.to_string(),
            issue: FieldIssue::Missing,
        });
        self
    }

    pub fn invalid(&mut self, field: &str, reason: impl Into<String>) -> &mut Self {
        self.fields.push(FieldError {
            field: field.to_string(),
            issue: FieldIssue::Invalid(reason.into()),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of the fields reported as missing.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.issue == FieldIssue::Missing)
            .map(|f| f.field.as_str())
            .collect()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed:")?;
        for (i, field) in self.fields.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            match &field.issue {
                FieldIssue::Missing => write!(f, "{}{} is required", sep, field.field)?,
                FieldIssue::Invalid(reason) => write!(f, "{}{} {}", sep, field.field, reason)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
