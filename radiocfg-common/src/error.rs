//! Error types for radiocfg

use thiserror::Error;

/// Error types for the radiocfg library.
#[derive(Debug, Error)]
pub enum Error {
    /// A decoded document violates a field constraint.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// File I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing errors.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// The constraint a field value failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Numeric value outside an inclusive range.
    #[error("value {value} outside range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// String value does not match the required pattern.
    #[error("value {value:?} does not match pattern `{pattern}`")]
    PatternMismatch {
        value: String,
        pattern: &'static str,
    },

    /// String value is not a member of a closed enumeration.
    #[error("value {value:?} not in enumerated set [{allowed}]")]
    NotInEnum {
        value: String,
        allowed: &'static str,
    },
}

/// A field-level constraint violation.
///
/// `field` is the path of the offending field using wire names, e.g.
/// `spec.PLMNInfo[0].nssai[1].sd`. Paths are built innermost-first: a value
/// object reports its own field name and each enclosing aggregate prepends its
/// segment via [`ValidationError::within`] or [`ValidationError::within_index`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {violation}")]
pub struct ValidationError {
    /// Dotted path of the offending field
    pub field: String,
    /// The violated constraint
    pub violation: Violation,
}

impl ValidationError {
    /// Creates a new validation error for a single field.
    pub fn new(field: impl Into<String>, violation: Violation) -> Self {
        Self {
            field: field.into(),
            violation,
        }
    }

    /// Range violation on an integer field.
    pub fn out_of_range(field: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::new(field, Violation::OutOfRange { value, min, max })
    }

    /// Pattern violation on a string field.
    pub fn pattern(field: impl Into<String>, value: impl Into<String>, pattern: &'static str) -> Self {
        Self::new(
            field,
            Violation::PatternMismatch {
                value: value.into(),
                pattern,
            },
        )
    }

    /// Enumeration violation on a string field.
    pub fn not_in_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: &'static str,
    ) -> Self {
        Self::new(
            field,
            Violation::NotInEnum {
                value: value.into(),
                allowed,
            },
        )
    }

    /// Prefixes the field path with an enclosing field name.
    pub fn within(mut self, parent: &str) -> Self {
        self.field = join_path(parent, &self.field);
        self
    }

    /// Prefixes the field path with an indexed list element of an enclosing field.
    pub fn within_index(self, parent: &str, index: usize) -> Self {
        self.within(&format!("{parent}[{index}]"))
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.is_empty() {
        parent.to_string()
    } else if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}.{child}")
    }
}

/// A constraint-carrying value that can check itself.
///
/// Implementations are pure: no I/O, no logging, no interior mutability. They
/// return the first violation found in field declaration order.
pub trait Validate {
    /// Checks every field constraint of this value and its nested values.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Returns true if [`Validate::validate`] succeeds.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Validates every element of a list field, reporting the failing index.
pub fn validate_list<T: Validate>(field: &str, items: &[T]) -> Result<(), ValidationError> {
    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|e| e.within_index(field, index))?;
    }
    Ok(())
}
