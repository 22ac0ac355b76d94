//! Optional validation of style-property groups
//!
//! Transforms never reject input: missing or malformed fields degrade to a
//! default or to an `undefined` token. Hosts that want to surface problems in
//! the inspector can validate a group first; validation never changes what a
//! transform produces.

use mould_core::Rgba;
use thiserror::Error;

/// A single invalid field, identified by its dotted path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{path}`: {reason}")]
pub struct ValidationError {
    pub path: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for validation
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Implemented by every style-property group
pub trait Validate {
    /// Check the group, reporting the first invalid field under `path`
    fn validate(&self, path: &str) -> Result<()>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, path: &str) -> Result<()> {
        match self {
            Some(group) => group.validate(path),
            None => Ok(()),
        }
    }
}

impl Validate for Rgba {
    fn validate(&self, path: &str) -> Result<()> {
        if !(0.0..=1.0).contains(&self.a) {
            return Err(ValidationError::new(
                field(path, "a"),
                format!("alpha {} is outside 0..=1", self.a),
            ));
        }
        Ok(())
    }
}

/// Join a parent path and a field name with `.`
pub fn field(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

pub(crate) fn finite(path: &str, name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new(field(path, name), "must be a finite number"))
    }
}

pub(crate) fn non_negative(path: &str, name: &str, value: f64) -> Result<()> {
    finite(path, name, value)?;
    if value < 0.0 {
        return Err(ValidationError::new(field(path, name), "must not be negative"));
    }
    Ok(())
}

pub(crate) fn present<T>(path: &str, name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ValidationError::new(field(path, name), "is missing"))
}
