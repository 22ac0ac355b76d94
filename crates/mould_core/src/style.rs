//! Flat visual style records
//!
//! A [`VisualStyle`] is the renderable output of a style transform: an
//! insertion-ordered map from CSS-like attribute names (`fill`, `borderWidth`,
//! `backdropFilter`, ...) to string or number values.
//!
//! Records are built in stages. Each stage may overwrite keys written by an
//! earlier one; an overwritten key keeps the position of its first insertion,
//! and keys are never removed.
//!
//! ```rust
//! use mould_core::{StyleValue, VisualStyle};
//!
//! let mut style = VisualStyle::new();
//! style.set("fill", "rgba(0,0,0,1)");
//! style.set("flexGrow", 1.0);
//!
//! let mut later = VisualStyle::new();
//! later.set("fill", "rgba(255,255,255,1)");
//! style.merge(later);
//!
//! assert_eq!(style.get_str("fill"), Some("rgba(255,255,255,1)"));
//! assert_eq!(style.get("flexGrow"), Some(&StyleValue::Number(1.0)));
//! ```

use std::fmt;

use indexmap::map::{IntoIter, Iter};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::number::format_number;

/// A single attribute value in a visual style record
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Str(String),
}

impl StyleValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Str(_) => None,
        }
    }
}

// Integral numbers are written without a fractional part so that records
// round-trip through the design tool unchanged.
impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Str(s) => serializer.serialize_str(s),
            StyleValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 => {
                serializer.serialize_i64(*n as i64)
            }
            StyleValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Str(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Str(value.to_string())
    }
}

/// Flat, ordered mapping of visual attribute names to values
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisualStyle {
    entries: IndexMap<String, StyleValue>,
}

impl VisualStyle {
    /// Create a new empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, overwriting any previous value in place
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Builder form of [`VisualStyle::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Merge another record on top of this one; `other` wins on collision
    pub fn merge(&mut self, other: VisualStyle) -> &mut Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attribute names in record order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, StyleValue> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a VisualStyle {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for VisualStyle {
    type Item = (String, StyleValue);
    type IntoIter = IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for VisualStyle {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
