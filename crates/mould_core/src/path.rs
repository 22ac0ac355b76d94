//! Component paths
//!
//! A component is addressed by the named scopes leading to it (kit, page,
//! component) and by its child indices within the component tree. The string
//! form keys inspector panels: `kit/page/0-2`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a component in a design document
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Vec<String>, Vec<usize>)", into = "(Vec<String>, Vec<usize>)")]
pub struct ComponentPath {
    pub segments: Vec<String>,
    pub indices: Vec<usize>,
}

impl ComponentPath {
    pub fn new<S: Into<String>>(
        segments: impl IntoIterator<Item = S>,
        indices: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            indices: indices.into_iter().collect(),
        }
    }

    /// Path of the `index`-th child of this component
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self {
            segments: self.segments.clone(),
            indices,
        }
    }
}

impl From<(Vec<String>, Vec<usize>)> for ComponentPath {
    fn from((segments, indices): (Vec<String>, Vec<usize>)) -> Self {
        Self { segments, indices }
    }
}

impl From<ComponentPath> for (Vec<String>, Vec<usize>) {
    fn from(path: ComponentPath) -> Self {
        (path.segments, path.indices)
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<String> = self.indices.iter().map(usize::to_string).collect();
        write!(f, "{}/{}", self.segments.join("/"), indices.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_segments_and_indices() {
        let path = ComponentPath::new(["kit", "page"], [0, 2]);
        assert_eq!(path.to_string(), "kit/page/0-2");
    }

    #[test]
    fn empty_parts_keep_separator() {
        assert_eq!(ComponentPath::default().to_string(), "/");
        assert_eq!(ComponentPath::new(["kit"], []).to_string(), "kit/");
    }

    #[test]
    fn child_appends_index() {
        let root = ComponentPath::new(["kit", "page"], [0]);
        assert_eq!(root.child(3).to_string(), "kit/page/0-3");
        assert_eq!(root.indices, vec![0]);
    }

    #[test]
    fn deserializes_from_pair() {
        let path: ComponentPath = serde_json::from_str(r#"[["kit","home"],[1,0]]"#).unwrap();
        assert_eq!(path.to_string(), "kit/home/1-0");
    }
}
