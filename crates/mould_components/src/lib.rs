//! Mould Components
//!
//! Components of the Mould design tool, reduced to what a renderer needs:
//! each component turns its style-property groups into a flat
//! [`VisualStyle`](mould_core::VisualStyle).
//!
//! - [`input`]: the editable input field
//! - [`config`]: TOML configuration for component defaults
//!
//! Transforms are pure and never fail. Validation is available separately
//! through [`StylePropertyGroups::validate`].

pub mod config;
pub mod input;

pub use config::{ConfigError, TransformConfig};
pub use input::{transform, InputProps, InputTransform, StylePropertyGroups};
