//! Shadows inspector group

use mould_core::{format_opt_number, Rgba};
use serde::{Deserialize, Serialize};

use crate::inspector::{Inspector, StandardInspector};
use crate::validate::{field, finite, non_negative, present, Result, Validate};

/// Separator between rendered shadows. The space sits before the comma; saved
/// documents depend on this exact text.
pub const SHADOW_SEPARATOR: &str = " ,";

/// A single drop shadow
///
/// Offsets and blur may be missing from saved props; they render as
/// `undefined`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowEntry {
    pub active: bool,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub blur: Option<f64>,
    #[serde(default)]
    pub color: Rgba,
}

impl ShadowEntry {
    pub const fn new(x: f64, y: f64, blur: f64, color: Rgba) -> Self {
        Self {
            active: true,
            x: Some(x),
            y: Some(y),
            blur: Some(blur),
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            active: false,
            x: Some(0.0),
            y: Some(0.0),
            blur: Some(0.0),
            color: Rgba::TRANSPARENT,
        }
    }

    /// `"{x}px {y}px {blur}px {color}"` with the standard color formatter
    pub fn to_css(&self) -> String {
        self.to_css_with(&StandardInspector)
    }

    /// Like [`to_css`](Self::to_css), formatting the color through `inspector`
    pub fn to_css_with(&self, inspector: &impl Inspector) -> String {
        format!(
            "{}px {}px {}px {}",
            format_opt_number(self.x),
            format_opt_number(self.y),
            format_opt_number(self.blur),
            inspector.color(&self.color)
        )
    }
}

impl Default for ShadowEntry {
    fn default() -> Self {
        Self::none()
    }
}

/// Shadows in rendering order
pub type ShadowsProps = Vec<ShadowEntry>;

/// Render the active shadows, in list order, as a single shadow string
///
/// An empty string means the group was present but nothing is active.
pub fn transform_shadows(shadows: &[ShadowEntry], inspector: &impl Inspector) -> String {
    let rendered: Vec<String> = shadows
        .iter()
        .filter(|shadow| shadow.active)
        .map(|shadow| shadow.to_css_with(inspector))
        .collect();
    tracing::trace!(total = shadows.len(), active = rendered.len(), "composed shadows");
    rendered.join(SHADOW_SEPARATOR)
}

impl Validate for ShadowEntry {
    fn validate(&self, path: &str) -> Result<()> {
        finite(path, "x", present(path, "x", self.x)?)?;
        finite(path, "y", present(path, "y", self.y)?)?;
        non_negative(path, "blur", present(path, "blur", self.blur)?)?;
        self.color.validate(&field(path, "color"))
    }
}

impl Validate for ShadowsProps {
    fn validate(&self, path: &str) -> Result<()> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, shadow)| shadow.validate(&field(path, &i.to_string())))
    }
}
