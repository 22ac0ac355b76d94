//! Layout inspector group
//!
//! Sizes are edited as a value plus a unit. An absent layout group, or an
//! absent dimension, resolves to `auto`.

use mould_core::{format_number, VisualStyle};
use serde::{Deserialize, Serialize};

use crate::validate::{field, finite, Result, Validate};

/// Unit of a layout length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "auto")]
    Auto,
}

/// A width or height as edited in the layout inspector
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Length {
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Length {
    pub const AUTO: Length = Length {
        value: 0.0,
        unit: LengthUnit::Auto,
    };

    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Px,
        }
    }

    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Percent,
        }
    }

    pub fn to_css(&self) -> String {
        match self.unit {
            LengthUnit::Px => format!("{}px", format_number(self.value)),
            LengthUnit::Percent => format!("{}%", format_number(self.value)),
            LengthUnit::Auto => "auto".to_string(),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::AUTO
    }
}

/// Layout inspector group
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// Rotation in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl LayoutProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, width: Length, height: Length) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn rotate(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }
}

/// Convert an optional layout group into layout keys
///
/// Always produces `width` and `height`; `opacity` and `transform` only when
/// the group sets them.
pub fn transform_layout(layout: Option<&LayoutProps>) -> VisualStyle {
    let mut style = VisualStyle::new();
    let Some(layout) = layout else {
        style.set("width", "auto").set("height", "auto");
        return style;
    };

    style
        .set("width", layout.width.unwrap_or_default().to_css())
        .set("height", layout.height.unwrap_or_default().to_css());
    if let Some(opacity) = layout.opacity {
        style.set("opacity", opacity);
    }
    match layout.rotation {
        Some(degrees) if degrees != 0.0 => {
            style.set("transform", format!("rotate({}deg)", format_number(degrees)));
        }
        _ => {}
    }
    style
}

impl Validate for LayoutProps {
    fn validate(&self, path: &str) -> Result<()> {
        if let Some(width) = &self.width {
            finite(&field(path, "width"), "value", width.value)?;
        }
        if let Some(height) = &self.height {
            finite(&field(path, "height"), "value", height.value)?;
        }
        if let Some(rotation) = self.rotation {
            finite(path, "rotation", rotation)?;
        }
        if let Some(opacity) = self.opacity {
            if !(0.0..=1.0).contains(&opacity) {
                return Err(crate::ValidationError::new(
                    field(path, "opacity"),
                    format!("opacity {opacity} is outside 0..=1"),
                ));
            }
        }
        Ok(())
    }
}
