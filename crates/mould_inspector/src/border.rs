//! Border inspector group

use mould_core::{format_opt_number, px, Rgba, VisualStyle};
use serde::{Deserialize, Serialize};

use crate::color::transform_color_to_str;
use crate::validate::{field, non_negative, present, Result, Validate};

/// Border line style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
        }
    }
}

/// Border inspector group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderProps {
    pub active: bool,
    /// Stroke width; a missing width renders as `undefinedpx`
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub style: BorderStyle,
    #[serde(default)]
    pub color: Rgba,
    /// Corner radius, applied whether or not the stroke is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl BorderProps {
    pub fn new(width: f64, color: Rgba) -> Self {
        Self {
            active: true,
            width: Some(width),
            style: BorderStyle::Solid,
            color,
            radius: None,
        }
    }

    pub fn style(mut self, style: BorderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn rounded(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

impl Default for BorderProps {
    fn default() -> Self {
        Self {
            active: false,
            width: Some(1.0),
            style: BorderStyle::Solid,
            color: Rgba::BLACK,
            radius: None,
        }
    }
}

/// Convert a border group into `borderWidth`/`borderStyle`/`borderColor`/`borderRadius`
pub fn transform_border_props(border: &BorderProps) -> VisualStyle {
    let mut style = VisualStyle::new();
    if border.active {
        style
            .set("borderWidth", format!("{}px", format_opt_number(border.width)))
            .set("borderStyle", border.style.as_css())
            .set("borderColor", transform_color_to_str(&border.color));
    }
    if let Some(radius) = border.radius {
        style.set("borderRadius", px(radius));
    }
    style
}

impl Validate for BorderProps {
    fn validate(&self, path: &str) -> Result<()> {
        non_negative(path, "width", present(path, "width", self.width)?)?;
        if let Some(radius) = self.radius {
            non_negative(path, "radius", radius)?;
        }
        self.color.validate(&field(path, "color"))
    }
}
