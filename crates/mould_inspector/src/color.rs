//! Color and fill inspector groups

use mould_core::Rgba;
use serde::{Deserialize, Serialize};

use crate::validate::{field, Result, Validate};

/// Convert an inspector color to its CSS string
pub fn transform_color_to_str(color: &Rgba) -> String {
    color.to_string()
}

/// Fill inspector group
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillProps {
    pub active: bool,
    #[serde(default)]
    pub color: Rgba,
}

impl FillProps {
    pub fn new(color: Rgba) -> Self {
        Self {
            active: true,
            color,
        }
    }
}

impl Default for FillProps {
    fn default() -> Self {
        Self {
            active: false,
            color: Rgba::WHITE,
        }
    }
}

impl Validate for FillProps {
    fn validate(&self, path: &str) -> Result<()> {
        self.color.validate(&field(path, "color"))
    }
}
