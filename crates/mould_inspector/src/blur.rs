//! Blur inspector group

use mould_core::{format_opt_number, UNDEFINED};
use serde::{Deserialize, Serialize};

use crate::validate::{non_negative, present, Result, Validate};

/// Where a blur applies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlurStyle {
    /// Blurs what is behind the layer, written to `backdropFilter`
    Background,
    /// Blurs the layer itself, composed into `filter`
    #[default]
    #[serde(other)]
    Normal,
}

/// Blur inspector group
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurProps {
    pub active: bool,
    #[serde(default)]
    pub blur_amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub blur_style: BlurStyle,
}

impl BlurProps {
    pub fn new(amount: f64, unit: impl Into<String>, style: BlurStyle) -> Self {
        Self {
            active: true,
            blur_amount: Some(amount),
            unit: Some(unit.into()),
            blur_style: style,
        }
    }

    /// `blur({amount}{unit})`; missing parts render as `undefined`
    pub fn to_css(&self) -> String {
        format!(
            "blur({}{})",
            format_opt_number(self.blur_amount),
            self.unit.as_deref().unwrap_or(UNDEFINED)
        )
    }
}

impl Validate for BlurProps {
    fn validate(&self, path: &str) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        non_negative(path, "blurAmount", present(path, "blurAmount", self.blur_amount)?)?;
        present(path, "unit", self.unit.as_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_format() {
        assert_eq!(BlurProps::new(5.0, "px", BlurStyle::Normal).to_css(), "blur(5px)");
    }

    #[test]
    fn missing_amount_degrades_to_undefined() {
        let blur = BlurProps {
            active: true,
            ..BlurProps::default()
        };
        assert_eq!(blur.to_css(), "blur(undefinedundefined)");
        assert_eq!(blur.validate("blurProps").unwrap_err().path, "blurProps.blurAmount");
    }

    #[test]
    fn unknown_styles_are_layer_blur() {
        let blur: BlurProps =
            serde_json::from_str(r#"{"active":true,"blurAmount":2,"unit":"px","blurStyle":"Layer"}"#)
                .unwrap();
        assert_eq!(blur.blur_style, BlurStyle::Normal);

        let blur: BlurProps = serde_json::from_str(
            r#"{"active":true,"blurAmount":2,"unit":"px","blurStyle":"Background"}"#,
        )
        .unwrap();
        assert_eq!(blur.blur_style, BlurStyle::Background);
    }

    #[test]
    fn missing_style_is_layer_blur() {
        let blur: BlurProps =
            serde_json::from_str(r#"{"active":true,"blurAmount":3,"unit":"px"}"#).unwrap();
        assert_eq!(blur.blur_style, BlurStyle::Normal);
        assert_eq!(serde_json::to_string(&BlurStyle::Normal).unwrap(), r#""Normal""#);
    }

    #[test]
    fn inactive_blur_is_always_valid() {
        assert!(BlurProps::default().validate("blurProps").is_ok());
    }
}
