//! Filters inspector group and filter/backdrop composition
//!
//! The filters group is an insertion-ordered map from [`FilterKind`] to its
//! settings. Active filters become CSS filter functions in that order; an
//! active layer blur is prepended, while a background blur goes to
//! `backdropFilter` on its own.

use indexmap::IndexMap;
use mould_core::{format_opt_number, VisualStyle, UNDEFINED};
use serde::{Deserialize, Serialize};

use crate::blur::{BlurProps, BlurStyle};
use crate::validate::{field, finite, present, Result, Validate};

/// Filter types offered by the filters inspector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    Brightness,
    Contrast,
    Grayscale,
    #[serde(rename = "Hue Rotate")]
    HueRotate,
    Invert,
    Opacity,
    Saturate,
    Sepia,
}

impl FilterKind {
    pub const ALL: [FilterKind; 8] = [
        FilterKind::Brightness,
        FilterKind::Contrast,
        FilterKind::Grayscale,
        FilterKind::HueRotate,
        FilterKind::Invert,
        FilterKind::Opacity,
        FilterKind::Saturate,
        FilterKind::Sepia,
    ];

    /// Name shown in the inspector
    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Brightness => "Brightness",
            FilterKind::Contrast => "Contrast",
            FilterKind::Grayscale => "Grayscale",
            FilterKind::HueRotate => "Hue Rotate",
            FilterKind::Invert => "Invert",
            FilterKind::Opacity => "Opacity",
            FilterKind::Saturate => "Saturate",
            FilterKind::Sepia => "Sepia",
        }
    }

    /// CSS function name: the label lower-cased, words joined by `-`
    pub fn css_name(&self) -> String {
        self.label()
            .to_lowercase()
            .split(' ')
            .collect::<Vec<_>>()
            .join("-")
    }
}

/// Settings for one filter
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub active: bool,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl FilterEntry {
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            active: true,
            amount: Some(amount),
            unit: Some(unit.into()),
        }
    }

    /// `{amount}{unit}`; missing parts render as `undefined`
    fn argument(&self) -> String {
        format!(
            "{}{}",
            format_opt_number(self.amount),
            self.unit.as_deref().unwrap_or(UNDEFINED)
        )
    }
}

/// Filters inspector group, in stored order
pub type FilterProps = IndexMap<FilterKind, FilterEntry>;

/// Compose `filter` and `backdropFilter` from the blur and filters groups
///
/// - A present filters group always yields a `filter` key, possibly empty.
/// - An active background blur yields `backdropFilter` and leaves `filter`
///   untouched.
/// - An active layer blur is prepended to `filter`.
/// - With neither group, the result is empty.
pub fn transform_filter_props(blur: Option<&BlurProps>, filters: Option<&FilterProps>) -> VisualStyle {
    let mut filter: Option<String> = filters.map(|filters| {
        let tokens: Vec<String> = filters
            .iter()
            .filter(|(_, entry)| entry.active)
            .map(|(kind, entry)| format!("{}({})", kind.css_name(), entry.argument()))
            .collect();
        tokens.join(" ").trim().to_string()
    });
    let mut backdrop_filter = None;

    if let Some(blur) = blur.filter(|blur| blur.active) {
        let token = blur.to_css();
        match blur.blur_style {
            BlurStyle::Background => backdrop_filter = Some(token),
            BlurStyle::Normal => {
                let rest = filter.as_deref().unwrap_or_default();
                filter = Some(format!("{token} {rest}").trim().to_string());
            }
        }
    }

    tracing::trace!(?filter, ?backdrop_filter, "composed filters");

    let mut style = VisualStyle::new();
    if let Some(filter) = filter {
        style.set("filter", filter);
    }
    if let Some(backdrop_filter) = backdrop_filter {
        style.set("backdropFilter", backdrop_filter);
    }
    style
}

impl Validate for FilterEntry {
    fn validate(&self, path: &str) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        finite(path, "amount", present(path, "amount", self.amount)?)?;
        present(path, "unit", self.unit.as_ref())?;
        Ok(())
    }
}

impl Validate for FilterProps {
    fn validate(&self, path: &str) -> Result<()> {
        self.iter()
            .try_for_each(|(kind, entry)| entry.validate(&field(path, kind.label())))
    }
}
