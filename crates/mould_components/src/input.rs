//! Editable input field
//!
//! The input component's style transform turns its style-property groups
//! into the flat visual style the raw input element renders with.
//!
//! Merge order, later steps winning on key collision:
//!
//! 1. `fill` from an active fill group
//! 2. border keys
//! 3. layout keys (always present; an absent group is `auto`)
//! 4. `value`, `placeholder`, `color`, `size` from the input group or defaults
//! 5. `shadow` when a shadows group is present
//! 6. `filter` / `backdropFilter` from the filters and blur groups
//! 7. keys contributed by the parent container
//!
//! # Example
//!
//! ```rust
//! use mould_components::input::{transform, StylePropertyGroups};
//! use mould_core::Rgba;
//! use mould_inspector::{FillProps, ParentContext};
//!
//! let groups = StylePropertyGroups::new().fill(FillProps::new(Rgba::WHITE));
//! let style = transform(Some(&groups), Some(&ParentContext::stack()));
//!
//! assert_eq!(style.get_str("fill"), Some("rgba(255,255,255,1)"));
//! assert_eq!(style.get_str("size"), Some("14px"));
//! assert!(style.contains_key("flexGrow"));
//! ```

use mould_core::{px, Rgba, VisualStyle};
use mould_inspector::validate::{field, Result, Validate};
use mould_inspector::{
    transform_filter_props, transform_shadows, BlurProps, BorderProps, ContainerLayoutProps,
    FillProps, FilterProps, Inspector, LayoutProps, ParentContext, ShadowsProps,
    StandardInspector,
};
use serde::{Deserialize, Serialize};

use crate::config::TransformConfig;

/// Default text size in pixels
pub const DEFAULT_INPUT_SIZE: f64 = 14.0;

/// Input inspector group: content and text appearance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputProps {
    pub value: String,
    pub placeholder: String,
    pub color: Rgba,
    /// Text size in pixels
    pub size: f64,
}

impl InputProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

impl Default for InputProps {
    fn default() -> Self {
        Self {
            value: String::new(),
            placeholder: String::new(),
            color: Rgba::BLACK,
            size: DEFAULT_INPUT_SIZE,
        }
    }
}

impl Validate for InputProps {
    fn validate(&self, path: &str) -> Result<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(mould_inspector::ValidationError::new(
                field(path, "size"),
                "must be a positive number",
            ));
        }
        self.color.validate(&field(path, "color"))
    }
}

/// Style-property groups of an input component
///
/// Every group is independently optional. Field names on the wire follow the
/// design tool's saved props.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePropertyGroups {
    #[serde(rename = "layoutProps", default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutProps>,
    #[serde(rename = "shadowsProps", default, skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowsProps>,
    #[serde(rename = "InputProps", default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputProps>,
    #[serde(rename = "fillProps", default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillProps>,
    #[serde(rename = "borderProps", default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderProps>,
    #[serde(rename = "blurProps", default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<BlurProps>,
    #[serde(rename = "filtersProps", default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterProps>,
    #[serde(rename = "containerLayoutProps", default, skip_serializing_if = "Option::is_none")]
    pub container_layout: Option<ContainerLayoutProps>,
}

impl StylePropertyGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, layout: LayoutProps) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn shadows(mut self, shadows: ShadowsProps) -> Self {
        self.shadows = Some(shadows);
        self
    }

    pub fn input(mut self, input: InputProps) -> Self {
        self.input = Some(input);
        self
    }

    pub fn fill(mut self, fill: FillProps) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn border(mut self, border: BorderProps) -> Self {
        self.border = Some(border);
        self
    }

    pub fn blur(mut self, blur: BlurProps) -> Self {
        self.blur = Some(blur);
        self
    }

    pub fn filters(mut self, filters: FilterProps) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn container_layout(mut self, container: ContainerLayoutProps) -> Self {
        self.container_layout = Some(container);
        self
    }

    /// Check every present group, reporting the first invalid field
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self, "")
    }
}

impl Validate for StylePropertyGroups {
    fn validate(&self, _path: &str) -> Result<()> {
        self.layout.validate("layoutProps")?;
        self.shadows.validate("shadowsProps")?;
        self.input.validate("InputProps")?;
        self.fill.validate("fillProps")?;
        self.border.validate("borderProps")?;
        self.blur.validate("blurProps")?;
        self.filters.validate("filtersProps")?;
        self.container_layout.validate("containerLayoutProps")
    }
}

/// `value`, `placeholder`, `color` and `size` keys for an input group
pub fn transform_input_props(input: &InputProps, inspector: &impl Inspector) -> VisualStyle {
    VisualStyle::new()
        .with("value", input.value.as_str())
        .with("placeholder", input.placeholder.as_str())
        .with("color", inspector.color(&input.color))
        .with("size", px(input.size))
}

/// Input style transform with its formatters and defaults
#[derive(Clone, Debug, Default)]
pub struct InputTransform<I = StandardInspector> {
    inspector: I,
    defaults: InputProps,
}

impl InputTransform {
    /// Standard formatters and built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard formatters and the configured input defaults
    pub fn from_config(config: &TransformConfig) -> Self {
        Self::new().with_defaults(config.input.clone())
    }
}

impl<I: Inspector> InputTransform<I> {
    /// Replace the formatters
    pub fn with_inspector<J: Inspector>(self, inspector: J) -> InputTransform<J> {
        InputTransform {
            inspector,
            defaults: self.defaults,
        }
    }

    /// Replace the input group used when none is supplied
    pub fn with_defaults(mut self, defaults: InputProps) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &InputProps {
        &self.defaults
    }

    pub fn inspector(&self) -> &I {
        &self.inspector
    }

    /// Build the visual style for the given groups and parent context
    pub fn transform(
        &self,
        groups: Option<&StylePropertyGroups>,
        parent: Option<&ParentContext>,
    ) -> VisualStyle {
        let empty = StylePropertyGroups::default();
        let groups = groups.unwrap_or(&empty);
        let inspector = &self.inspector;
        let mut style = VisualStyle::new();

        if let Some(fill) = groups.fill.as_ref().filter(|fill| fill.active) {
            style.set("fill", inspector.color(&fill.color));
        }
        if let Some(border) = &groups.border {
            style.merge(inspector.border(border));
        }
        style.merge(inspector.layout(groups.layout.as_ref()));

        let input = groups.input.as_ref().unwrap_or(&self.defaults);
        style.merge(transform_input_props(input, inspector));

        if let Some(shadows) = &groups.shadows {
            style.set("shadow", transform_shadows(shadows, inspector));
        }
        style.merge(transform_filter_props(
            groups.blur.as_ref(),
            groups.filters.as_ref(),
        ));

        let container = groups.container_layout.clone().unwrap_or_default();
        style.merge(inspector.props_from_parent(parent, &container));

        tracing::trace!(keys = style.len(), has_parent = parent.is_some(), "input style transformed");
        style
    }
}

/// Transform with the standard formatters and built-in defaults
pub fn transform(
    groups: Option<&StylePropertyGroups>,
    parent: Option<&ParentContext>,
) -> VisualStyle {
    InputTransform::new().transform(groups, parent)
}
