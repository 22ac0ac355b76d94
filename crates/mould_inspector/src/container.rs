//! Container-related layout
//!
//! How a component sits inside its parent depends on the parent: children of
//! a stack take part in flex layout, children of a frame are positioned
//! absolutely. The container layout group holds the child's settings for
//! either case; the parent context decides which ones apply.

use mould_core::{px, VisualStyle};
use serde::{Deserialize, Serialize};

use crate::validate::{finite, non_negative, Result, Validate};

/// Kind of the enclosing container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParentComponent {
    /// Flex container
    Stack,
    /// Free-form container with absolutely positioned children
    Frame,
    /// Any container that does not influence its children
    #[default]
    #[serde(other)]
    Other,
}

/// Context supplied by the enclosing container
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentContext {
    pub component: ParentComponent,
}

impl ParentContext {
    pub fn new(component: ParentComponent) -> Self {
        Self { component }
    }

    pub fn stack() -> Self {
        Self::new(ParentComponent::Stack)
    }

    pub fn frame() -> Self {
        Self::new(ParentComponent::Frame)
    }
}

/// Cross-axis alignment of a stack child
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignSelf {
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

impl AlignSelf {
    pub fn as_css(&self) -> &'static str {
        match self {
            AlignSelf::Auto => "auto",
            AlignSelf::FlexStart => "flex-start",
            AlignSelf::Center => "center",
            AlignSelf::FlexEnd => "flex-end",
            AlignSelf::Stretch => "stretch",
        }
    }
}

/// Container layout group: the child's settings within its parent
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerLayoutProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AlignSelf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Resolve the keys a parent container contributes to a child's style
pub fn props_from_parent(
    parent: Option<&ParentContext>,
    container: &ContainerLayoutProps,
) -> VisualStyle {
    let mut style = VisualStyle::new();
    let Some(parent) = parent else {
        return style;
    };

    match parent.component {
        ParentComponent::Stack => {
            style
                .set("flexGrow", container.flex_grow.unwrap_or(0.0))
                .set("flexShrink", container.flex_shrink.unwrap_or(1.0));
            if let Some(align) = container.align_self {
                style.set("alignSelf", align.as_css());
            }
        }
        ParentComponent::Frame => {
            style
                .set("position", "absolute")
                .set("left", px(container.x.unwrap_or(0.0)))
                .set("top", px(container.y.unwrap_or(0.0)));
        }
        ParentComponent::Other => {}
    }
    style
}

impl Validate for ContainerLayoutProps {
    fn validate(&self, path: &str) -> Result<()> {
        if let Some(grow) = self.flex_grow {
            non_negative(path, "flexGrow", grow)?;
        }
        if let Some(shrink) = self.flex_shrink {
            non_negative(path, "flexShrink", shrink)?;
        }
        if let Some(x) = self.x {
            finite(path, "x", x)?;
        }
        if let Some(y) = self.y {
            finite(path, "y", y)?;
        }
        Ok(())
    }
}
