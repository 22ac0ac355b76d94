//! Formatter seam used by component transforms
//!
//! Component transforms never format colors, layout, borders or parent
//! context themselves; they go through an [`Inspector`]. Every method has a
//! standard implementation, so a host only overrides what it needs.
//!
//! ```rust
//! use mould_core::VisualStyle;
//! use mould_inspector::{ContainerLayoutProps, Inspector, ParentContext};
//!
//! /// Places every child on a grid line
//! struct GridInspector;
//!
//! impl Inspector for GridInspector {
//!     fn props_from_parent(
//!         &self,
//!         _parent: Option<&ParentContext>,
//!         _container: &ContainerLayoutProps,
//!     ) -> VisualStyle {
//!         VisualStyle::new().with("gridRow", "auto")
//!     }
//! }
//!
//! let style = GridInspector.props_from_parent(None, &ContainerLayoutProps::default());
//! assert_eq!(style.get_str("gridRow"), Some("auto"));
//! ```

use mould_core::{Rgba, VisualStyle};

use crate::border::{transform_border_props, BorderProps};
use crate::color::transform_color_to_str;
use crate::container::{props_from_parent, ContainerLayoutProps, ParentContext};
use crate::layout::{transform_layout, LayoutProps};

/// Formatters consumed by component transforms
pub trait Inspector {
    /// Color to CSS string
    fn color(&self, color: &Rgba) -> String {
        transform_color_to_str(color)
    }

    /// Layout keys; must accept an absent group
    fn layout(&self, layout: Option<&LayoutProps>) -> VisualStyle {
        transform_layout(layout)
    }

    /// Border keys
    fn border(&self, border: &BorderProps) -> VisualStyle {
        transform_border_props(border)
    }

    /// Keys contributed by the enclosing container
    fn props_from_parent(
        &self,
        parent: Option<&ParentContext>,
        container: &ContainerLayoutProps,
    ) -> VisualStyle {
        props_from_parent(parent, container)
    }
}

/// The standard formatters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardInspector;

impl Inspector for StandardInspector {}

impl<I: Inspector + ?Sized> Inspector for &I {
    fn color(&self, color: &Rgba) -> String {
        (**self).color(color)
    }

    fn layout(&self, layout: Option<&LayoutProps>) -> VisualStyle {
        (**self).layout(layout)
    }

    fn border(&self, border: &BorderProps) -> VisualStyle {
        (**self).border(border)
    }

    fn props_from_parent(
        &self,
        parent: Option<&ParentContext>,
        container: &ContainerLayoutProps,
    ) -> VisualStyle {
        (**self).props_from_parent(parent, container)
    }
}
