//! Mould Inspector Groups
//!
//! Style-property groups edited in the inspector panels, and the formatters
//! that turn each group into visual style keys.
//!
//! | Group | Type | Formatter |
//! |-------|------|-----------|
//! | Layout | [`LayoutProps`] | [`transform_layout`] |
//! | Fill | [`FillProps`] | [`transform_color_to_str`] |
//! | Border | [`BorderProps`] | [`transform_border_props`] |
//! | Shadows | [`ShadowsProps`] | [`transform_shadows`] |
//! | Blur + Filters | [`BlurProps`], [`FilterProps`] | [`transform_filter_props`] |
//! | Container layout | [`ContainerLayoutProps`] | [`props_from_parent`] |
//!
//! Components reach the color, layout, border and parent formatters through
//! the [`Inspector`] trait so hosts can substitute their own.
//!
//! All groups deserialize from the design tool's JSON props and can be
//! checked with [`Validate`]; transforms themselves never fail.

pub mod blur;
pub mod border;
pub mod color;
pub mod container;
pub mod filters;
pub mod inspector;
pub mod layout;
pub mod shadows;
pub mod validate;

pub use blur::{BlurProps, BlurStyle};
pub use border::{transform_border_props, BorderProps, BorderStyle};
pub use color::{transform_color_to_str, FillProps};
pub use container::{props_from_parent, AlignSelf, ContainerLayoutProps, ParentComponent, ParentContext};
pub use filters::{transform_filter_props, FilterEntry, FilterKind, FilterProps};
pub use inspector::{Inspector, StandardInspector};
pub use layout::{transform_layout, LayoutProps, Length, LengthUnit};
pub use shadows::{transform_shadows, ShadowEntry, ShadowsProps, SHADOW_SEPARATOR};
pub use validate::{Validate, ValidationError};
