//! Mould Core
//!
//! Shared primitives for the Mould component library:
//!
//! - **Colors**: [`Rgba`] as edited in inspector panels, formatted as compact
//!   CSS `rgba()` strings
//! - **Numbers**: CSS number formatting compatible with the design tool
//! - **Visual style records**: [`VisualStyle`], the flat, ordered output of a
//!   style transform
//! - **Paths**: [`ComponentPath`], the address of a component in a document
//!
//! # Example
//!
//! ```rust
//! use mould_core::{px, Rgba, VisualStyle};
//!
//! let style = VisualStyle::new()
//!     .with("color", Rgba::BLACK.to_string())
//!     .with("size", px(14.0));
//!
//! assert_eq!(style.get_str("color"), Some("rgba(0,0,0,1)"));
//! assert_eq!(style.get_str("size"), Some("14px"));
//! ```

pub mod color;
pub mod number;
pub mod path;
pub mod style;

pub use color::Rgba;
pub use number::{format_number, format_opt_number, px, UNDEFINED};
pub use path::ComponentPath;
pub use style::{StyleValue, VisualStyle};
