//! Attribute template builders.
//!
//! Each builder accumulates state through chained calls and is finalized
//! into the string handed to the rendering framework:
//!
//! - [`coords`] - `coords` templates for `<area>` (rect, circle, poly)
//! - [`media`] - CSS media queries for the `media` attribute
//! - [`sizes`] - `sizes` for images and links
//! - [`srcset`] - image candidate strings for `srcset`
//! - [`fragment`] - minimal HTML fragments for `srcdoc`
//!
//! Validation failures are programmer errors: the plain finalizers panic,
//! and every one of them has a `try_` twin returning
//! [`htmlprop_core::BuildError`].
//!
//! # Example
//!
//! ```
//! use htmlprop_builders::media::MediaQuery;
//!
//! let mut query = MediaQuery::new();
//! query.screen().and().width(600);
//! assert_eq!(query.build(), "screen and (width: 600px) ");
//! ```

pub mod coords;
pub mod fragment;
pub mod media;
pub mod sizes;
pub mod srcset;

pub use coords::{CircleCoords, CoordsSet, PolyCoords, RectCoords};
pub use fragment::{Attr, Markup, MarkupOptions, Node, RawNode, VoidMatch};
pub use media::{MediaQuery, OrientationCase, ScanCase};
pub use sizes::{ImageSizes, LinkSizes, MediaQuerySize, SizesSet};
pub use srcset::{SrcsetPair, build_srcset};
