//! # xnb
//!
//! Typed XNA content values and packed-content extraction.
//!
//! This library provides:
//! - The fixed-layout geometric and color value types found in decoded
//!   content, with bit-exact packed-integer and hex-string codecs
//! - A canonical XML projection for every value type
//! - A batch extraction pipeline that mirrors a content catalog into an
//!   output directory tree
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use xnb::{unpack, DirCatalog, UnpackOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = DirCatalog::open("Content")?;
//! let summary = unpack(&catalog, Path::new("out"), &UnpackOptions::default(), |name| {
//!     println!("{name}");
//! })?;
//! println!("{} assets written", summary.written.len());
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod extract;
pub mod math;
pub mod xml;

// Re-export commonly used items
#[doc(inline)]
pub use content::{CatalogError, ContentCatalog, DirCatalog, RawAsset};
#[doc(inline)]
pub use extract::{
    normalize_asset_name, unpack, AssetFailure, ExtractError, UnpackOptions, UnpackSummary,
};
#[doc(inline)]
pub use math::{
    BoundingBox, BoundingFrustum, BoundingSphere, Color, Matrix, Plane, Point, Quaternion, Ray,
    Rectangle, ValueError, Vector2, Vector3, Vector4,
};
#[doc(inline)]
pub use xml::{write_xml, XmlError, XmlExport};
