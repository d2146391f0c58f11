//! Shape-backed text labels (avatar initials and the like) with colors picked
//! from a fixed palette, either at random or keyed by a value's hash.
//!
//! ```
//! use lettertile::color::MATERIAL;
//! use lettertile::geometry::Bounds;
//! use lettertile::label::RenderedLabel;
//! use lettertile::surface::RecordingSurface;
//!
//! let label = RenderedLabel::builder().build_round("J", 0xffffffff, MATERIAL.get_color("Jane"));
//! let mut surface = RecordingSurface::new();
//! label.draw(&mut surface, Bounds::sized(48, 48));
//! assert_eq!(surface.ops().len(), 2);
//! ```
pub mod color;
pub mod config;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod label;
pub mod surface;

pub use error::{Error, Result};
