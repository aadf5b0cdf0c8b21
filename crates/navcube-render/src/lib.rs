//! Render helpers for navcube-rs.
//!
//! This crate provides everything the overlay pass needs besides the host's
//! own pipeline:
//! - [`FaceAtlas`] layout and [`AtlasPainter`] CPU repainting of the cube
//!   texture (base colors, hover highlight, outlines, face labels)
//! - [`cube_mesh`] geometry with atlas UVs and [`NavCubeUniforms`]
//! - [`AtlasTexture`] wgpu upload helpers
//! - [`ColorGrading`] WGSL snippet generation for the host's post pipeline

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod atlas;
pub mod color_grading;
pub mod error;
pub mod font;
pub mod geometry;
pub mod painter;
pub mod texture;

pub use atlas::{FaceAtlas, ZoneRect, ATLAS_COLS, ATLAS_ROWS};
pub use color_grading::{ColorGrading, ColorGradingUniforms};
pub use error::{RenderError, RenderResult};
pub use geometry::{cube_mesh, CubeMesh, NavCubeUniforms};
pub use painter::AtlasPainter;
pub use texture::AtlasTexture;
