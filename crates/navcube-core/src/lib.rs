//! Core abstractions for navcube-rs.
//!
//! This crate provides the GPU-independent parts of the navigation cube:
//! - [`NavCubeOptions`] configuration and its enumerated-value validation
//! - [`Region`] pick targets (faces, edges, corners) with view directions
//! - [`CameraPose`] math: gizmo synchronization, orbit, region framing
//! - [`CameraFlight`] fly/jump animation between camera poses
//! - [`ViewportRect`] overlay layout from alignment and margins

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod error;
pub mod flight;
pub mod layout;
pub mod options;
pub mod region;

pub use camera::{gizmo_pose, pose_for_region, CameraPose, GizmoProjection, GIZMO_DISTANCE};
pub use error::{NavCubeError, Result};
pub use flight::CameraFlight;
pub use layout::ViewportRect;
pub use options::{Alignment, CubeColors, Margins, NavCubeOptions};
pub use region::{Face, Region, RegionKind, DEFAULT_EDGE_BAND};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
